// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};
use std::path::PathBuf;

use crate::db::Backend;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn name_arg() -> Arg {
    Arg::new("name").required(true)
}

pub fn build_cli() -> Command {
    Command::new("smartbudget")
        .version(crate_version!())
        .about("Accounts, transactions and category budgets in one local document")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .env("SMARTBUDGET_HOME")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the stored document"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .env("SMARTBUDGET_BACKEND")
                .global(true)
                .value_parser(value_parser!(Backend))
                .default_value("file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .env("SMARTBUDGET_LOG")
                .global(true)
                .default_value("warn"),
        )
        .subcommand(
            Command::new("init").about("Store the starter document if nothing is stored yet"),
        )
        .subcommand(
            Command::new("reset").about("Overwrite the stored document with the starter data"),
        )
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .arg(name_arg())
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["cash", "bank", "card", "crypto"])
                                .default_value("bank"),
                        )
                        .arg(Arg::new("currency").long("currency").default_value("USD"))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .allow_negative_numbers(true)
                                .default_value("0"),
                        )
                        .arg(Arg::new("color").long("color").default_value("#3B82F6")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(name_arg())),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(name_arg())
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense", "transfer"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("icon").long("icon").default_value("•"))
                        .arg(Arg::new("budget").long("budget").default_value("0"))
                        .arg(Arg::new("color").long("color").default_value("#6B7280")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(name_arg())),
        )
        .subcommand(
            Command::new("currency")
                .about("Manage currencies")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("code").required(true))
                        .arg(Arg::new("symbol").long("symbol").required(true))
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .allow_negative_numbers(true)
                                .required(true),
                        )
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense", "transfer"]),
                        )
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("month").long("month"))
                        .arg(Arg::new("account").long("account"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("budget")
                .about("Budget progress per expense category")
                .subcommand(json_flags(Command::new("report"))),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries")
                .subcommand(json_flags(
                    Command::new("summary").arg(Arg::new("month").long("month")),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write data to a file")
                .subcommand(
                    Command::new("document").arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Report inconsistencies in the stored document"))
}
