// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use smartbudget::db::{self, Backend};
use smartbudget::seed::seed;
use smartbudget::state::AppState;
use smartbudget::storage::Persistence;
use smartbudget::{cli, commands};

fn init_logger(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    init_logger(
        matches
            .get_one::<String>("log-level")
            .map(|s| s.as_str())
            .unwrap_or("warn"),
    );

    let dir = match matches.get_one::<PathBuf>("data-dir") {
        Some(d) => d.clone(),
        None => db::data_dir()?,
    };
    let backend = matches
        .get_one::<Backend>("backend")
        .copied()
        .unwrap_or(Backend::File);
    let store = db::open_store(backend, &dir)?;
    let mut state = AppState::open(Persistence::new(store));
    debug!(loading = state.is_loading(), "state ready");

    match matches.subcommand() {
        Some(("init", _)) => {
            let created = state
                .init()
                .context("Stored document is unreadable, run `reset` to replace it")?;
            let verb = if created { "created" } else { "already present" };
            println!(
                "Document {} in {}",
                verb,
                state.persistence().store().describe()
            );
        }
        Some(("reset", _)) => {
            state.update(seed());
            println!("Document reset to starter data");
        }
        Some(("account", sub)) => commands::accounts::handle(&mut state, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut state, sub)?,
        Some(("currency", sub)) => commands::currencies::handle(&mut state, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut state, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(state.data(), sub)?,
        Some(("report", sub)) => commands::reports::handle(state.data(), sub)?,
        Some(("export", sub)) => commands::exporter::handle(state.data(), sub)?,
        Some(("doctor", _)) => commands::doctor::handle(state.data())?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
