// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Currency;
use crate::state::AppState;
use crate::utils::{maybe_print_json, next_id, pretty_table, required};
use anyhow::{Result, bail};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let code = required(sub, "code")?.to_uppercase();
            if state.data().currencies.iter().any(|c| c.code == code) {
                bail!("Currency '{}' already exists", code);
            }
            let id = next_id("cur", state.data().currencies.iter().map(|c| c.id.as_str()));
            let currency = Currency::new(
                &id,
                &code,
                required(sub, "symbol")?,
                required(sub, "name")?,
            );
            state.modify(|d| d.currencies.push(currency));
            println!("Added currency {}", code);
        }
        Some(("list", sub)) => {
            let data: Vec<Vec<String>> = state
                .data()
                .currencies
                .iter()
                .map(|c| vec![c.code.clone(), c.symbol.clone(), c.name.clone()])
                .collect();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                println!("{}", pretty_table(&["Code", "Symbol", "Name"], data));
            }
        }
        _ => {}
    }
    Ok(())
}
