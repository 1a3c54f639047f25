// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, AccountType};
use crate::state::AppState;
use crate::utils::{format_currency, maybe_print_json, next_id, parse_decimal, pretty_table, required};
use anyhow::{Result, bail};
use serde::Serialize;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("rm", sub)) => {
            let name = required(sub, "name")?.clone();
            if !state.data().accounts.iter().any(|a| a.name == name) {
                bail!("Account '{}' not found", name);
            }
            state.modify(|d| d.accounts.retain(|a| a.name != name));
            println!("Removed account '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let name = required(sub, "name")?;
    let typ = AccountType::parse(required(sub, "type")?);
    let ccy = required(sub, "currency")?.to_uppercase();
    let balance = parse_decimal(required(sub, "balance")?)?;
    let color = required(sub, "color")?;

    let data = state.data();
    if data.accounts.iter().any(|a| &a.name == name) {
        bail!("Account '{}' already exists", name);
    }
    let id = next_id("a", data.accounts.iter().map(|a| a.id.as_str()));
    let account = Account::new(&id, name, typ, &ccy, balance, balance, color);
    state.modify(|d| d.accounts.push(account));
    println!("Added account '{}' ({}, {})", name, required(sub, "type")?, ccy);
    Ok(())
}

#[derive(Serialize)]
pub struct AccountRow {
    pub id: String,
    pub name: String,
    pub r#type: String,
    pub currency: String,
    pub balance: String,
}

pub fn query_rows(state: &AppState) -> Vec<AccountRow> {
    let data = state.data();
    data.accounts
        .iter()
        .map(|a| AccountRow {
            id: a.id.clone(),
            name: a.name.clone(),
            r#type: a.r#type.to_string(),
            currency: a.currency.clone(),
            balance: format_currency(a.current_balance, &a.currency, &data.currencies),
        })
        .collect()
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(state);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.id, r.name, r.r#type, r.currency, r.balance])
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Type", "Currency", "Balance"], rows)
        );
    }
    Ok(())
}
