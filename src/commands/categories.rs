// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, TransactionType};
use crate::state::AppState;
use crate::utils::{maybe_print_json, next_id, parse_decimal, pretty_table, required};
use anyhow::{Result, bail};
use serde::Serialize;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?;
            let typ = TransactionType::parse(required(sub, "type")?);
            let budget = parse_decimal(required(sub, "budget")?)?;
            if state.data().categories.iter().any(|c| &c.name == name) {
                bail!("Category '{}' already exists", name);
            }
            let id = next_id("c", state.data().categories.iter().map(|c| c.id.as_str()));
            let category = Category::new(
                &id,
                name,
                typ,
                required(sub, "icon")?,
                budget,
                required(sub, "color")?,
            );
            state.modify(|d| d.categories.push(category));
            println!("Added category '{}'", name);
        }
        Some(("list", sub)) => list(state, sub)?,
        Some(("rm", sub)) => {
            let name = required(sub, "name")?.clone();
            if !state.data().categories.iter().any(|c| c.name == name) {
                bail!("Category '{}' not found", name);
            }
            state.modify(|d| d.categories.retain(|c| c.name != name));
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub kind: String,
    pub budget: String,
}

pub fn query_rows(state: &AppState) -> Vec<CategoryRow> {
    state
        .data()
        .categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id.clone(),
            icon: c.icon.clone(),
            name: c.name.clone(),
            kind: match c.r#type {
                TransactionType::Income => "Income".into(),
                TransactionType::Expense => "Expense".into(),
                ref other => other.to_string(),
            },
            budget: c
                .budget_limit
                .map_or_else(|| "NaN".into(), |b| format!("{:.2}", b)),
        })
        .collect()
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(state);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.id, r.icon, r.name, r.kind, r.budget])
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Icon", "Category", "Type", "Budget"], rows)
        );
    }
    Ok(())
}
