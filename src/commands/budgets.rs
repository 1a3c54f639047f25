// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AppData;
use crate::summary::{DISPLAY_CURRENCY, budget_lines};
use crate::utils::{format_currency, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

const BAR_WIDTH: usize = 20;

pub fn handle(data: &AppData, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("report", sub)) = m.subcommand() {
        report(data, sub)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BudgetRow {
    pub category: String,
    pub budget: String,
    pub spent: String,
    pub percentage: String,
    pub remaining: String,
    #[serde(skip)]
    pub bar: String,
}

pub fn report_rows(data: &AppData) -> Vec<BudgetRow> {
    let fmt = |v| format_currency(v, DISPLAY_CURRENCY, &data.currencies);
    budget_lines(data)
        .into_iter()
        .map(|line| {
            let filled = (line.fill.to_f64().unwrap_or(0.0) / 100.0 * BAR_WIDTH as f64).round()
                as usize;
            BudgetRow {
                category: format!("{} {}", line.category.icon, line.category.name),
                budget: fmt(line.category.budget_limit),
                spent: fmt(line.spent),
                percentage: line
                    .percentage
                    .map_or_else(|| "NaN".into(), |p| format!("{:.0}%", p.round())),
                remaining: fmt(line.remaining),
                bar: format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled)),
            }
        })
        .collect()
}

fn report(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let rows = report_rows(data);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let table = rows
            .into_iter()
            .map(|r| vec![r.category, r.budget, r.spent, r.bar, r.percentage, r.remaining])
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Category", "Budget", "Spent", "", "Used", "Remaining"],
                table
            )
        );
    }
    Ok(())
}
