// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AppData;
use crate::summary::{
    DISPLAY_CURRENCY, expense_in_month, expense_total, income_in_month, income_total,
    total_balance,
};
use crate::utils::{format_currency, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(data: &AppData, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("summary", sub)) = m.subcommand() {
        summary(data, sub)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub period: String,
    pub total_balance: String,
    pub income: String,
    pub expenses: String,
    pub accounts: Vec<(String, String)>,
}

/// Home screen figures. Without `month` the income and expense totals cover
/// every transaction.
pub fn build_summary(data: &AppData, month: Option<&str>) -> Result<Summary> {
    let fmt = |v| format_currency(v, DISPLAY_CURRENCY, &data.currencies);
    let (period, income, expenses) = match month {
        Some(m) => {
            let first = parse_month(m)?;
            (
                m.to_string(),
                income_in_month(data, first),
                expense_in_month(data, first),
            )
        }
        None => ("all time".to_string(), income_total(data), expense_total(data)),
    };
    Ok(Summary {
        period,
        total_balance: fmt(total_balance(data)),
        income: fmt(income),
        expenses: fmt(expenses),
        accounts: data
            .accounts
            .iter()
            .map(|a| {
                (
                    a.name.clone(),
                    format_currency(a.current_balance, &a.currency, &data.currencies),
                )
            })
            .collect(),
    })
}

fn summary(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month").map(|s| s.as_str());
    let s = build_summary(data, month)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        println!(
            "{}",
            pretty_table(
                &["Total balance", "Income", "Expenses", "Period"],
                vec![vec![
                    s.total_balance.clone(),
                    s.income.clone(),
                    s.expenses.clone(),
                    s.period.clone(),
                ]],
            )
        );
        let rows = s.accounts.into_iter().map(|(n, b)| vec![n, b]).collect();
        println!("{}", pretty_table(&["Account", "Balance"], rows));
    }
    Ok(())
}
