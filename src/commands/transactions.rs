// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AppData, Transaction, TransactionType};
use crate::state::AppState;
use crate::summary::{DISPLAY_CURRENCY, in_month, sorted_transactions};
use crate::utils::{
    account_by_name, category_by_name, format_currency, format_date, format_date_short,
    maybe_print_json, next_id, parse_date, parse_decimal, parse_month, pretty_table, required,
};
use anyhow::{Result, bail};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

const NO_ACCOUNT: &str = "No account";
const NO_CATEGORY: &str = "No category";
const NO_ICON: &str = "📝";

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("list", sub)) => list(state.data(), sub)?,
        _ => {}
    }
    Ok(())
}

// Account balances are left untouched: `current_balance` is maintained
// separately from the ledger.
fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(required(sub, "amount")?)?;
    if amount < Decimal::ZERO {
        bail!("Amount must not be negative, use --type to record direction");
    }
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Utc::now(),
    };
    let note = sub.get_one::<String>("note").map(|s| s.as_str());

    let data = state.data();
    let account = account_by_name(data, required(sub, "account")?)?;
    let category = category_by_name(data, required(sub, "category")?)?;
    let typ = match sub.get_one::<String>("type") {
        Some(t) => TransactionType::parse(t),
        None if category.r#type == TransactionType::Income => TransactionType::Income,
        None => TransactionType::Expense,
    };
    let id = next_id("t", data.transactions.iter().map(|t| t.id.as_str()));
    let tx = Transaction::new(&id, amount, typ, &category.id, &account.id, date, note);
    let shown = format_currency(Some(amount), &account.currency, &data.currencies);
    let (account_name, category_name) = (account.name.clone(), category.name.clone());

    state.modify(|d| d.transactions.push(tx));
    println!(
        "Recorded {} on {} in '{}' (acct: {})",
        shown,
        format_date(Some(date)),
        category_name,
        account_name
    );
    Ok(())
}

fn list(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let rows = query_rows(data, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let table: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| vec![r.day, r.account, r.category, r.amount, r.note])
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Account", "Category", "Amount", "Note"], table)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub account: String,
    pub category: String,
    pub r#type: String,
    pub amount: String,
    pub note: String,
    #[serde(skip)]
    pub day: String,
}

/// Newest first, filtered by the `list` options.
pub fn query_rows(data: &AppData, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;
    let account_id = match sub.get_one::<String>("account") {
        Some(name) => Some(account_by_name(data, name)?.id.as_str()),
        None => None,
    };
    let category_id = match sub.get_one::<String>("category") {
        Some(name) => Some(category_by_name(data, name)?.id.as_str()),
        None => None,
    };
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let rows = sorted_transactions(data)
        .into_iter()
        .filter(|t| account_id.is_none_or(|id| t.account_id == id))
        .filter(|t| category_id.is_none_or(|id| t.category_id == id))
        .filter(|t| month.is_none_or(|m| in_month(t, m)))
        .take(limit)
        .map(|t| row_for(data, t))
        .collect();
    Ok(rows)
}

fn row_for(data: &AppData, t: &Transaction) -> TransactionRow {
    let category = data.category(&t.category_id);
    let account = data.account(&t.account_id);
    let currency = account.map_or(DISPLAY_CURRENCY, |a| a.currency.as_str());
    let icon = category
        .map(|c| c.icon.as_str())
        .filter(|i| !i.is_empty())
        .unwrap_or(NO_ICON);
    let category_name = category
        .map(|c| c.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(NO_CATEGORY);
    TransactionRow {
        id: t.id.clone(),
        date: format_date(t.date),
        account: account
            .map(|a| a.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(NO_ACCOUNT)
            .to_string(),
        category: format!("{} {}", icon, category_name),
        r#type: t.r#type.to_string(),
        amount: format!(
            "{}{}",
            t.r#type.sign(),
            format_currency(t.amount.map(|a| a.abs()), currency, &data.currencies)
        ),
        note: t.note.clone(),
        day: format_date_short(t.date),
    }
}
