// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AppData;
use crate::utils::pretty_table;
use anyhow::Result;
use std::collections::HashSet;

pub fn handle(data: &AppData) -> Result<()> {
    let rows = diagnose(data);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Problems the loader tolerates but the user probably wants to know about.
pub fn diagnose(data: &AppData) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut issue = |kind: &str, detail: String| rows.push(vec![kind.to_string(), detail]);

    // 1) Duplicate ids and currency codes
    for (kind, ids) in [
        ("duplicate_account_id", data.accounts.iter().map(|a| &a.id).collect::<Vec<_>>()),
        ("duplicate_category_id", data.categories.iter().map(|c| &c.id).collect()),
        ("duplicate_transaction_id", data.transactions.iter().map(|t| &t.id).collect()),
        ("duplicate_currency_code", data.currencies.iter().map(|c| &c.code).collect()),
    ] {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                issue(kind, id.clone());
            }
        }
    }

    // 2) Dangling references
    for a in &data.accounts {
        if !data.currencies.iter().any(|c| c.code == a.currency) {
            issue("account_unknown_currency", format!("{} {}", a.name, a.currency));
        }
    }
    for t in &data.transactions {
        if data.account(&t.account_id).is_none() {
            issue("txn_unknown_account", format!("{} {}", t.id, t.account_id));
        }
        if data.category(&t.category_id).is_none() {
            issue("txn_unknown_category", format!("{} {}", t.id, t.category_id));
        }
    }

    // 3) Values that did not survive coercion
    for a in &data.accounts {
        if a.initial_balance.is_none() || a.current_balance.is_none() {
            issue("account_balance_nan", a.name.clone());
        }
    }
    for c in &data.categories {
        if c.budget_limit.is_none() {
            issue("category_budget_nan", c.name.clone());
        }
    }
    for t in &data.transactions {
        if t.amount.is_none() {
            issue("txn_amount_nan", t.id.clone());
        }
        if t.date.is_none() {
            issue("txn_invalid_date", t.id.clone());
        }
    }
    rows
}
