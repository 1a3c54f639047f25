// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AppData;
use crate::utils::{format_date, required};
use anyhow::{Context, Result, anyhow};
use serde_json::json;

pub fn handle(data: &AppData, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("document", sub)) => export_document(data, sub),
        Some(("transactions", sub)) => export_transactions(data, sub),
        _ => Ok(()),
    }
}

fn export_document(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let out = required(sub, "out")?;
    let body = serde_json::to_string_pretty(&data.encode())?;
    std::fs::write(out, body).with_context(|| format!("Write {}", out))?;
    println!("Exported document to {}", out);
    Ok(())
}

fn export_transactions(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    let mut txs: Vec<_> = data.transactions.iter().collect();
    txs.sort_by(|a, b| a.date.cmp(&b.date));
    let rows: Vec<[String; 7]> = txs
        .into_iter()
        .map(|t| {
            [
                format_date(t.date),
                data.account(&t.account_id)
                    .map(|a| a.name.clone())
                    .unwrap_or_default(),
                data.category(&t.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                t.r#type.to_string(),
                t.amount.map_or_else(|| "NaN".into(), |a| a.to_string()),
                data.account(&t.account_id)
                    .map(|a| a.currency.clone())
                    .unwrap_or_default(),
                t.note.clone(),
            ]
        })
        .collect();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date", "account", "category", "type", "amount", "currency", "note",
            ])?;
            for row in &rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .into_iter()
                .map(|[date, account, category, typ, amount, currency, note]| {
                    json!({
                        "date": date,
                        "account": account,
                        "category": category,
                        "type": typ,
                        "amount": amount,
                        "currency": currency,
                        "note": note,
                    })
                })
                .collect();
            let body = serde_json::to_string_pretty(&items)?;
            std::fs::write(out, body).with_context(|| format!("Write {}", out))?;
        }
        other => return Err(anyhow!("Unknown export format '{}'", other)),
    }
    println!("Exported {} transactions to {}", fmt, out);
    Ok(())
}
