// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::models::{Account, AppData, Category, Currency};
use crate::summary::find_currency;

static FLOAT_PREFIX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^([+-]?)(\d*)\.?(\d*)(?:[eE]([+-]?\d+))?").ok());

/// Lenient number coercion: leading whitespace is skipped and the longest
/// numeric prefix is used, so `"12.5kg"` reads as `12.5`. Returns `None`
/// where a browser would produce `NaN` (or a value `Decimal` cannot hold).
pub fn parse_float(s: &str) -> Option<Decimal> {
    let caps = FLOAT_PREFIX.as_ref()?.captures(s.trim_start())?;
    let part = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let (sign, int, frac) = (part(1), part(2), part(3));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    let sign = if sign == "-" { "-" } else { "" };
    let int = if int.is_empty() { "0" } else { int };
    let lit = if frac.is_empty() {
        format!("{}{}", sign, int)
    } else {
        format!("{}{}.{}", sign, int, frac)
    };
    match caps.get(4) {
        Some(exp) => Decimal::from_scientific(&format!("{}e{}", lit, exp.as_str())).ok(),
        None => Decimal::from_str(&lit).ok(),
    }
}

/// ISO-8601 instant. Accepts RFC 3339, a date-time without offset (read as
/// local wall-clock time) and a bare date (UTC midnight).
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|d| d.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}

/// Command-line date. A bare `YYYY-MM-DD` is local midnight, so the entered
/// day is the day shown and filtered on; anything else goes through
/// [`parse_instant`].
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let local_day = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|n| Local.from_local_datetime(&n).earliest())
        .map(|d| d.with_timezone(&Utc));
    local_day
        .or_else(|| parse_instant(s))
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// First day of the month named by `YYYY-MM`.
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Symbol of the looked-up currency followed by the amount with two decimals
/// and comma thousands separators, e.g. `$1,234.50`.
pub fn format_currency(amount: Option<Decimal>, code: &str, currencies: &[Currency]) -> String {
    let currency = find_currency(currencies, code);
    match amount {
        Some(a) => format!("{}{}", currency.symbol, group_thousands(&fixed2(a))),
        None => format!("{}NaN", currency.symbol),
    }
}

fn fixed2(d: Decimal) -> String {
    let r = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", r)
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int, frac) = rest.split_once('.').unwrap_or((rest, ""));
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if frac.is_empty() {
        format!("{}{}", sign, out)
    } else {
        format!("{}{}.{}", sign, out, frac)
    }
}

pub fn format_date(d: Option<DateTime<Utc>>) -> String {
    match d {
        Some(d) => d.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => "Invalid Date".into(),
    }
}

pub fn format_date_short(d: Option<DateTime<Utc>>) -> String {
    match d {
        Some(d) => d.with_timezone(&Local).format("%b %d").to_string(),
        None => "Invalid Date".into(),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn account_by_name<'a>(data: &'a AppData, name: &str) -> Result<&'a Account> {
    data.accounts
        .iter()
        .find(|a| a.name == name)
        .with_context(|| format!("Account '{}' not found", name))
}

pub fn category_by_name<'a>(data: &'a AppData, name: &str) -> Result<&'a Category> {
    data.categories
        .iter()
        .find(|c| c.name == name)
        .with_context(|| format!("Category '{}' not found", name))
}

/// Next free id in the `prefix` + number style of the seed (`a1`, `c5`, ...).
pub fn next_id<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{}", prefix, max + 1)
}

pub fn required<'a>(m: &'a clap::ArgMatches, id: &str) -> Result<&'a String> {
    m.get_one::<String>(id)
        .with_context(|| format!("Missing required argument '{}'", id))
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
