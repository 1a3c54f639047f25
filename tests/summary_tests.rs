// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use smartbudget::models::{AppData, Currency, Transaction, TransactionType};
use smartbudget::seed::seed;
use smartbudget::summary::{
    budget_lines, budget_percentage, category_spending, expense_in_month, expense_total,
    find_currency, income_in_month, income_total, remaining, sorted_transactions, total_balance,
};

fn tx(id: &str, amount: rust_decimal::Decimal, kind: TransactionType, cat: &str, day: (i32, u32, u32)) -> Transaction {
    Transaction::new(
        id,
        amount,
        kind,
        cat,
        "a1",
        Utc.with_ymd_and_hms(day.0, day.1, day.2, 12, 0, 0).unwrap(),
        None,
    )
}

fn with_spending() -> AppData {
    let mut data = seed();
    data.transactions = vec![
        tx("t1", dec!(50), TransactionType::Expense, "c1", (2024, 1, 10)),
        tx("t2", dec!(30), TransactionType::Expense, "c1", (2024, 2, 10)),
        tx("t3", dec!(20), TransactionType::Income, "c1", (2024, 2, 11)),
        tx("t4", dec!(120), TransactionType::Expense, "c2", (2024, 2, 12)),
        tx("t5", dec!(1000), TransactionType::Income, "c4", (2024, 2, 15)),
        tx("t6", dec!(5), TransactionType::Transfer, "c1", (2024, 2, 16)),
    ];
    data
}

#[test]
fn total_balance_sums_current_balances() {
    assert_eq!(total_balance(&seed()), Some(dec!(1600)));
}

#[test]
fn total_balance_ignores_ledger() {
    let data = with_spending();
    assert_eq!(total_balance(&data), Some(dec!(1600)));
}

#[test]
fn unreadable_balance_poisons_total() {
    let mut data = seed();
    data.accounts[1].current_balance = None;
    assert_eq!(total_balance(&data), None);
}

#[test]
fn income_and_expense_are_all_time() {
    let data = with_spending();
    assert_eq!(income_total(&data), Some(dec!(1020)));
    assert_eq!(expense_total(&data), Some(dec!(200)));
    assert_eq!(income_total(&seed()), Some(dec!(0)));
}

#[test]
fn month_scoped_totals() {
    let data = with_spending();
    let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(expense_in_month(&data, feb), Some(dec!(150)));
    assert_eq!(income_in_month(&data, feb), Some(dec!(1020)));
    assert_eq!(expense_in_month(&data, jan), Some(dec!(50)));
    assert_eq!(income_in_month(&data, jan), Some(dec!(0)));
}

#[test]
fn category_spending_counts_only_expenses() {
    let data = with_spending();
    assert_eq!(category_spending(&data, "c1"), Some(dec!(80)));
    assert_eq!(category_spending(&data, "c2"), Some(dec!(120)));
    assert_eq!(category_spending(&data, "missing"), Some(dec!(0)));
}

#[test]
fn remaining_never_negative() {
    assert_eq!(remaining(Some(dec!(300)), Some(dec!(80))), Some(dec!(220)));
    assert_eq!(remaining(Some(dec!(300)), Some(dec!(350))), Some(dec!(0)));
    assert_eq!(remaining(None, Some(dec!(1))), None);
}

#[test]
fn budget_percentage_guards_zero_limit() {
    assert_eq!(budget_percentage(Some(dec!(80)), Some(dec!(320))), Some(dec!(25)));
    assert_eq!(budget_percentage(Some(dec!(150)), Some(dec!(100))), Some(dec!(150)));
    assert_eq!(budget_percentage(Some(dec!(10)), Some(dec!(0))), None);
}

#[test]
fn transactions_sort_newest_first() {
    let mut data = seed();
    data.transactions = vec![
        tx("jan", dec!(1), TransactionType::Expense, "c1", (2024, 1, 1)),
        tx("mar", dec!(1), TransactionType::Expense, "c1", (2024, 3, 1)),
        tx("feb", dec!(1), TransactionType::Expense, "c1", (2024, 2, 1)),
    ];
    let ids: Vec<_> = sorted_transactions(&data).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["mar", "feb", "jan"]);
    // the document itself is untouched
    assert_eq!(data.transactions[0].id, "jan");
}

#[test]
fn sort_is_stable_and_puts_invalid_dates_last() {
    let mut data = seed();
    let mut broken = tx("bad", dec!(1), TransactionType::Expense, "c1", (2024, 1, 1));
    broken.date = None;
    data.transactions = vec![
        broken,
        tx("x", dec!(1), TransactionType::Expense, "c1", (2024, 2, 1)),
        tx("old", dec!(1), TransactionType::Expense, "c1", (2023, 2, 1)),
        tx("y", dec!(1), TransactionType::Expense, "c1", (2024, 2, 1)),
    ];
    let ids: Vec<_> = sorted_transactions(&data).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["x", "y", "old", "bad"]);
}

#[test]
fn currency_lookup_falls_back() {
    let data = seed();
    assert_eq!(find_currency(&data.currencies, "EUR").symbol, "€");
    assert_eq!(find_currency(&data.currencies, "GBP").code, "USD");

    let only_mxn = vec![Currency::new("x", "MXN", "MX$", "Peso")];
    assert_eq!(find_currency(&only_mxn, "USD").symbol, "MX$");

    let none: Vec<Currency> = Vec::new();
    let fallback = find_currency(&none, "EUR");
    assert_eq!(fallback.symbol, "$");
    assert_eq!(fallback.code, "USD");
}

#[test]
fn budget_lines_cover_budgeted_expense_categories() {
    let data = with_spending();
    let lines = budget_lines(&data);
    let names: Vec<_> = lines.iter().map(|l| l.category.name.as_str()).collect();
    assert_eq!(names, ["Comida", "Transporte", "Hogar"]);

    let transporte = &lines[1];
    assert_eq!(transporte.spent, Some(dec!(120)));
    assert_eq!(transporte.percentage, Some(dec!(120)));
    assert_eq!(transporte.fill, dec!(100));
    assert_eq!(transporte.remaining, Some(dec!(0)));

    let hogar = &lines[2];
    assert_eq!(hogar.spent, Some(dec!(0)));
    assert_eq!(hogar.fill, dec!(0));
    assert_eq!(hogar.remaining, Some(dec!(500)));
}
