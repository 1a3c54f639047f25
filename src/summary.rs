// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Figures derived from a document snapshot. Everything here is pure.
//!
//! A `None` amount anywhere in a sum makes the whole sum `None`, the same way
//! a single unreadable number poisons a floating-point total.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::models::{AppData, Category, Currency, Transaction, TransactionType};

/// Code used for totals that span accounts.
pub const DISPLAY_CURRENCY: &str = "USD";

static DEFAULT_CURRENCY: Lazy<Currency> = Lazy::new(|| Currency::new("", "USD", "$", "Dólar"));

fn sum<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v?))
}

pub fn total_balance(data: &AppData) -> Option<Decimal> {
    sum(data.accounts.iter().map(|a| a.current_balance))
}

fn total_of<'a, I>(txs: I, kind: &TransactionType) -> Option<Decimal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    sum(txs
        .into_iter()
        .filter(|t| t.r#type == *kind)
        .map(|t| t.amount))
}

/// All-time income. No date filter is applied.
pub fn income_total(data: &AppData) -> Option<Decimal> {
    total_of(&data.transactions, &TransactionType::Income)
}

/// All-time expenses. No date filter is applied.
pub fn expense_total(data: &AppData) -> Option<Decimal> {
    total_of(&data.transactions, &TransactionType::Expense)
}

/// Whether `t` is dated in the calendar month of `month`, in local time.
pub fn in_month(t: &Transaction, month: NaiveDate) -> bool {
    t.date
        .map(|d| d.with_timezone(&Local).date_naive())
        .is_some_and(|d| d.year() == month.year() && d.month() == month.month())
}

pub fn income_in_month(data: &AppData, month: NaiveDate) -> Option<Decimal> {
    total_of(
        data.transactions.iter().filter(|t| in_month(t, month)),
        &TransactionType::Income,
    )
}

pub fn expense_in_month(data: &AppData, month: NaiveDate) -> Option<Decimal> {
    total_of(
        data.transactions.iter().filter(|t| in_month(t, month)),
        &TransactionType::Expense,
    )
}

pub fn category_spending(data: &AppData, category_id: &str) -> Option<Decimal> {
    total_of(
        data.transactions
            .iter()
            .filter(|t| t.category_id == category_id),
        &TransactionType::Expense,
    )
}

/// `spent / limit * 100`, unclamped. `None` when the limit is zero.
pub fn budget_percentage(spent: Option<Decimal>, limit: Option<Decimal>) -> Option<Decimal> {
    spent?
        .checked_div(limit?)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
}

pub fn remaining(limit: Option<Decimal>, spent: Option<Decimal>) -> Option<Decimal> {
    Some((limit?.checked_sub(spent?)?).max(Decimal::ZERO))
}

/// Most recent first. Equal dates keep their stored order; undated entries
/// go last.
pub fn sorted_transactions(data: &AppData) -> Vec<&Transaction> {
    let mut txs: Vec<&Transaction> = data.transactions.iter().collect();
    txs.sort_by(|a, b| b.date.cmp(&a.date));
    txs
}

/// Currency with `code`, else the first one in the list, else a built-in
/// dollar.
pub fn find_currency<'a>(currencies: &'a [Currency], code: &str) -> &'a Currency {
    currencies
        .iter()
        .find(|c| c.code == code)
        .or_else(|| currencies.first())
        .unwrap_or_else(|| &*DEFAULT_CURRENCY)
}

#[derive(Debug, Clone)]
pub struct BudgetLine<'a> {
    pub category: &'a Category,
    pub spent: Option<Decimal>,
    pub percentage: Option<Decimal>,
    /// Progress bar fill, clamped to `0..=100`.
    pub fill: Decimal,
    pub remaining: Option<Decimal>,
}

/// One line per expense category that tracks a budget.
pub fn budget_lines(data: &AppData) -> Vec<BudgetLine<'_>> {
    data.categories
        .iter()
        .filter(|c| c.r#type == TransactionType::Expense)
        .filter(|c| c.budget_limit.is_some_and(|l| l > Decimal::ZERO))
        .map(|category| {
            let spent = category_spending(data, &category.id);
            let percentage = budget_percentage(spent, category.budget_limit);
            let fill = percentage
                .unwrap_or(Decimal::ZERO)
                .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
            BudgetLine {
                category,
                spent,
                percentage,
                fill,
                remaining: remaining(category.budget_limit, spent),
            }
        })
        .collect()
}
