// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Entities of the budget document and their JSON codecs.
//!
//! Decoding is deliberately lenient: numbers go through the same prefix
//! coercion a browser `parseFloat` applies, and anything that cannot be
//! coerced becomes `None` instead of an error. Encoding is total.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Number, Value, json};

use crate::utils::{parse_float, parse_instant};

/// An untyped JSON object as read from storage.
pub type PlainRecord = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("document root is not a JSON object")]
    NotAnObject,
    #[error("'{0}' is not a list")]
    NotAList(&'static str),
    #[error("{collection}[{index}] is not a JSON object")]
    BadRecord {
        collection: &'static str,
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountType {
    Cash,
    Bank,
    Card,
    Crypto,
    /// Any value outside the known set, kept verbatim.
    Other(String),
}

impl AccountType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cash => "cash",
            Self::Bank => "bank",
            Self::Card => "card",
            Self::Crypto => "crypto",
            Self::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "cash" => Self::Cash,
            "bank" => Self::Bank,
            "card" => Self::Card,
            "crypto" => Self::Crypto,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shared by categories and transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Transfer => "transfer",
            Self::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "income" => Self::Income,
            "expense" => Self::Expense,
            "transfer" => Self::Transfer,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display sign: only income is shown as positive.
    pub fn sign(&self) -> char {
        if *self == Self::Income { '+' } else { '-' }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    pub id: String,
    pub code: String,
    pub symbol: String,
    pub name: String,
}

impl Currency {
    pub fn new(id: &str, code: &str, symbol: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            code: code.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }

    pub fn encode(&self) -> Value {
        json!({
            "id": self.id,
            "code": self.code,
            "symbol": self.symbol,
            "name": self.name,
        })
    }

    pub fn decode(r: &PlainRecord) -> Self {
        Self {
            id: text(r, "id"),
            code: text(r, "code"),
            symbol: text(r, "symbol"),
            name: text(r, "name"),
        }
    }
}

/// Balances are `None` when the stored value could not be read as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub r#type: AccountType,
    /// Currency `code`, not id. May point at a currency that no longer exists.
    pub currency: String,
    pub initial_balance: Option<Decimal>,
    pub current_balance: Option<Decimal>,
    pub color: String,
}

impl Account {
    pub fn new(
        id: &str,
        name: &str,
        r#type: AccountType,
        currency: &str,
        initial_balance: Decimal,
        current_balance: Decimal,
        color: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            r#type,
            currency: currency.to_string(),
            initial_balance: Some(initial_balance),
            current_balance: Some(current_balance),
            color: color.to_string(),
        }
    }

    pub fn encode(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "type": self.r#type.as_str(),
            "currency": self.currency,
            "initialBalance": number_value(self.initial_balance),
            "currentBalance": number_value(self.current_balance),
            "color": self.color,
        })
    }

    pub fn decode(r: &PlainRecord) -> Self {
        Self {
            id: text(r, "id"),
            name: text(r, "name"),
            r#type: AccountType::parse(&text(r, "type")),
            currency: text(r, "currency"),
            initial_balance: number(r, "initialBalance"),
            current_balance: number(r, "currentBalance"),
            color: text(r, "color"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub r#type: TransactionType,
    pub icon: String,
    /// Zero means no budget is tracked for the category.
    pub budget_limit: Option<Decimal>,
    pub color: String,
}

impl Category {
    pub fn new(
        id: &str,
        name: &str,
        r#type: TransactionType,
        icon: &str,
        budget_limit: Decimal,
        color: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            r#type,
            icon: icon.to_string(),
            budget_limit: Some(budget_limit),
            color: color.to_string(),
        }
    }

    pub fn encode(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "type": self.r#type.as_str(),
            "icon": self.icon,
            "budgetLimit": number_value(self.budget_limit),
            "color": self.color,
        })
    }

    pub fn decode(r: &PlainRecord) -> Self {
        Self {
            id: text(r, "id"),
            name: text(r, "name"),
            r#type: TransactionType::parse(&text(r, "type")),
            icon: text(r, "icon"),
            budget_limit: number(r, "budgetLimit"),
            color: text(r, "color"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    /// Non-negative magnitude; `r#type` decides the sign shown to the user.
    pub amount: Option<Decimal>,
    pub r#type: TransactionType,
    pub category_id: String,
    pub account_id: String,
    /// `None` is the invalid-date sentinel. Held to millisecond precision.
    pub date: Option<DateTime<Utc>>,
    pub note: String,
}

impl Transaction {
    pub fn new(
        id: &str,
        amount: Decimal,
        r#type: TransactionType,
        category_id: &str,
        account_id: &str,
        date: DateTime<Utc>,
        note: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            amount: Some(amount),
            r#type,
            category_id: category_id.to_string(),
            account_id: account_id.to_string(),
            date: Some(date.trunc_subsecs(3)),
            note: note.unwrap_or_default().to_string(),
        }
    }

    pub fn encode(&self) -> Value {
        json!({
            "id": self.id,
            "amount": number_value(self.amount),
            "type": self.r#type.as_str(),
            "categoryId": self.category_id,
            "accountId": self.account_id,
            "date": date_value(self.date),
            "note": self.note,
        })
    }

    pub fn decode(r: &PlainRecord) -> Self {
        Self {
            id: text(r, "id"),
            amount: number(r, "amount"),
            r#type: TransactionType::parse(&text(r, "type")),
            category_id: text(r, "categoryId"),
            account_id: text(r, "accountId"),
            date: date(r, "date"),
            note: text(r, "note"),
        }
    }
}

/// The whole persisted state. Replaced wholesale on every save.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppData {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub currencies: Vec<Currency>,
}

impl AppData {
    pub fn encode(&self) -> Value {
        json!({
            "accounts": self.accounts.iter().map(Account::encode).collect::<Vec<_>>(),
            "categories": self.categories.iter().map(Category::encode).collect::<Vec<_>>(),
            "transactions": self.transactions.iter().map(Transaction::encode).collect::<Vec<_>>(),
            "currencies": self.currencies.iter().map(Currency::encode).collect::<Vec<_>>(),
        })
    }

    /// Absent (or `null`) collections decode as empty. A collection that is
    /// not a list, or holds something other than objects, fails the decode.
    pub fn decode(doc: &Value) -> Result<Self, DecodeError> {
        let root = doc.as_object().ok_or(DecodeError::NotAnObject)?;
        Ok(Self {
            accounts: collection(root, "accounts", Account::decode)?,
            categories: collection(root, "categories", Category::decode)?,
            transactions: collection(root, "transactions", Transaction::decode)?,
            currencies: collection(root, "currencies", Currency::decode)?,
        })
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

fn collection<T>(
    root: &PlainRecord,
    key: &'static str,
    decode: fn(&PlainRecord) -> T,
) -> Result<Vec<T>, DecodeError> {
    let items = match root.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(DecodeError::NotAList(key)),
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object().map(decode).ok_or(DecodeError::BadRecord {
                collection: key,
                index,
            })
        })
        .collect()
}

// Strings pass through; scalars are stringified; anything else is empty.
fn text(r: &PlainRecord, key: &str) -> String {
    match r.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn number(r: &PlainRecord, key: &str) -> Option<Decimal> {
    match r.get(key)? {
        Value::Number(n) => parse_float(&n.to_string()),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

fn date(r: &PlainRecord, key: &str) -> Option<DateTime<Utc>> {
    match r.get(key)? {
        Value::String(s) => parse_instant(s).map(|d| d.trunc_subsecs(3)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn number_value(d: Option<Decimal>) -> Value {
    let Some(d) = d else {
        return Value::Null;
    };
    if d.fract().is_zero() {
        if let Some(i) = d.to_i64() {
            return Value::Number(Number::from(i));
        }
    }
    d.to_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn date_value(d: Option<DateTime<Utc>>) -> Value {
    match d {
        Some(d) => Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => Value::Null,
    }
}
