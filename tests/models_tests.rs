// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use serde_json::json;
use smartbudget::models::{
    Account, AccountType, AppData, Category, Currency, Transaction, TransactionType,
};
use smartbudget::seed::seed;

fn sample() -> AppData {
    let mut data = seed();
    data.transactions = vec![
        Transaction::new(
            "t1",
            dec!(12.34),
            TransactionType::Expense,
            "c1",
            "a1",
            Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 5).unwrap(),
            Some("groceries"),
        ),
        Transaction::new(
            "t2",
            dec!(2500),
            TransactionType::Income,
            "c4",
            "a2",
            Utc.with_ymd_and_hms(2024, 2, 28, 9, 0, 0).unwrap(),
            None,
        ),
    ];
    data
}

#[test]
fn document_round_trips() {
    let data = sample();
    let back = AppData::decode(&data.encode()).unwrap();
    assert_eq!(back, data);
}

#[test]
fn round_trip_through_string() {
    let data = sample();
    let raw = serde_json::to_string(&data.encode()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(AppData::decode(&doc).unwrap(), data);
}

#[test]
fn encode_uses_camel_case_wire_names() {
    let data = sample();
    let v = data.encode();
    assert_eq!(
        v["accounts"][0],
        json!({
            "id": "a1",
            "name": "Efectivo",
            "type": "cash",
            "currency": "USD",
            "initialBalance": 100,
            "currentBalance": 100,
            "color": "#22C55E"
        })
    );
    assert_eq!(v["categories"][0]["budgetLimit"], json!(300));
    assert_eq!(v["transactions"][0]["categoryId"], json!("c1"));
    assert_eq!(v["transactions"][0]["accountId"], json!("a1"));
    assert_eq!(v["transactions"][0]["amount"], json!(12.34));
    assert_eq!(
        v["transactions"][0]["date"],
        json!("2024-03-01T18:30:05.000Z")
    );
    assert_eq!(v["transactions"][1]["note"], json!(""));
}

#[test]
fn collection_order_is_preserved() {
    let data = sample();
    let back = AppData::decode(&data.encode()).unwrap();
    let ids: Vec<_> = back.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2"]);
    let codes: Vec<_> = back.currencies.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["USD", "EUR", "MXN"]);
}

#[test]
fn missing_collections_decode_as_empty() {
    let data = AppData::decode(&json!({ "accounts": null })).unwrap();
    assert_eq!(data, AppData::default());
}

#[test]
fn non_object_root_is_rejected() {
    assert!(AppData::decode(&json!(null)).is_err());
    assert!(AppData::decode(&json!([1, 2])).is_err());
    assert!(AppData::decode(&json!({ "accounts": "nope" })).is_err());
    assert!(AppData::decode(&json!({ "accounts": [null] })).is_err());
}

#[test]
fn numbers_are_coerced_like_parse_float() {
    let doc = json!({
        "accounts": [
            { "id": "a1", "name": "A", "type": "bank", "currency": "USD",
              "initialBalance": "250.75", "currentBalance": " 99.5 dollars", "color": "#000" },
            { "id": "a2", "name": "B", "type": "bank", "currency": "USD",
              "initialBalance": "abc", "color": "#000" }
        ],
        "categories": [
            { "id": "c1", "name": "X", "type": "expense", "icon": "x",
              "budgetLimit": "1e3", "color": "#000" }
        ]
    });
    let data = AppData::decode(&doc).unwrap();
    assert_eq!(data.accounts[0].initial_balance, Some(dec!(250.75)));
    assert_eq!(data.accounts[0].current_balance, Some(dec!(99.5)));
    assert_eq!(data.accounts[1].initial_balance, None);
    assert_eq!(data.accounts[1].current_balance, None);
    assert_eq!(data.categories[0].budget_limit, Some(dec!(1000)));
}

#[test]
fn sentinel_numbers_encode_as_null_and_survive() {
    let doc = json!({
        "transactions": [
            { "id": "t1", "amount": "oops", "type": "expense", "categoryId": "c1",
              "accountId": "a1", "date": "2024-01-01T00:00:00.000Z" }
        ]
    });
    let data = AppData::decode(&doc).unwrap();
    assert_eq!(data.transactions[0].amount, None);
    let encoded = data.encode();
    assert_eq!(encoded["transactions"][0]["amount"], json!(null));
    assert_eq!(AppData::decode(&encoded).unwrap(), data);
}

#[test]
fn note_defaults_to_empty_and_strings_pass_through() {
    let doc = json!({
        "transactions": [
            { "id": "t1", "amount": 5, "type": "expense", "categoryId": "c1",
              "accountId": "a1", "date": "2024-01-01" }
        ],
        "currencies": [ { "id": 7, "code": "JPY", "symbol": "¥" } ]
    });
    let data = AppData::decode(&doc).unwrap();
    assert_eq!(data.transactions[0].note, "");
    assert_eq!(
        data.currencies[0],
        Currency {
            id: "7".into(),
            code: "JPY".into(),
            symbol: "¥".into(),
            name: String::new(),
        }
    );
}

#[test]
fn dates_accept_iso_variants_and_flag_invalid() {
    let doc = json!({
        "transactions": [
            { "id": "t1", "amount": 1, "type": "expense", "date": "2024-01-01" },
            { "id": "t2", "amount": 1, "type": "expense", "date": "2024-01-01T10:00:00+02:00" },
            { "id": "t3", "amount": 1, "type": "expense", "date": "yesterday" },
            { "id": "t4", "amount": 1, "type": "expense" },
            { "id": "t5", "amount": 1, "type": "expense", "date": 1704067200000i64 }
        ]
    });
    let data = AppData::decode(&doc).unwrap();
    let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(data.transactions[0].date, Some(midnight));
    assert_eq!(
        data.transactions[1].date,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap())
    );
    assert_eq!(data.transactions[2].date, None);
    assert_eq!(data.transactions[3].date, None);
    assert_eq!(data.transactions[4].date, Some(midnight));
}

#[test]
fn unknown_enum_values_are_kept() {
    let doc = json!({
        "accounts": [ { "id": "a1", "type": "savings", "initialBalance": 0, "currentBalance": 0 } ],
        "categories": [ { "id": "c1", "type": "gift", "budgetLimit": 0 } ]
    });
    let data = AppData::decode(&doc).unwrap();
    assert_eq!(data.accounts[0].r#type, AccountType::Other("savings".into()));
    assert_eq!(data.categories[0].r#type, TransactionType::Other("gift".into()));
    assert_eq!(data.encode()["accounts"][0]["type"], json!("savings"));
}

#[test]
fn entity_codecs_round_trip_individually() {
    let account = Account::new(
        "a9",
        "Wallet",
        AccountType::Crypto,
        "EUR",
        dec!(0.1),
        dec!(-20.5),
        "#111111",
    );
    let v = account.encode();
    assert_eq!(Account::decode(v.as_object().unwrap()), account);

    let category = Category::new("c9", "Gifts", TransactionType::Transfer, "🎁", dec!(42.42), "#222");
    let v = category.encode();
    assert_eq!(Category::decode(v.as_object().unwrap()), category);
}

#[test]
fn freshly_stamped_transaction_round_trips() {
    let mut data = seed();
    data.transactions.push(Transaction::new(
        "t1",
        dec!(3.5),
        TransactionType::Expense,
        "c1",
        "a1",
        Utc::now(),
        None,
    ));
    let back = AppData::decode(&data.encode()).unwrap();
    assert_eq!(back, data);

    let raw = json!({
        "transactions": [
            { "id": "t1", "amount": 1, "type": "expense", "categoryId": "c1",
              "accountId": "a1", "date": "2024-05-01T10:00:00.123456Z" }
        ]
    });
    let decoded = AppData::decode(&raw).unwrap();
    assert_eq!(AppData::decode(&decoded.encode()).unwrap(), decoded);
}
