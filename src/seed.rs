// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{Account, AccountType, AppData, Category, Currency, TransactionType};

/// Starter document used on first run and whenever the stored one is
/// missing or unreadable. Always the same content.
pub fn seed() -> AppData {
    let currencies = vec![
        Currency::new("cur1", "USD", "$", "Dólar Estadounidense"),
        Currency::new("cur2", "EUR", "€", "Euro"),
        Currency::new("cur3", "MXN", "$", "Peso Mexicano"),
    ];

    let categories = vec![
        Category::new("c1", "Comida", TransactionType::Expense, "🍔", Decimal::from(300), "#F59E0B"),
        Category::new("c2", "Transporte", TransactionType::Expense, "🚌", Decimal::from(100), "#3B82F6"),
        Category::new("c3", "Hogar", TransactionType::Expense, "🏠", Decimal::from(500), "#8B5CF6"),
        Category::new("c4", "Salario", TransactionType::Income, "💰", Decimal::ZERO, "#10B981"),
        Category::new("c5", "Freelance", TransactionType::Income, "💻", Decimal::ZERO, "#06B6D4"),
    ];

    let accounts = vec![
        Account::new(
            "a1",
            "Efectivo",
            AccountType::Cash,
            "USD",
            Decimal::from(100),
            Decimal::from(100),
            "#22C55E",
        ),
        Account::new(
            "a2",
            "Banco Principal",
            AccountType::Bank,
            "USD",
            Decimal::from(1500),
            Decimal::from(1500),
            "#3B82F6",
        ),
    ];

    AppData {
        accounts,
        categories,
        transactions: Vec::new(),
        currencies,
    }
}
