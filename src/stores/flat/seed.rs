//! The demo dataset seeded into the flat store.
//!
//! Web builds have no migration path and no sample data shipped in the
//! bundle, so the store itself guarantees the app never opens onto an empty
//! screen: four categories, three transactions, and two debts with fixed
//! IDs. Accounts are not seeded.

use crate::{
    Error,
    models::{Category, Debt, DebtDirection, DebtStatus, Transaction, TransactionKind},
    stores::timestamp_now,
};

use super::{CATEGORIES_KEY, DEBTS_KEY, KeyValue, TRANSACTIONS_KEY, write_collection};

pub(super) fn write_demo_data(store: &mut dyn KeyValue) -> Result<(), Error> {
    let now = timestamp_now();

    let categories = vec![
        Category {
            id: 1,
            name: "Food & Drink".to_string(),
            icon: "utensils".to_string(),
            color: "#F59E0B".to_string(),
            budget: 500.0,
        },
        Category {
            id: 2,
            name: "Transport".to_string(),
            icon: "bus".to_string(),
            color: "#3B82F6".to_string(),
            budget: 150.0,
        },
        Category {
            id: 3,
            name: "Shopping".to_string(),
            icon: "shopping-bag".to_string(),
            color: "#EC4899".to_string(),
            budget: 300.0,
        },
        Category {
            id: 4,
            name: "Salary".to_string(),
            icon: "wallet".to_string(),
            color: "#10B981".to_string(),
            budget: 0.0,
        },
    ];

    let transactions = vec![
        Transaction {
            id: 101,
            kind: TransactionKind::Income,
            amount: 2500.0,
            category_id: Some(4),
            note: "Monthly salary".to_string(),
            date: now.clone(),
        },
        Transaction {
            id: 102,
            kind: TransactionKind::Expense,
            amount: 18.40,
            category_id: Some(1),
            note: "Lunch".to_string(),
            date: now.clone(),
        },
        Transaction {
            id: 103,
            kind: TransactionKind::Expense,
            amount: 2.80,
            category_id: Some(2),
            note: "Bus ticket".to_string(),
            date: now.clone(),
        },
    ];

    let debts = vec![
        Debt {
            id: 1,
            person: "Alex".to_string(),
            amount: 50.0,
            direction: DebtDirection::OwedToMe,
            note: "Concert ticket".to_string(),
            date: now.clone(),
            status: DebtStatus::Pending,
        },
        Debt {
            id: 2,
            person: "Sam".to_string(),
            amount: 120.0,
            direction: DebtDirection::IOwe,
            note: "Borrowed for groceries".to_string(),
            date: now,
            status: DebtStatus::Pending,
        },
    ];

    write_collection(store, CATEGORIES_KEY, &categories)?;
    write_collection(store, TRANSACTIONS_KEY, &transactions)?;
    write_collection(store, DEBTS_KEY, &debts)?;

    Ok(())
}
