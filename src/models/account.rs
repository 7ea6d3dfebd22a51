//! Defines the `Account` type for the accounts management screen.

use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// A place the user keeps money, e.g. a bank account, a card, or cash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The ID assigned by the backing store.
    pub id: DatabaseID,
    /// The name of the account.
    pub name: String,
    /// Free-form type tag, e.g. "bank", "card", "cash".
    #[serde(rename = "type")]
    pub kind: String,
    /// The current balance.
    pub balance: f64,
    /// ISO 4217 currency code, e.g. "USD".
    pub currency: String,
    /// Key into the app's icon lookup table.
    pub icon: String,
    /// Whether the balance counts towards the user's displayed total.
    #[serde(default = "default_include_in_total")]
    pub include_in_total: bool,
}

/// The fields needed to create an account, or to replace one on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    /// The name of the account.
    pub name: String,
    /// Free-form type tag, e.g. "bank", "card", "cash".
    #[serde(rename = "type")]
    pub kind: String,
    /// The current balance.
    pub balance: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Key into the app's icon lookup table.
    pub icon: String,
    /// Whether the balance counts towards the user's displayed total.
    #[serde(default = "default_include_in_total")]
    pub include_in_total: bool,
}

fn default_include_in_total() -> bool {
    true
}

impl Account {
    /// Replace every field except the ID with the contents of `fields`.
    pub fn apply(&mut self, fields: NewAccount) {
        self.name = fields.name;
        self.kind = fields.kind;
        self.balance = fields.balance;
        self.currency = fields.currency;
        self.icon = fields.icon;
        self.include_in_total = fields.include_in_total;
    }
}
