//! Defines the `Transaction` type, its kind enum, and the listing row that
//! carries fields joined from the transaction's category.

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// Whether a transaction adds to or subtracts from the user's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in, e.g. wages.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionKind {
    /// The wire string stored by both backends.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(FromSqlError::Other(
                format!("unknown transaction type {other:?}").into(),
            )),
        }
    }
}

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the backing store.
    pub id: DatabaseID,
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The amount of money, always non-negative. The sign is implied by `kind`.
    pub amount: f64,
    /// The category this transaction belongs to, if any.
    #[serde(default)]
    pub category_id: Option<DatabaseID>,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
    /// When the transaction occurred, as an ISO-8601 date-time string.
    pub date: String,
}

/// The fields needed to create a transaction, or to replace one on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The amount of money, non-negative.
    pub amount: f64,
    /// The category this transaction belongs to, if any.
    #[serde(default)]
    pub category_id: Option<DatabaseID>,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
    /// When the transaction occurred, as an ISO-8601 date-time string.
    pub date: String,
}

impl Transaction {
    /// Replace every field except the ID with the contents of `fields`.
    pub fn apply(&mut self, fields: NewTransaction) {
        self.kind = fields.kind;
        self.amount = fields.amount;
        self.category_id = fields.category_id;
        self.note = fields.note;
        self.date = fields.date;
    }
}

/// A transaction as returned by listings.
///
/// The category name and color are joined against the current category set at
/// query time. Both are `None` when the transaction has no category or the
/// referenced category no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// The stored transaction.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Display name of the referenced category at query time.
    pub category_name: Option<String>,
    /// Display color of the referenced category at query time.
    pub category_color: Option<String>,
}
