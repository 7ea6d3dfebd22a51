//! Defines the `Debt` type for tracking informal debts between the user and
//! other people.

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// Which way the money flows for a debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtDirection {
    /// Someone owes the user money.
    OwedToMe,
    /// The user owes someone money.
    IOwe,
}

impl DebtDirection {
    /// The wire string stored by both backends.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OwedToMe => "owed_to_me",
            Self::IOwe => "i_owe",
        }
    }
}

impl ToSql for DebtDirection {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for DebtDirection {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "owed_to_me" => Ok(Self::OwedToMe),
            "i_owe" => Ok(Self::IOwe),
            other => Err(FromSqlError::Other(
                format!("unknown debt direction {other:?}").into(),
            )),
        }
    }
}

/// Whether a debt is still outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    /// The debt has not been paid back yet. Every debt starts here.
    #[default]
    Pending,
    /// The debt has been paid back.
    Settled,
}

impl DebtStatus {
    /// The wire string stored by both backends.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Settled => "settled",
        }
    }
}

impl ToSql for DebtStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for DebtStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "pending" => Ok(Self::Pending),
            "settled" => Ok(Self::Settled),
            other => Err(FromSqlError::Other(
                format!("unknown debt status {other:?}").into(),
            )),
        }
    }
}

/// An informal debt between the user and another person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// The ID assigned by the backing store.
    pub id: DatabaseID,
    /// Who the debt is with.
    pub person: String,
    /// The amount of money, always non-negative.
    pub amount: f64,
    /// Which way the money flows.
    #[serde(rename = "type")]
    pub direction: DebtDirection,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
    /// When the debt was recorded, as an ISO-8601 date-time string.
    ///
    /// Stamped by the store at creation; never changed by updates.
    pub date: String,
    /// Whether the debt is still outstanding.
    #[serde(default)]
    pub status: DebtStatus,
}

/// The fields needed to create a debt, or to replace one on update.
///
/// The creation timestamp and status are owned by the store: new debts are
/// stamped with the current time and always start out pending, and an update
/// leaves both untouched. The status is changed through
/// [DebtStore::set_status](crate::stores::DebtStore::set_status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDebt {
    /// Who the debt is with.
    pub person: String,
    /// The amount of money, non-negative.
    pub amount: f64,
    /// Which way the money flows.
    #[serde(rename = "type")]
    pub direction: DebtDirection,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

impl Debt {
    /// Replace the mutable fields with the contents of `fields`.
    ///
    /// The ID, creation timestamp and status are left as they are.
    pub fn apply(&mut self, fields: NewDebt) {
        self.person = fields.person;
        self.amount = fields.amount;
        self.direction = fields.direction;
        self.note = fields.note;
    }
}

#[cfg(test)]
mod debt_wire_tests {
    use super::{DebtDirection, DebtStatus};

    #[test]
    fn direction_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&DebtDirection::OwedToMe).unwrap(),
            "\"owed_to_me\""
        );
        assert_eq!(
            serde_json::to_string(&DebtDirection::IOwe).unwrap(),
            "\"i_owe\""
        );
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(DebtStatus::default(), DebtStatus::Pending);
    }
}
