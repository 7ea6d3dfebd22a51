//! This module defines the domain data types owned by the persistence layer.

pub use account::{Account, NewAccount};
pub use category::{Category, NewCategory};
pub use debt::{Debt, DebtDirection, DebtStatus, NewDebt};
pub use transaction::{NewTransaction, Transaction, TransactionEntry, TransactionKind};

mod account;
mod category;
mod debt;
mod transaction;

/// Alias for the integer type used for mapping to database IDs.
///
/// IDs are assigned by the backing store and are opaque to callers: the
/// SQLite backend hands out small sequential integers while the flat store
/// derives IDs from a high-resolution timestamp. Neither kind is portable
/// to the other backend.
pub type DatabaseID = i64;
