//! Defines the transaction store trait.

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Transaction, TransactionEntry},
};

/// Handles the creation and retrieval of transactions.
pub trait TransactionStore {
    /// Create a new transaction and return it with its assigned ID.
    fn create(&self, new: NewTransaction) -> Result<Transaction, Error>;

    /// Get every transaction, newest first by occurrence date, each joined
    /// with the current name and color of its category.
    fn get_all(&self) -> Result<Vec<TransactionEntry>, Error>;

    /// Replace the fields of the transaction with `id`.
    ///
    /// Silently does nothing if no transaction has that ID.
    fn update(&self, id: DatabaseID, fields: NewTransaction) -> Result<(), Error>;

    /// Delete the transaction with `id`.
    ///
    /// Silently does nothing if no transaction has that ID.
    fn delete(&self, id: DatabaseID) -> Result<(), Error>;
}
