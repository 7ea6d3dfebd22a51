//! Defines the account store trait.

use crate::{
    Error,
    models::{Account, DatabaseID, NewAccount},
};

/// Handles the creation and retrieval of the user's accounts.
pub trait AccountStore {
    /// Create a new account and return it with its assigned ID.
    fn create(&self, new: NewAccount) -> Result<Account, Error>;

    /// Get every account, in the order the backend stores them.
    fn get_all(&self) -> Result<Vec<Account>, Error>;

    /// Replace the fields of the account with `id`.
    ///
    /// Silently does nothing if no account has that ID.
    fn update(&self, id: DatabaseID, fields: NewAccount) -> Result<(), Error>;

    /// Delete the account with `id`.
    ///
    /// Silently does nothing if no account has that ID.
    fn delete(&self, id: DatabaseID) -> Result<(), Error>;
}
