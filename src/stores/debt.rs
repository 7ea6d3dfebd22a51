//! Defines the debt store trait.

use crate::{
    Error,
    models::{DatabaseID, Debt, DebtStatus, NewDebt},
};

/// Handles the creation and retrieval of informal debts.
pub trait DebtStore {
    /// Create a new debt and return it with its assigned ID.
    ///
    /// The store stamps the creation time and the debt starts out
    /// [pending](DebtStatus::Pending).
    fn create(&self, new: NewDebt) -> Result<Debt, Error>;

    /// Get every debt, newest first by creation date.
    fn get_all(&self) -> Result<Vec<Debt>, Error>;

    /// Replace the mutable fields of the debt with `id`, leaving its creation
    /// date and status as they are.
    ///
    /// Silently does nothing if no debt has that ID.
    fn update(&self, id: DatabaseID, fields: NewDebt) -> Result<(), Error>;

    /// Delete the debt with `id`.
    ///
    /// Silently does nothing if no debt has that ID.
    fn delete(&self, id: DatabaseID) -> Result<(), Error>;

    /// Set only the status of the debt with `id`.
    ///
    /// Silently does nothing if no debt has that ID.
    fn set_status(&self, id: DatabaseID, status: DebtStatus) -> Result<(), Error>;
}
