//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, DatabaseID, NewCategory},
};

/// Creates and retrieves the user's spending categories.
pub trait CategoryStore {
    /// Create a new category and return it with its assigned ID.
    fn create(&self, new: NewCategory) -> Result<Category, Error>;

    /// Get every category, in the order the backend stores them.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Replace the fields of the category with `id`.
    ///
    /// Silently does nothing if no category has that ID.
    fn update(&self, id: DatabaseID, fields: NewCategory) -> Result<(), Error>;

    /// Delete the category with `id`, along with every transaction that
    /// references it.
    ///
    /// Silently does nothing if no category has that ID.
    fn delete(&self, id: DatabaseID) -> Result<(), Error>;
}
