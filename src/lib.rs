//! Moneybook is the local persistence layer for a personal-finance app.
//!
//! The app's screens record income and expense transactions, organise them
//! into categories, track informal debts, and manage accounts. All of that
//! data flows through the [Gateway] in this crate, which owns the backing
//! store for the life of the process.
//!
//! Two backends implement the same storage contract: an embedded SQLite
//! database for hosts that bundle one, and a flat key-value store of JSON
//! collections for hosts that do not. The backend is chosen once, when the
//! gateway is opened, via [StorageConfig].

#![warn(missing_docs)]

mod gateway;
pub mod models;
pub mod stores;

pub use gateway::{Gateway, StorageConfig};

/// The errors that may occur in the persistence layer.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backing store could not be opened or created.
    ///
    /// This is fatal to app startup; there is no automatic retry.
    #[error("could not open the backing store: {0}")]
    Initialization(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A stored collection could not be encoded or decoded as JSON.
    ///
    /// On the read path this means the blob behind a collection key is
    /// corrupt. The store is left exactly as it was.
    #[error("JSON encoding or decoding failed: {0}")]
    Json(String),

    /// Reading or writing the backing store failed.
    #[error("storage I/O failed: {0}")]
    Io(String),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {error}");
        Error::SqlError(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error.to_string())
    }
}
