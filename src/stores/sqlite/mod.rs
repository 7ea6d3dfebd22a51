//! Implements the storage backend backed by an embedded SQLite database.
//!
//! Used on hosts that bundle SQLite. The schema is created on open and all
//! statements are parameterized. Unlike the flat backend, this backend never
//! seeds demo data: a fresh database starts with empty tables.

mod account;
mod category;
mod debt;
mod transaction;

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, stores::Backend};

/// Stores the domain models in a SQLite database behind a shared connection.
#[derive(Debug, Clone)]
pub struct SQLiteBackend {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBackend {
    /// Open the database at `path`, creating the file and the schema if they
    /// do not exist yet.
    ///
    /// Opening the same database twice is safe; schema creation is
    /// idempotent.
    ///
    /// # Errors
    /// Returns [Error::Initialization] if the database cannot be opened or
    /// the schema cannot be created. Callers should treat this as fatal to
    /// app startup.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let connection = Connection::open(path)
            .map_err(|error| Error::Initialization(error.to_string()))?;

        tracing::debug!("opened SQLite database at {}", path.display());

        Self::with_connection(connection)
    }

    /// Wrap an existing connection and create the schema if it is missing.
    ///
    /// This is how tests get an in-memory database.
    ///
    /// # Errors
    /// Returns [Error::Initialization] if the schema cannot be created.
    pub fn with_connection(connection: Connection) -> Result<Self, Error> {
        initialize(&connection).map_err(|error| Error::Initialization(error.to_string()))?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}

impl Backend for SQLiteBackend {
    fn wipe_all(&self) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();
        let tx = connection.unchecked_transaction()?;

        tx.execute("DELETE FROM transactions", ())?;
        tx.execute("DELETE FROM debts", ())?;
        tx.execute("DELETE FROM categories", ())?;
        tx.execute("DELETE FROM accounts", ())?;

        tx.commit()?;

        tracing::info!("wiped all records from the SQLite store");

        Ok(())
    }
}

/// Create the tables for the domain models if they do not exist.
fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let tx = SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    category::create_table(&tx)?;
    transaction::create_table(&tx)?;
    debt::create_table(&tx)?;
    account::create_table(&tx)?;

    tx.commit()?;

    Ok(())
}
