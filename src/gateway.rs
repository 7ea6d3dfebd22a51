//! The single entry point the app's screens use to reach local storage.

use std::path::PathBuf;

use crate::{
    Error,
    models::{
        Account, Category, DatabaseID, Debt, DebtStatus, NewAccount, NewCategory, NewDebt,
        NewTransaction, Transaction, TransactionEntry,
    },
    stores::{
        AccountStore, Backend, CategoryStore, DebtStore, TransactionStore,
        flat::{FileKv, FlatBackend},
        sqlite::SQLiteBackend,
    },
};

/// Selects which storage backend a [Gateway] opens.
///
/// The choice comes from the host platform's capabilities, decided once at
/// startup: hosts that bundle SQLite use [StorageConfig::Sqlite], hosts
/// without one (the web build) fall back to [StorageConfig::Flat].
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// The embedded relational store.
    Sqlite {
        /// File path to the SQLite database. Created if missing.
        path: PathBuf,
    },
    /// The key-value fallback, one JSON collection file per entity kind.
    Flat {
        /// Directory holding the collection files. Created if missing.
        dir: PathBuf,
    },
}

/// Mediates between the app's screens and the selected storage backend.
///
/// Open exactly one gateway per process and share it. The gateway owns the
/// backend resource (database connection or store directory) exclusively for
/// the rest of the process lifetime; nothing else may open a second handle to
/// the same storage.
///
/// Every operation talks to exactly one entity collection and performs no
/// side effects beyond it: no retries, no caching, no cross-call
/// transactions. Failures surface to the caller as [Error] and leave the
/// store as it was.
pub struct Gateway {
    backend: Box<dyn Backend>,
}

impl Gateway {
    /// Open the backend selected by `config`.
    ///
    /// On the first ever run, the flat backend seeds a small demo dataset so
    /// the app never starts empty; the SQLite backend starts with empty
    /// tables instead. Opening is idempotent, so a second open of the same
    /// storage will not fail, but see the exclusivity note on [Gateway].
    ///
    /// # Errors
    /// Returns [Error::Initialization] if the backend resource cannot be
    /// opened. Callers should treat this as fatal to app startup.
    pub fn open(config: StorageConfig) -> Result<Self, Error> {
        let backend: Box<dyn Backend> = match config {
            StorageConfig::Sqlite { path } => Box::new(SQLiteBackend::open(&path)?),
            StorageConfig::Flat { dir } => Box::new(FlatBackend::open(FileKv::open(dir)?)?),
        };

        Ok(Self { backend })
    }

    /// Wrap an already-opened backend.
    ///
    /// This is how tests and embedders hand the gateway an in-memory store.
    pub fn with_backend(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Every category, in the order the backend stores them.
    pub fn categories(&self) -> Result<Vec<Category>, Error> {
        CategoryStore::get_all(self.backend.as_ref())
    }

    /// Create a category and return it with its assigned ID.
    pub fn add_category(&self, new: NewCategory) -> Result<Category, Error> {
        CategoryStore::create(self.backend.as_ref(), new)
    }

    /// Replace the fields of the category with `id`. A no-op for unknown IDs.
    pub fn update_category(&self, id: DatabaseID, fields: NewCategory) -> Result<(), Error> {
        CategoryStore::update(self.backend.as_ref(), id, fields)
    }

    /// Delete the category with `id` and every transaction referencing it.
    /// A no-op for unknown IDs.
    pub fn delete_category(&self, id: DatabaseID) -> Result<(), Error> {
        CategoryStore::delete(self.backend.as_ref(), id)
    }

    /// Every transaction, newest first, joined with its category's current
    /// name and color.
    pub fn transactions(&self) -> Result<Vec<TransactionEntry>, Error> {
        TransactionStore::get_all(self.backend.as_ref())
    }

    /// Create a transaction and return it with its assigned ID.
    pub fn add_transaction(&self, new: NewTransaction) -> Result<Transaction, Error> {
        TransactionStore::create(self.backend.as_ref(), new)
    }

    /// Replace the fields of the transaction with `id`. A no-op for unknown
    /// IDs.
    pub fn update_transaction(&self, id: DatabaseID, fields: NewTransaction) -> Result<(), Error> {
        TransactionStore::update(self.backend.as_ref(), id, fields)
    }

    /// Delete the transaction with `id`. A no-op for unknown IDs.
    pub fn delete_transaction(&self, id: DatabaseID) -> Result<(), Error> {
        TransactionStore::delete(self.backend.as_ref(), id)
    }

    /// Every debt, newest first by creation date.
    pub fn debts(&self) -> Result<Vec<Debt>, Error> {
        DebtStore::get_all(self.backend.as_ref())
    }

    /// Create a debt and return it with its assigned ID. New debts are
    /// stamped with the current time and start out pending.
    pub fn add_debt(&self, new: NewDebt) -> Result<Debt, Error> {
        DebtStore::create(self.backend.as_ref(), new)
    }

    /// Replace the mutable fields of the debt with `id`, keeping its creation
    /// date and status. A no-op for unknown IDs.
    pub fn update_debt(&self, id: DatabaseID, fields: NewDebt) -> Result<(), Error> {
        DebtStore::update(self.backend.as_ref(), id, fields)
    }

    /// Delete the debt with `id`. A no-op for unknown IDs.
    pub fn delete_debt(&self, id: DatabaseID) -> Result<(), Error> {
        DebtStore::delete(self.backend.as_ref(), id)
    }

    /// Set only the status of the debt with `id`. A no-op for unknown IDs.
    pub fn set_debt_status(&self, id: DatabaseID, status: DebtStatus) -> Result<(), Error> {
        DebtStore::set_status(self.backend.as_ref(), id, status)
    }

    /// Every account, in the order the backend stores them.
    pub fn accounts(&self) -> Result<Vec<Account>, Error> {
        AccountStore::get_all(self.backend.as_ref())
    }

    /// Create an account and return it with its assigned ID.
    pub fn add_account(&self, new: NewAccount) -> Result<Account, Error> {
        AccountStore::create(self.backend.as_ref(), new)
    }

    /// Replace the fields of the account with `id`. A no-op for unknown IDs.
    pub fn update_account(&self, id: DatabaseID, fields: NewAccount) -> Result<(), Error> {
        AccountStore::update(self.backend.as_ref(), id, fields)
    }

    /// Delete the account with `id`. A no-op for unknown IDs.
    pub fn delete_account(&self, id: DatabaseID) -> Result<(), Error> {
        AccountStore::delete(self.backend.as_ref(), id)
    }

    /// Delete every record of every entity kind.
    ///
    /// The flat backend re-seeds its demo dataset afterwards; the SQLite
    /// backend leaves every table empty. See
    /// [Backend::wipe_all](crate::stores::Backend::wipe_all).
    pub fn wipe_all(&self) -> Result<(), Error> {
        self.backend.wipe_all()
    }
}
