//! Implements the storage backend that emulates the entity stores on top of a
//! string-keyed blob store.
//!
//! Used on hosts without an embedded SQLite. Each entity kind lives under one
//! key as a JSON-encoded array of records; every write decodes the whole
//! collection, mutates it in memory, and writes the whole collection back.
//! The store mutex makes that read-modify-write cycle safe against
//! concurrent callers.
//!
//! On first run (no categories key at all) the backend seeds a small demo
//! dataset so the app never starts empty, and [wipe_all](crate::stores::Backend::wipe_all)
//! re-seeds it. The SQLite backend does neither; the asymmetry is deliberate.

mod account;
mod category;
mod debt;
mod kv;
mod seed;
mod transaction;

pub use kv::{FileKv, KeyValue, MemoryKv};

use std::sync::Mutex;

use serde::{Serialize, de::DeserializeOwned};
use time::OffsetDateTime;

use crate::{Error, models::DatabaseID, stores::Backend};

pub(crate) const CATEGORIES_KEY: &str = "categories";
pub(crate) const TRANSACTIONS_KEY: &str = "transactions";
pub(crate) const DEBTS_KEY: &str = "debts";
pub(crate) const ACCOUNTS_KEY: &str = "accounts";

/// Stores the domain models as JSON collections in a [KeyValue] store.
pub struct FlatBackend {
    store: Mutex<Box<dyn KeyValue>>,
}

impl FlatBackend {
    /// Wrap `store`, seeding the demo dataset if the store has never held any
    /// data.
    ///
    /// The seed check looks only at the categories key: if it is absent the
    /// store is treated as brand new. A store that holds an empty categories
    /// array is not re-seeded.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or the seed cannot be
    /// written.
    pub fn open(store: impl KeyValue + 'static) -> Result<Self, Error> {
        let backend = Self {
            store: Mutex::new(Box::new(store)),
        };

        {
            let mut store = backend.store.lock().unwrap();
            if store.get(CATEGORIES_KEY)?.is_none() {
                tracing::info!("first run detected, seeding the flat store with demo data");
                seed::write_demo_data(store.as_mut())?;
            }
        }

        Ok(backend)
    }
}

impl Backend for FlatBackend {
    fn wipe_all(&self) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();

        store.clear()?;
        seed::write_demo_data(store.as_mut())?;

        tracing::info!("wiped the flat store and re-seeded demo data");

        Ok(())
    }
}

/// Decode the JSON array stored under `key`. A key that has never been set
/// decodes as the empty collection.
fn read_collection<T: DeserializeOwned>(store: &dyn KeyValue, key: &str) -> Result<Vec<T>, Error> {
    match store.get(key)? {
        Some(data) => serde_json::from_str(&data).map_err(|error| error.into()),
        None => Ok(Vec::new()),
    }
}

/// Re-encode `records` and overwrite the value under `key`.
fn write_collection<T: Serialize>(
    store: &mut dyn KeyValue,
    key: &str,
    records: &[T],
) -> Result<(), Error> {
    let data = serde_json::to_string(records)?;
    store.set(key, &data)
}

/// Assign an ID for a newly created record.
///
/// Wall-clock nanoseconds since the Unix epoch. Two creations in the same
/// nanosecond would collide; that risk is accepted for a single-user store.
fn next_id() -> DatabaseID {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as DatabaseID
}

#[cfg(test)]
mod flat_backend_tests {
    use crate::{
        Error,
        stores::{Backend, CategoryStore, DebtStore, TransactionStore},
    };

    use super::{CATEGORIES_KEY, FlatBackend, KeyValue, MemoryKv};

    #[test]
    fn first_run_seeds_demo_data() {
        let backend = FlatBackend::open(MemoryKv::new()).unwrap();

        let categories = CategoryStore::get_all(&backend).unwrap();
        let transactions = TransactionStore::get_all(&backend).unwrap();
        let debts = DebtStore::get_all(&backend).unwrap();

        assert_eq!(categories.len(), 4);
        assert_eq!(transactions.len(), 3);
        assert_eq!(debts.len(), 2);
    }

    #[test]
    fn seeded_transactions_reference_seeded_categories() {
        let backend = FlatBackend::open(MemoryKv::new()).unwrap();

        for entry in TransactionStore::get_all(&backend).unwrap() {
            assert!(
                entry.category_name.is_some(),
                "seed transaction {} should join a seed category",
                entry.transaction.id
            );
        }
    }

    #[test]
    fn a_store_with_an_empty_categories_array_is_not_re_seeded() {
        let mut kv = MemoryKv::new();
        kv.set(CATEGORIES_KEY, "[]").unwrap();

        let backend = FlatBackend::open(kv).unwrap();

        assert_eq!(CategoryStore::get_all(&backend).unwrap(), []);
    }

    #[test]
    fn wipe_all_re_seeds_the_demo_data() {
        let mut kv = MemoryKv::new();
        kv.set(CATEGORIES_KEY, "[]").unwrap();
        let backend = FlatBackend::open(kv).unwrap();
        assert_eq!(CategoryStore::get_all(&backend).unwrap(), []);

        backend.wipe_all().unwrap();

        // Unlike the SQLite backend, wiping never leaves this store empty.
        assert_eq!(CategoryStore::get_all(&backend).unwrap().len(), 4);
        assert_eq!(TransactionStore::get_all(&backend).unwrap().len(), 3);
        assert_eq!(DebtStore::get_all(&backend).unwrap().len(), 2);
    }

    #[test]
    fn corrupt_collection_json_surfaces_as_an_error() {
        let mut kv = MemoryKv::new();
        kv.set(CATEGORIES_KEY, "{not json").unwrap();

        let backend = FlatBackend::open(kv).unwrap();
        let result = CategoryStore::get_all(&backend);

        assert!(matches!(result, Err(Error::Json(_))));
    }
}
