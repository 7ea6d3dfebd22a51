//! Contains traits and implementations for objects that store the domain
//! [models](crate::models).
//!
//! Each entity kind gets its own store trait; [Backend] bundles them into the
//! single contract the [Gateway](crate::Gateway) dispatches through. Two
//! implementations exist: [sqlite::SQLiteBackend] and [flat::FlatBackend].

pub mod flat;
pub mod sqlite;

mod account;
mod category;
mod debt;
mod transaction;

pub use account::AccountStore;
pub use category::CategoryStore;
pub use debt::DebtStore;
pub use transaction::TransactionStore;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::Error;

/// One storage backend implementing the full entity contract.
///
/// The gateway selects exactly one implementation when it is opened and holds
/// it for the life of the process; no code branches on the platform after
/// that point.
pub trait Backend: CategoryStore + TransactionStore + DebtStore + AccountStore + Send + Sync {
    /// Delete every record of every entity kind.
    ///
    /// The flat backend re-seeds its demo dataset afterwards so the app never
    /// shows an empty store; the SQLite backend leaves the tables empty.
    fn wipe_all(&self) -> Result<(), Error>;
}

/// The current UTC time as an RFC 3339 string, as stamped onto new debts and
/// the flat store's seed records.
pub(crate) fn timestamp_now() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("formatting the current time as RFC 3339 cannot fail")
}
