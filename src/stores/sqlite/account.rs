//! Implements the SQLite backed account store.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{Account, DatabaseID, NewAccount},
    stores::AccountStore,
};

use super::SQLiteBackend;

impl AccountStore for SQLiteBackend {
    /// Create an account in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, new: NewAccount) -> Result<Account, Error> {
        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO accounts (name, type, balance, currency, icon, include_in_total)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                &new.name,
                &new.kind,
                new.balance,
                &new.currency,
                &new.icon,
                new.include_in_total,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Account {
            id,
            name: new.name,
            kind: new.kind,
            balance: new.balance,
            currency: new.currency,
            icon: new.icon,
            include_in_total: new.include_in_total,
        })
    }

    /// Retrieve every account in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Account>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, name, type, balance, currency, icon, include_in_total FROM accounts",
            )?
            .query_map([], map_row)?
            .map(|maybe_account| maybe_account.map_err(|error| error.into()))
            .collect()
    }

    /// Replace the fields of the account with `id`.
    ///
    /// Zero rows affected means the ID is unknown, which is not an error.
    fn update(&self, id: DatabaseID, fields: NewAccount) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "UPDATE accounts
             SET name = ?1, type = ?2, balance = ?3, currency = ?4, icon = ?5,
                 include_in_total = ?6
             WHERE id = ?7",
            (
                &fields.name,
                &fields.kind,
                fields.balance,
                &fields.currency,
                &fields.icon,
                fields.include_in_total,
                id,
            ),
        )?;

        Ok(())
    }

    /// Delete the account with `id`, if it exists.
    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        self.connection
            .lock()
            .unwrap()
            .execute("DELETE FROM accounts WHERE id = ?1", [id])?;

        Ok(())
    }
}

pub(super) fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            balance REAL NOT NULL DEFAULT 0,
            currency TEXT NOT NULL,
            icon TEXT NOT NULL,
            include_in_total INTEGER NOT NULL DEFAULT 1
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Account, rusqlite::Error> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        balance: row.get(3)?,
        currency: row.get(4)?,
        icon: row.get(5)?,
        include_in_total: row.get(6)?,
    })
}
