//! Implements the SQLite backed debt store.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{DatabaseID, Debt, DebtStatus, NewDebt},
    stores::{DebtStore, timestamp_now},
};

use super::SQLiteBackend;

impl DebtStore for SQLiteBackend {
    /// Create a debt in the database.
    ///
    /// The creation time is stamped here and the debt starts out pending.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, new: NewDebt) -> Result<Debt, Error> {
        let date = timestamp_now();
        let status = DebtStatus::Pending;

        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO debts (person, amount, type, note, date, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (&new.person, new.amount, new.direction, &new.note, &date, status),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Debt {
            id,
            person: new.person,
            amount: new.amount,
            direction: new.direction,
            note: new.note,
            date,
            status,
        })
    }

    /// Retrieve every debt, newest first by creation date.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Debt>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, person, amount, type, note, date, status FROM debts
                 ORDER BY date DESC",
            )?
            .query_map([], map_row)?
            .map(|maybe_debt| maybe_debt.map_err(|error| error.into()))
            .collect()
    }

    /// Replace the mutable fields of the debt with `id`.
    ///
    /// The creation date and status are left untouched. Zero rows affected
    /// means the ID is unknown, which is not an error.
    fn update(&self, id: DatabaseID, fields: NewDebt) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "UPDATE debts SET person = ?1, amount = ?2, type = ?3, note = ?4 WHERE id = ?5",
            (&fields.person, fields.amount, fields.direction, &fields.note, id),
        )?;

        Ok(())
    }

    /// Delete the debt with `id`, if it exists.
    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        self.connection
            .lock()
            .unwrap()
            .execute("DELETE FROM debts WHERE id = ?1", [id])?;

        Ok(())
    }

    /// Set only the status of the debt with `id`.
    fn set_status(&self, id: DatabaseID, status: DebtStatus) -> Result<(), Error> {
        self.connection
            .lock()
            .unwrap()
            .execute("UPDATE debts SET status = ?1 WHERE id = ?2", (status, id))?;

        Ok(())
    }
}

pub(super) fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS debts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            person TEXT NOT NULL,
            amount REAL NOT NULL,
            type TEXT NOT NULL,
            note TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending'
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Debt, rusqlite::Error> {
    Ok(Debt {
        id: row.get(0)?,
        person: row.get(1)?,
        amount: row.get(2)?,
        direction: row.get(3)?,
        note: row.get(4)?,
        date: row.get(5)?,
        status: row.get(6)?,
    })
}
