//! Implements the SQLite backed transaction store.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Transaction, TransactionEntry},
    stores::TransactionStore,
};

use super::SQLiteBackend;

impl TransactionStore for SQLiteBackend {
    /// Create a transaction in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, new: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO transactions (type, amount, category_id, note, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (new.kind, new.amount, new.category_id, &new.note, &new.date),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Transaction {
            id,
            kind: new.kind,
            amount: new.amount,
            category_id: new.category_id,
            note: new.note,
            date: new.date,
        })
    }

    /// Retrieve every transaction, newest first, joined with its category.
    ///
    /// The left join keeps transactions whose category has been deleted (or
    /// was never set); their joined fields come back as `None`. Ordering
    /// relies on lexicographic comparison of the ISO-8601 date strings.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<TransactionEntry>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT t.id, t.type, t.amount, t.category_id, t.note, t.date, c.name, c.color
                 FROM transactions t
                 LEFT JOIN categories c ON t.category_id = c.id
                 ORDER BY t.date DESC",
            )?
            .query_map([], map_entry_row)?
            .map(|maybe_entry| maybe_entry.map_err(|error| error.into()))
            .collect()
    }

    /// Replace the fields of the transaction with `id`.
    ///
    /// Zero rows affected means the ID is unknown, which is not an error.
    fn update(&self, id: DatabaseID, fields: NewTransaction) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "UPDATE transactions
             SET type = ?1, amount = ?2, category_id = ?3, note = ?4, date = ?5
             WHERE id = ?6",
            (
                fields.kind,
                fields.amount,
                fields.category_id,
                &fields.note,
                &fields.date,
                id,
            ),
        )?;

        Ok(())
    }

    /// Delete the transaction with `id`, if it exists.
    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        self.connection
            .lock()
            .unwrap()
            .execute("DELETE FROM transactions WHERE id = ?1", [id])?;

        Ok(())
    }
}

pub(super) fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL,
            amount REAL NOT NULL,
            category_id INTEGER,
            note TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_entry_row(row: &Row) -> Result<TransactionEntry, rusqlite::Error> {
    Ok(TransactionEntry {
        transaction: Transaction {
            id: row.get(0)?,
            kind: row.get(1)?,
            amount: row.get(2)?,
            category_id: row.get(3)?,
            note: row.get(4)?,
            date: row.get(5)?,
        },
        category_name: row.get(6)?,
        category_color: row.get(7)?,
    })
}
