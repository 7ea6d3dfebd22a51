//! Implements the SQLite backed category store.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{Category, DatabaseID, NewCategory},
    stores::CategoryStore,
};

use super::SQLiteBackend;

impl CategoryStore for SQLiteBackend {
    /// Create a category in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, new: NewCategory) -> Result<Category, Error> {
        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO categories (name, icon, color, budget) VALUES (?1, ?2, ?3, ?4)",
            (&new.name, &new.icon, &new.color, new.budget),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Category {
            id,
            name: new.name,
            icon: new.icon,
            color: new.color,
            budget: new.budget,
        })
    }

    /// Retrieve every category in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, icon, color, budget FROM categories")?
            .query_map([], map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    /// Replace the fields of the category with `id`.
    ///
    /// Zero rows affected means the ID is unknown, which is not an error.
    fn update(&self, id: DatabaseID, fields: NewCategory) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "UPDATE categories SET name = ?1, icon = ?2, color = ?3, budget = ?4 WHERE id = ?5",
            (&fields.name, &fields.icon, &fields.color, fields.budget, id),
        )?;

        Ok(())
    }

    /// Delete the category with `id` and every transaction referencing it.
    ///
    /// The category row goes first, then the transactions, both inside one
    /// SQL transaction.
    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();
        let tx = connection.unchecked_transaction()?;

        tx.execute("DELETE FROM categories WHERE id = ?1", [id])?;
        tx.execute("DELETE FROM transactions WHERE category_id = ?1", [id])?;

        tx.commit()?;

        Ok(())
    }
}

pub(super) fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            icon TEXT NOT NULL,
            color TEXT NOT NULL,
            budget REAL NOT NULL DEFAULT 0
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        icon: row.get(2)?,
        color: row.get(3)?,
        budget: row.get(4)?,
    })
}

#[cfg(test)]
mod sqlite_category_tests {
    use rusqlite::Connection;

    use crate::{
        models::{NewCategory, NewTransaction, TransactionKind},
        stores::{CategoryStore, TransactionStore},
    };

    use super::SQLiteBackend;

    fn get_test_backend() -> SQLiteBackend {
        let connection = Connection::open_in_memory().unwrap();
        SQLiteBackend::with_connection(connection).unwrap()
    }

    fn dining() -> NewCategory {
        NewCategory {
            name: "Dining".to_string(),
            icon: "utensils".to_string(),
            color: "#6366F1".to_string(),
            budget: 600.0,
        }
    }

    #[test]
    fn create_category_succeeds() {
        let backend = get_test_backend();

        let category = CategoryStore::create(&backend, dining()).unwrap();

        assert!(category.id > 0);
        assert_eq!(category.name, "Dining");
        assert_eq!(category.icon, "utensils");
        assert_eq!(category.color, "#6366F1");
        assert_eq!(category.budget, 600.0);
    }

    #[test]
    fn get_all_includes_created_category() {
        let backend = get_test_backend();
        let category = CategoryStore::create(&backend, dining()).unwrap();

        let categories = CategoryStore::get_all(&backend).unwrap();

        assert_eq!(categories, vec![category]);
    }

    #[test]
    fn update_category_replaces_all_fields() {
        let backend = get_test_backend();
        let category = CategoryStore::create(&backend, dining()).unwrap();

        CategoryStore::update(
            &backend,
            category.id,
            NewCategory {
                name: "Eating Out".to_string(),
                icon: "pizza".to_string(),
                color: "#EF4444".to_string(),
                budget: 250.0,
            },
        )
        .unwrap();

        let categories = CategoryStore::get_all(&backend).unwrap();
        assert_eq!(categories.len(), 1);
        let updated = &categories[0];
        assert_eq!(updated.id, category.id);
        assert_eq!(updated.name, "Eating Out");
        assert_eq!(updated.icon, "pizza");
        assert_eq!(updated.color, "#EF4444");
        assert_eq!(updated.budget, 250.0);
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let backend = get_test_backend();
        let category = CategoryStore::create(&backend, dining()).unwrap();

        let result = CategoryStore::update(
            &backend,
            category.id + 999,
            NewCategory {
                name: "Ghost".to_string(),
                icon: "ghost".to_string(),
                color: "#000000".to_string(),
                budget: 0.0,
            },
        );

        assert_eq!(result, Ok(()));
        assert_eq!(CategoryStore::get_all(&backend).unwrap(), vec![category]);
    }

    #[test]
    fn delete_with_unknown_id_is_a_no_op() {
        let backend = get_test_backend();
        let category = CategoryStore::create(&backend, dining()).unwrap();

        let result = CategoryStore::delete(&backend, category.id + 999);

        assert_eq!(result, Ok(()));
        assert_eq!(CategoryStore::get_all(&backend).unwrap(), vec![category]);
    }

    #[test]
    fn delete_cascades_to_referencing_transactions() {
        let backend = get_test_backend();
        let dining = CategoryStore::create(&backend, dining()).unwrap();
        let other = CategoryStore::create(
            &backend,
            NewCategory {
                name: "Transport".to_string(),
                icon: "bus".to_string(),
                color: "#3B82F6".to_string(),
                budget: 0.0,
            },
        )
        .unwrap();

        TransactionStore::create(
            &backend,
            NewTransaction {
                kind: TransactionKind::Expense,
                amount: 32.50,
                category_id: Some(dining.id),
                note: "Coffee".to_string(),
                date: "2024-01-15T10:00:00Z".to_string(),
            },
        )
        .unwrap();
        let kept = TransactionStore::create(
            &backend,
            NewTransaction {
                kind: TransactionKind::Expense,
                amount: 2.80,
                category_id: Some(other.id),
                note: "Bus fare".to_string(),
                date: "2024-01-16T08:00:00Z".to_string(),
            },
        )
        .unwrap();

        CategoryStore::delete(&backend, dining.id).unwrap();

        let transactions = TransactionStore::get_all(&backend).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].transaction, kept);
        assert!(
            !CategoryStore::get_all(&backend)
                .unwrap()
                .iter()
                .any(|category| category.id == dining.id)
        );
    }
}
