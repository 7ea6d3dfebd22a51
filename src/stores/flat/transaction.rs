//! Implements the flat-store transaction collection, including the in-memory
//! join against the category collection.

use crate::{
    Error,
    models::{Category, DatabaseID, NewTransaction, Transaction, TransactionEntry},
    stores::TransactionStore,
};

use super::{CATEGORIES_KEY, FlatBackend, TRANSACTIONS_KEY, next_id, read_collection, write_collection};

impl TransactionStore for FlatBackend {
    fn create(&self, new: NewTransaction) -> Result<Transaction, Error> {
        let mut store = self.store.lock().unwrap();
        let mut transactions: Vec<Transaction> =
            read_collection(store.as_ref(), TRANSACTIONS_KEY)?;

        let transaction = Transaction {
            id: next_id(),
            kind: new.kind,
            amount: new.amount,
            category_id: new.category_id,
            note: new.note,
            date: new.date,
        };
        transactions.push(transaction.clone());
        write_collection(store.as_mut(), TRANSACTIONS_KEY, &transactions)?;

        Ok(transaction)
    }

    /// Decode both collections and join them in memory, matching what the
    /// SQL backend's left join produces: transactions without a live
    /// category keep `None` for the joined fields.
    fn get_all(&self) -> Result<Vec<TransactionEntry>, Error> {
        let store = self.store.lock().unwrap();
        let transactions: Vec<Transaction> = read_collection(store.as_ref(), TRANSACTIONS_KEY)?;
        let categories: Vec<Category> = read_collection(store.as_ref(), CATEGORIES_KEY)?;

        let mut entries: Vec<TransactionEntry> = transactions
            .into_iter()
            .map(|transaction| {
                let category = categories
                    .iter()
                    .find(|category| Some(category.id) == transaction.category_id);

                TransactionEntry {
                    category_name: category.map(|category| category.name.clone()),
                    category_color: category.map(|category| category.color.clone()),
                    transaction,
                }
            })
            .collect();

        // Newest first, by lexicographic comparison of the ISO-8601 dates.
        entries.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));

        Ok(entries)
    }

    fn update(&self, id: DatabaseID, fields: NewTransaction) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        let mut transactions: Vec<Transaction> =
            read_collection(store.as_ref(), TRANSACTIONS_KEY)?;

        // An unknown ID is a no-op and must leave the stored blob untouched.
        let Some(transaction) = transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
        else {
            return Ok(());
        };
        transaction.apply(fields);

        write_collection(store.as_mut(), TRANSACTIONS_KEY, &transactions)
    }

    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        let mut transactions: Vec<Transaction> =
            read_collection(store.as_ref(), TRANSACTIONS_KEY)?;

        let count_before = transactions.len();
        transactions.retain(|transaction| transaction.id != id);
        if transactions.len() == count_before {
            return Ok(());
        }

        write_collection(store.as_mut(), TRANSACTIONS_KEY, &transactions)
    }
}

#[cfg(test)]
mod flat_transaction_tests {
    use crate::{
        models::{NewCategory, NewTransaction, TransactionKind},
        stores::{CategoryStore, TransactionStore},
    };

    use super::{CATEGORIES_KEY, FlatBackend};
    use crate::stores::flat::{KeyValue, MemoryKv};

    fn get_empty_backend() -> FlatBackend {
        let mut kv = MemoryKv::new();
        kv.set(CATEGORIES_KEY, "[]").unwrap();
        FlatBackend::open(kv).unwrap()
    }

    fn expense(date: &str) -> NewTransaction {
        NewTransaction {
            kind: TransactionKind::Expense,
            amount: 10.0,
            category_id: None,
            note: String::new(),
            date: date.to_string(),
        }
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let backend = get_empty_backend();

        let first = TransactionStore::create(&backend, expense("2024-01-01T00:00:00Z")).unwrap();
        let second = TransactionStore::create(&backend, expense("2024-01-02T00:00:00Z")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(TransactionStore::get_all(&backend).unwrap().len(), 2);
    }

    #[test]
    fn get_all_returns_newest_first() {
        let backend = get_empty_backend();
        for date in [
            "2024-01-15T10:00:00Z",
            "2024-03-02T08:30:00Z",
            "2024-02-20T19:45:00Z",
        ] {
            TransactionStore::create(&backend, expense(date)).unwrap();
        }

        let entries = TransactionStore::get_all(&backend).unwrap();

        let got: Vec<&str> = entries
            .iter()
            .map(|entry| entry.transaction.date.as_str())
            .collect();
        assert_eq!(
            got,
            vec![
                "2024-03-02T08:30:00Z",
                "2024-02-20T19:45:00Z",
                "2024-01-15T10:00:00Z",
            ]
        );
    }

    #[test]
    fn get_all_joins_current_category_name_and_color() {
        let backend = get_empty_backend();
        let dining = CategoryStore::create(
            &backend,
            NewCategory {
                name: "Dining".to_string(),
                icon: "utensils".to_string(),
                color: "#6366F1".to_string(),
                budget: 600.0,
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

        let entries = TransactionStore::get_all(&backend).unwrap();

        assert_eq!(entries[0].category_name.as_deref(), Some("Dining"));
        assert_eq!(entries[0].category_color.as_deref(), Some("#6366F1"));
    }

    #[test]
    fn join_reflects_category_updates_not_a_snapshot() {
        let backend = get_empty_backend();
        let dining = CategoryStore::create(
            &backend,
            NewCategory {
                name: "Dining".to_string(),
                icon: "utensils".to_string(),
                color: "#6366F1".to_string(),
                budget: 600.0,
            },
        )
        .unwrap();
        TransactionStore::create(
            &backend,
            NewTransaction {
                kind: TransactionKind::Expense,
                amount: 5.0,
                category_id: Some(dining.id),
                note: String::new(),
                date: "2024-01-15T10:00:00Z".to_string(),
            },
        )
        .unwrap();

        CategoryStore::update(
            &backend,
            dining.id,
            NewCategory {
                name: "Restaurants".to_string(),
                icon: "utensils".to_string(),
                color: "#22C55E".to_string(),
                budget: 600.0,
            },
        )
        .unwrap();

        let entries = TransactionStore::get_all(&backend).unwrap();
        assert_eq!(entries[0].category_name.as_deref(), Some("Restaurants"));
        assert_eq!(entries[0].category_color.as_deref(), Some("#22C55E"));
    }

    #[test]
    fn missing_category_leaves_joined_fields_unset() {
        let backend = get_empty_backend();
        // A dangling reference, e.g. data written before a category was
        // removed through a path that did not cascade.
        TransactionStore::create(
            &backend,
            NewTransaction {
                kind: TransactionKind::Expense,
                amount: 5.0,
                category_id: Some(424242),
                note: String::new(),
                date: "2024-01-15T10:00:00Z".to_string(),
            },
        )
        .unwrap();

        let entries = TransactionStore::get_all(&backend).unwrap();

        assert_eq!(entries[0].category_name, None);
        assert_eq!(entries[0].category_color, None);
    }

    #[test]
    fn update_replaces_all_fields_and_keeps_id() {
        let backend = get_empty_backend();
        let transaction =
            TransactionStore::create(&backend, expense("2024-01-15T10:00:00Z")).unwrap();

        TransactionStore::update(
            &backend,
            transaction.id,
            NewTransaction {
                kind: TransactionKind::Income,
                amount: 1500.0,
                category_id: None,
                note: "Salary".to_string(),
                date: "2024-02-01T09:00:00Z".to_string(),
            },
        )
        .unwrap();

        let entries = TransactionStore::get_all(&backend).unwrap();
        assert_eq!(entries.len(), 1);
        let updated = &entries[0].transaction;
        assert_eq!(updated.id, transaction.id);
        assert_eq!(updated.kind, TransactionKind::Income);
        assert_eq!(updated.amount, 1500.0);
        assert_eq!(updated.note, "Salary");
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let backend = get_empty_backend();
        let transaction =
            TransactionStore::create(&backend, expense("2024-01-15T10:00:00Z")).unwrap();

        let result = TransactionStore::update(
            &backend,
            transaction.id + 999,
            expense("2030-01-01T00:00:00Z"),
        );

        assert_eq!(result, Ok(()));
        let entries = TransactionStore::get_all(&backend).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].transaction, transaction);
    }

    #[test]
    fn delete_removes_only_the_targeted_transaction() {
        let backend = get_empty_backend();
        let first = TransactionStore::create(&backend, expense("2024-01-15T10:00:00Z")).unwrap();
        let second = TransactionStore::create(&backend, expense("2024-01-16T10:00:00Z")).unwrap();

        TransactionStore::delete(&backend, first.id).unwrap();

        let entries = TransactionStore::get_all(&backend).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].transaction, second);
    }
}
