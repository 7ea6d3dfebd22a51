//! Implements the flat-store category collection.

use crate::{
    Error,
    models::{Category, DatabaseID, NewCategory, Transaction},
    stores::CategoryStore,
};

use super::{CATEGORIES_KEY, FlatBackend, TRANSACTIONS_KEY, next_id, read_collection, write_collection};

impl CategoryStore for FlatBackend {
    fn create(&self, new: NewCategory) -> Result<Category, Error> {
        let mut store = self.store.lock().unwrap();
        let mut categories: Vec<Category> = read_collection(store.as_ref(), CATEGORIES_KEY)?;

        let category = Category {
            id: next_id(),
            name: new.name,
            icon: new.icon,
            color: new.color,
            budget: new.budget,
        };
        categories.push(category.clone());
        write_collection(store.as_mut(), CATEGORIES_KEY, &categories)?;

        Ok(category)
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        let store = self.store.lock().unwrap();

        read_collection(store.as_ref(), CATEGORIES_KEY)
    }

    fn update(&self, id: DatabaseID, fields: NewCategory) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        let mut categories: Vec<Category> = read_collection(store.as_ref(), CATEGORIES_KEY)?;

        // An unknown ID is a no-op and must leave the stored blob untouched.
        let Some(category) = categories.iter_mut().find(|category| category.id == id) else {
            return Ok(());
        };
        category.apply(fields);

        write_collection(store.as_mut(), CATEGORIES_KEY, &categories)
    }

    /// Remove the category, then every transaction referencing it. The two
    /// collection writes happen back to back under the store lock.
    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();

        let mut categories: Vec<Category> = read_collection(store.as_ref(), CATEGORIES_KEY)?;
        let count_before = categories.len();
        categories.retain(|category| category.id != id);
        if categories.len() != count_before {
            write_collection(store.as_mut(), CATEGORIES_KEY, &categories)?;
        }

        let mut transactions: Vec<Transaction> =
            read_collection(store.as_ref(), TRANSACTIONS_KEY)?;
        let count_before = transactions.len();
        transactions.retain(|transaction| transaction.category_id != Some(id));
        if transactions.len() != count_before {
            write_collection(store.as_mut(), TRANSACTIONS_KEY, &transactions)?;
        }

        Ok(())
    }
}
