//! Implements the flat-store account collection.

use crate::{
    Error,
    models::{Account, DatabaseID, NewAccount},
    stores::AccountStore,
};

use super::{ACCOUNTS_KEY, FlatBackend, next_id, read_collection, write_collection};

impl AccountStore for FlatBackend {
    fn create(&self, new: NewAccount) -> Result<Account, Error> {
        let mut store = self.store.lock().unwrap();
        let mut accounts: Vec<Account> = read_collection(store.as_ref(), ACCOUNTS_KEY)?;

        let account = Account {
            id: next_id(),
            name: new.name,
            kind: new.kind,
            balance: new.balance,
            currency: new.currency,
            icon: new.icon,
            include_in_total: new.include_in_total,
        };
        accounts.push(account.clone());
        write_collection(store.as_mut(), ACCOUNTS_KEY, &accounts)?;

        Ok(account)
    }

    fn get_all(&self) -> Result<Vec<Account>, Error> {
        let store = self.store.lock().unwrap();

        read_collection(store.as_ref(), ACCOUNTS_KEY)
    }

    fn update(&self, id: DatabaseID, fields: NewAccount) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        let mut accounts: Vec<Account> = read_collection(store.as_ref(), ACCOUNTS_KEY)?;

        // An unknown ID is a no-op and must leave the stored blob untouched.
        let Some(account) = accounts.iter_mut().find(|account| account.id == id) else {
            return Ok(());
        };
        account.apply(fields);

        write_collection(store.as_mut(), ACCOUNTS_KEY, &accounts)
    }

    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        let mut accounts: Vec<Account> = read_collection(store.as_ref(), ACCOUNTS_KEY)?;

        let count_before = accounts.len();
        accounts.retain(|account| account.id != id);
        if accounts.len() == count_before {
            return Ok(());
        }

        write_collection(store.as_mut(), ACCOUNTS_KEY, &accounts)
    }
}
