//! Implements the flat-store debt collection.

use crate::{
    Error,
    models::{DatabaseID, Debt, DebtStatus, NewDebt},
    stores::{DebtStore, timestamp_now},
};

use super::{DEBTS_KEY, FlatBackend, next_id, read_collection, write_collection};

impl DebtStore for FlatBackend {
    fn create(&self, new: NewDebt) -> Result<Debt, Error> {
        let mut store = self.store.lock().unwrap();
        let mut debts: Vec<Debt> = read_collection(store.as_ref(), DEBTS_KEY)?;

        let debt = Debt {
            id: next_id(),
            person: new.person,
            amount: new.amount,
            direction: new.direction,
            note: new.note,
            date: timestamp_now(),
            status: DebtStatus::Pending,
        };
        debts.push(debt.clone());
        write_collection(store.as_mut(), DEBTS_KEY, &debts)?;

        Ok(debt)
    }

    fn get_all(&self) -> Result<Vec<Debt>, Error> {
        let store = self.store.lock().unwrap();
        let mut debts: Vec<Debt> = read_collection(store.as_ref(), DEBTS_KEY)?;

        debts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(debts)
    }

    fn update(&self, id: DatabaseID, fields: NewDebt) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        let mut debts: Vec<Debt> = read_collection(store.as_ref(), DEBTS_KEY)?;

        // An unknown ID is a no-op and must leave the stored blob untouched.
        let Some(debt) = debts.iter_mut().find(|debt| debt.id == id) else {
            return Ok(());
        };
        debt.apply(fields);

        write_collection(store.as_mut(), DEBTS_KEY, &debts)
    }

    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        let mut debts: Vec<Debt> = read_collection(store.as_ref(), DEBTS_KEY)?;

        let count_before = debts.len();
        debts.retain(|debt| debt.id != id);
        if debts.len() == count_before {
            return Ok(());
        }

        write_collection(store.as_mut(), DEBTS_KEY, &debts)
    }

    fn set_status(&self, id: DatabaseID, status: DebtStatus) -> Result<(), Error> {
        let mut store = self.store.lock().unwrap();
        let mut debts: Vec<Debt> = read_collection(store.as_ref(), DEBTS_KEY)?;

        let Some(debt) = debts.iter_mut().find(|debt| debt.id == id) else {
            return Ok(());
        };
        debt.status = status;

        write_collection(store.as_mut(), DEBTS_KEY, &debts)
    }
}
