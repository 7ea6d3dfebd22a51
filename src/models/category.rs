//! This file defines the `Category` type and the fields needed to create one.
//! A category groups transactions for budgeting and reporting, and a
//! transaction may reference at most one category.

use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// A category for expenses and income, e.g. 'Groceries', 'Eating Out', 'Wages'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID assigned by the backing store.
    pub id: DatabaseID,
    /// The display name.
    pub name: String,
    /// Key into the app's icon lookup table.
    pub icon: String,
    /// The display color as a hex code, e.g. "#6366F1".
    pub color: String,
    /// Monthly budget ceiling. Zero means no ceiling is set.
    #[serde(default)]
    pub budget: f64,
}

/// The fields needed to create a category, or to replace one on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    /// The display name.
    pub name: String,
    /// Key into the app's icon lookup table.
    pub icon: String,
    /// The display color as a hex code.
    pub color: String,
    /// Monthly budget ceiling.
    #[serde(default)]
    pub budget: f64,
}

impl Category {
    /// Replace every field except the ID with the contents of `fields`.
    pub fn apply(&mut self, fields: NewCategory) {
        self.name = fields.name;
        self.icon = fields.icon;
        self.color = fields.color;
        self.budget = fields.budget;
    }
}
