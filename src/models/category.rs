// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display label (e.g., "Science", "Geography").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category id -> label, serialized as a JSON object keyed by the id.
pub type CategoryMap = BTreeMap<i64, String>;

/// Collapses a category listing into the id -> label map the clients expect.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
