//! Catalog item model and the read-only `Catalog` seam.

use serde::{Deserialize, Serialize};

/// What a catalog entry advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Property,
    Job,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Property => write!(f, "property"),
            Self::Job => write!(f, "job"),
        }
    }
}

/// A listable property or job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub kind: ItemKind,
    pub title: String,
    /// Display price, already formatted ("$2,400/mo", "$85k/yr").
    pub price: String,
    pub location: String,
    /// Short spec chips ("2 beds", "Remote", ...).
    pub specs: Vec<String>,
    pub images: Vec<String>,
}

/// Read-only collection of listable items.
pub trait Catalog: Send + Sync {
    /// All items, in display order.
    fn items(&self) -> &[CatalogItem];

    /// Look up an item by id.
    fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items().iter().find(|item| item.id == id)
    }
}
