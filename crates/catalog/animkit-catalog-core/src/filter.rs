//! Browsing filter state for the catalog grid.

use serde::{Deserialize, Serialize};

use crate::category::Category;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Category selection plus free-text query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub query: String,
}

impl CatalogFilter {
    /// Choosing a category clears any pending query.
    pub fn select(&mut self, category: CategoryFilter) {
        self.category = category;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[inline]
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// Result count line shown above the grid.
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 animation found".to_string()
    } else {
        format!("{count} animations found")
    }
}
