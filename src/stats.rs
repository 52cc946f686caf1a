//! Derived catalog statistics. Pure functions of the current catalog
//! state; recomputed on demand, never cached.

use serde::Serialize;

use crate::catalog::WorkItem;

/// Category cards shown next to the total.
const DISPLAYED_CATEGORIES: usize = 3;

#[derive(Debug, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub categories: Vec<CategoryCount>,
}

/// Total count plus per-category counts for the first three enumerated
/// categories (zero counts included).
pub fn compute(items: &[WorkItem], categories: &[&str]) -> CatalogStats {
    let categories = categories
        .iter()
        .take(DISPLAYED_CATEGORIES)
        .map(|category| CategoryCount {
            category: category.to_string(),
            count: items.iter().filter(|i| i.category == *category).count(),
        })
        .collect();

    CatalogStats {
        total: items.len(),
        categories,
    }
}
