//! # Catalog Commands

use serde::Serialize;
use tracing::debug;

use counter_core::{CatalogItem, Category};

use crate::state::CatalogState;

/// Catalog grouped by category, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub categories: Vec<Category>,
}

impl CatalogResponse {
    /// Every item, category by category.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }
}

/// Lists the catalog for the item picker.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Flours                                                                 │
/// │    Wheat Flour            Rs.40 per kg                                  │
/// │    Rice Flour             Rs.35 per kg                                  │
/// │  Pulses                                                                 │
/// │    Chickpeas              Rs.60 per kg                                  │
/// │    ...                                                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_catalog(catalog: &CatalogState) -> CatalogResponse {
    debug!("get_catalog command");
    let catalog = catalog.catalog();
    let categories = catalog
        .categories()
        .iter()
        .map(|name| Category {
            name: name.clone(),
            items: catalog.items_in(name).cloned().collect(),
        })
        .collect();
    CatalogResponse { categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_grouped_in_order() {
        let response = get_catalog(&CatalogState::default());

        let names: Vec<&str> = response.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Flours", "Pulses", "Spices", "Misc"]);
        assert_eq!(response.items().count(), 8);
        assert_eq!(response.categories[3].items[0].name, "Eggs");
    }

    #[test]
    fn test_serializes_prices_in_paisa() {
        let json = serde_json::to_value(get_catalog(&CatalogState::default())).unwrap();
        assert_eq!(json["categories"][0]["items"][0]["unitPrice"], 4000);
        assert_eq!(json["categories"][0]["items"][0]["unit"], "per kg");
    }
}
