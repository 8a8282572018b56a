//! # Catalog State
//!
//! The catalog is built once at startup and never changes, so it is shared
//! behind a plain `Arc` with no lock.

use std::sync::Arc;

use counter_core::Catalog;

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    /// The departmental store catalog.
    fn default() -> Self {
        CatalogState::new(Catalog::departmental_store())
    }
}
