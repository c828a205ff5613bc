//! Shared state handed to every tool handler.

use crate::catalog::Catalog;
use crate::config::DEFAULT_LIMIT;
use std::sync::Arc;

/// The loaded catalog plus request defaults.
///
/// The catalog is immutable once loaded, so clones share it through an `Arc`
/// and handlers never need a lock.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
    default_limit: usize,
}

impl CatalogState {
    pub fn new(catalog: Catalog, default_limit: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            default_limit: default_limit.max(1),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Result limit applied when a request does not carry one.
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }
}

impl From<Catalog> for CatalogState {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog, DEFAULT_LIMIT)
    }
}
