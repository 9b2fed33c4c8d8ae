use std::sync::Arc;

use crate::models::Catalog;

/// Shared application state
///
/// The catalog is never written after startup, so it is shared without a lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates application state serving the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
