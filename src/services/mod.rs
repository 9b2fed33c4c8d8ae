pub mod catalog_loader;
pub mod catalog_search;

pub use catalog_loader::load_catalog;
pub use catalog_search::{search_catalog, SearchQuery};
