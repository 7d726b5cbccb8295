// Service exports
pub mod cache;
pub mod catalog;

pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use catalog::{Catalog, CatalogError, Selection};
