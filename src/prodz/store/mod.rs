//! # Storage Layer
//!
//! This module defines the storage abstraction for prodz. The [`CatalogStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. The whole collection
//!   lives in one pretty-printed JSON file (`products.json` by default) and
//!   is rewritten in full on every mutation.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence, fast, isolated test execution.
//!
//! ## Access Model
//!
//! The trait deliberately exposes only whole-collection `load` and `save`.
//! Commands read the current state, mutate a `Vec<Product>` in memory, and
//! write the full result back. Nothing is cached between calls, so every
//! operation observes whatever the file contains at that moment. There is no
//! locking; a single writer process is assumed.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Abstract interface for product storage.
///
/// Implementations persist the collection as one ordered sequence; insertion
/// order is preserved across save/load.
pub trait CatalogStore {
    /// Load the entire product collection
    fn load(&self) -> Result<Vec<Product>>;

    /// Replace the persisted collection with `products`
    fn save(&mut self, products: &[Product]) -> Result<()>;
}
