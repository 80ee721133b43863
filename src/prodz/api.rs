//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all prodz operations, regardless of the UI being
//! used.
//!
//! The facade dispatches to the appropriate command function and returns
//! structured `Result<CmdResult>` values. It holds no business logic, does
//! no I/O formatting, and never prints: soft conditions (missing fields,
//! duplicate codes, unknown ids, bad limits) come back as [`Outcome`]
//! values inside the result, while filesystem and decoding failures
//! propagate as errors.
//!
//! ## Generic Over CatalogStore
//!
//! `ProdzApi<S: CatalogStore>` is generic over the storage backend:
//! - Production: `ProdzApi<FileStore>`
//! - Testing: `ProdzApi<InMemoryStore>`
//!
//! This enables exercising the full surface without touching the
//! filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::NewProduct;
use crate::store::CatalogStore;

/// The main API facade for prodz operations.
///
/// Generic over `CatalogStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct ProdzApi<S: CatalogStore> {
    store: S,
    paths: commands::ProdzPaths,
}

impl<S: CatalogStore> ProdzApi<S> {
    pub fn new(store: S, paths: commands::ProdzPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_product(&mut self, fields: NewProduct) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn limited_products(&self, limit: i64) -> Result<commands::CmdResult> {
        commands::limit::run(&self.store, limit)
    }

    pub fn product_by_id(&self, id: u64) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn update_product(
        &mut self,
        id: u64,
        update: &commands::ProductUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_product(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn export_products(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::ProdzPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, Outcome, ProductUpdate, ProdzPaths};
