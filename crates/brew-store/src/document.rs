//! # Document Layout
//!
//! The single persisted structure holding all products and sales.
//!
//! The on-disk representation is a JSON object with two top-level arrays:
//!
//! ```json
//! {
//!   "products": [ { "id": "...", "name": "...", ... } ],
//!   "sales":    [ { "id": "...", "productId": "...", ... } ]
//! }
//! ```
//!
//! Both collections default to empty, and unknown top-level keys are
//! ignored, so any structurally-valid JSON object loads.

use serde::{Deserialize, Serialize};

use brew_core::{Product, Sale};

/// The whole persisted document. Every mutation operates on a full in-memory
/// copy and is written back whole; there are no partial writes and no schema
/// versioning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryDocument {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub sales: Vec<Sale>,
}

impl InventoryDocument {
    /// Finds a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Finds a product by id, mutably.
    pub fn product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Finds a sale's position by id.
    pub fn sale_index(&self, id: &str) -> Option<usize> {
        self.sales.iter().position(|s| s.id == id)
    }

    /// Finds a product's position by id.
    pub fn product_index(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}
