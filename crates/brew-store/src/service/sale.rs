//! # Sale Service
//!
//! Records sales against products, keeping the two collections consistent:
//! creating a sale decrements the product's stock, editing one re-applies the
//! quantity delta, deleting one restores the stock. Each operation persists
//! both mutations as a single document write.
//!
//! ## Stock Arithmetic
//! ```text
//! create(qty)           product.quantity -= qty        (rejected if short)
//! update(old → new)     product.quantity -= (new-old)  (rejected if short)
//! delete(qty)           product.quantity += qty        (skipped if product
//!                                                       was deleted)
//! ```

use chrono::Utc;
use tracing::debug;

use brew_core::validation::{validate_new_sale, validate_sale_update};
use brew_core::{CoreError, EnrichedSale, NewSale, Sale, SaleUpdate};

use crate::error::StoreResult;
use crate::store::Store;

/// Service for sale operations.
#[derive(Debug, Clone)]
pub struct SaleService {
    store: Store,
}

impl SaleService {
    pub(crate) fn new(store: Store) -> Self {
        SaleService { store }
    }

    /// Returns all sales in insertion order, each enriched with its
    /// product's current name, image, and price. Sales whose product has
    /// been deleted carry the sentinel name.
    pub async fn list(&self) -> Vec<EnrichedSale> {
        self.store
            .read(|doc| {
                doc.sales
                    .iter()
                    .map(|sale| EnrichedSale::join(sale.clone(), doc.product(&sale.product_id)))
                    .collect()
            })
            .await
    }

    /// Records a sale: validates stock, decrements the product's quantity,
    /// and appends the stamped sale record.
    pub async fn create(&self, input: NewSale) -> StoreResult<EnrichedSale> {
        validate_new_sale(&input)?;

        let id = self.store.next_id();
        let now = Utc::now();

        debug!(id = %id, product_id = %input.product_id, quantity = input.quantity, "Recording sale");

        self.store
            .mutate(move |doc| {
                let product = doc
                    .product_mut(&input.product_id)
                    .ok_or_else(|| CoreError::ProductNotFound(input.product_id.clone()))?;

                if !product.can_sell(input.quantity) {
                    return Err(CoreError::InsufficientStock {
                        name: product.name.clone(),
                        available: product.quantity,
                        requested: input.quantity,
                    });
                }

                product.quantity -= input.quantity;
                let snapshot = product.clone();

                let sale = Sale {
                    id,
                    product_id: input.product_id,
                    quantity: input.quantity,
                    total: input.total,
                    date: now.format("%Y-%m-%d").to_string(),
                    timestamp: now,
                };

                let enriched = EnrichedSale::join(sale.clone(), Some(&snapshot));
                doc.sales.push(sale);
                Ok(enriched)
            })
            .await
    }

    /// Edits a sale's quantity and total, re-deriving the stock delta.
    pub async fn update(&self, id: &str, input: SaleUpdate) -> StoreResult<EnrichedSale> {
        validate_sale_update(&input)?;

        debug!(id = %id, quantity = input.quantity, "Editing sale");

        let id = id.to_string();
        self.store
            .mutate(move |doc| {
                let sale_index = doc
                    .sale_index(&id)
                    .ok_or_else(|| CoreError::SaleNotFound(id.clone()))?;

                let product_id = doc.sales[sale_index].product_id.clone();
                let old_quantity = doc.sales[sale_index].quantity;
                let delta = input.quantity - old_quantity;

                let product = doc
                    .product_mut(&product_id)
                    .ok_or_else(|| CoreError::ProductNotFound(product_id.clone()))?;

                if delta > 0 && !product.can_sell(delta) {
                    return Err(CoreError::InsufficientStock {
                        name: product.name.clone(),
                        available: product.quantity,
                        requested: delta,
                    });
                }

                product.quantity -= delta;
                let snapshot = product.clone();

                let sale = &mut doc.sales[sale_index];
                sale.quantity = input.quantity;
                sale.total = input.total;

                Ok(EnrichedSale::join(sale.clone(), Some(&snapshot)))
            })
            .await
    }

    /// Deletes a sale, restoring the product's stock if the product still
    /// exists (silently skipped otherwise).
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting sale");

        let id = id.to_string();
        self.store
            .mutate(move |doc| {
                let sale_index = doc
                    .sale_index(&id)
                    .ok_or_else(|| CoreError::SaleNotFound(id.clone()))?;

                let sale = doc.sales.remove(sale_index);

                if let Some(product) = doc.product_mut(&sale.product_id) {
                    product.quantity += sale.quantity;
                }

                Ok(())
            })
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
