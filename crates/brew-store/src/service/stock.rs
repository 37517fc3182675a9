//! # Stock Adjustment Service
//!
//! Signed stock changes outside the sale flow: restocks and corrections.
//!
//! Additions are unconditional; deductions saturate at zero rather than
//! erroring, so a correction can always zero out a shelf.

use tracing::debug;

use brew_core::validation::validate_stock_adjustment;
use brew_core::{AdjustmentType, CoreError, Product, StockAdjustment};

use crate::error::StoreResult;
use crate::store::Store;

/// Service for stock adjustments.
#[derive(Debug, Clone)]
pub struct StockService {
    store: Store,
}

impl StockService {
    pub(crate) fn new(store: Store) -> Self {
        StockService { store }
    }

    /// Applies a stock adjustment and returns the updated product.
    pub async fn adjust(&self, adjustment: StockAdjustment) -> StoreResult<Product> {
        validate_stock_adjustment(&adjustment)?;

        debug!(
            product_id = %adjustment.product_id,
            adjustment_type = ?adjustment.adjustment_type,
            quantity = adjustment.quantity,
            "Adjusting stock"
        );

        self.store
            .mutate(move |doc| {
                let product = doc
                    .product_mut(&adjustment.product_id)
                    .ok_or_else(|| CoreError::ProductNotFound(adjustment.product_id.clone()))?;

                match adjustment.adjustment_type {
                    AdjustmentType::Add => {
                        product.quantity += adjustment.quantity;
                    }
                    AdjustmentType::Deduct => {
                        // Clamped at zero: over-deduction silently saturates
                        product.quantity = (product.quantity - adjustment.quantity).max(0);
                    }
                }

                Ok(product.clone())
            })
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::{Money, ProductInput};

    async fn store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("database.json")).await.unwrap();
        (dir, store)
    }

    async fn seed(store: &Store, quantity: i64) -> Product {
        store
            .products()
            .create(ProductInput {
                name: "Espresso Beans".to_string(),
                description: None,
                category: "Beverages".to_string(),
                sub_category: "Coffee".to_string(),
                price: Money::from_cents(1200),
                quantity,
                image_url: None,
            })
            .await
            .unwrap()
    }

    fn adjustment(product_id: &str, adjustment_type: AdjustmentType, quantity: i64) -> StockAdjustment {
        StockAdjustment {
            product_id: product_id.to_string(),
            adjustment_type,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_add_increments_unconditionally() {
        let (_dir, store) = store().await;
        let product = seed(&store, 5).await;

        let updated = store
            .stock()
            .adjust(adjustment(&product.id, AdjustmentType::Add, 12))
            .await
            .unwrap();
        assert_eq!(updated.quantity, 17);
    }

    #[tokio::test]
    async fn test_deduct_clamps_at_zero() {
        let (_dir, store) = store().await;
        let product = seed(&store, 5).await;

        let updated = store
            .stock()
            .adjust(adjustment(&product.id, AdjustmentType::Deduct, 100))
            .await
            .unwrap();
        assert_eq!(updated.quantity, 0);

        // Persisted, not just returned
        assert_eq!(store.products().get(&product.id).await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_deduct_exact_amount() {
        let (_dir, store) = store().await;
        let product = seed(&store, 5).await;

        let updated = store
            .stock()
            .adjust(adjustment(&product.id, AdjustmentType::Deduct, 5))
            .await
            .unwrap();
        assert_eq!(updated.quantity, 0);
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let (_dir, store) = store().await;

        let err = store
            .stock()
            .adjust(adjustment("9999", AdjustmentType::Add, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::StoreError::Core(CoreError::ProductNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_non_positive_quantity_is_rejected() {
        let (_dir, store) = store().await;
        let product = seed(&store, 5).await;

        let err = store
            .stock()
            .adjust(adjustment(&product.id, AdjustmentType::Add, 0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::StoreError::Core(CoreError::Validation(_))
        ));
        assert_eq!(store.products().get(&product.id).await.unwrap().quantity, 5);
    }
}
