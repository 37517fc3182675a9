//! # Product Service
//!
//! Create, update, delete, and list products.
//!
//! ## Update Semantics
//! The update body carries the same fields as creation. Name, category,
//! sub-category, price, and quantity overwrite unconditionally (after
//! validation); `description` and `image_url` fall back to the stored value
//! when absent or empty, so an edit form that leaves them blank doesn't wipe
//! them. Id and creation timestamp are immutable.

use chrono::Utc;
use tracing::debug;

use brew_core::validation::validate_product_input;
use brew_core::{CoreError, Product, ProductInput};

use crate::error::StoreResult;
use crate::store::Store;

/// Service for product operations.
#[derive(Debug, Clone)]
pub struct ProductService {
    store: Store,
}

impl ProductService {
    pub(crate) fn new(store: Store) -> Self {
        ProductService { store }
    }

    /// Returns all products, unfiltered, in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.store.read(|doc| doc.products.clone()).await
    }

    /// Returns a single product by id.
    pub async fn get(&self, id: &str) -> StoreResult<Product> {
        let id = id.to_string();
        self.store
            .read(|doc| {
                doc.product(&id)
                    .cloned()
                    .ok_or(CoreError::ProductNotFound(id.clone()))
            })
            .await
            .map_err(Into::into)
    }

    /// Registers a new product.
    pub async fn create(&self, input: ProductInput) -> StoreResult<Product> {
        validate_product_input(&input)?;

        let product = Product {
            id: self.store.next_id(),
            name: input.name.trim().to_string(),
            description: input.description.unwrap_or_default(),
            category: input.category.trim().to_string(),
            sub_category: input.sub_category.trim().to_string(),
            price: input.price,
            quantity: input.quantity,
            image_url: input.image_url.unwrap_or_default(),
            created_at: Utc::now(),
        };

        debug!(id = %product.id, name = %product.name, "Creating product");

        self.store
            .mutate(|doc| {
                doc.products.push(product.clone());
                Ok(product.clone())
            })
            .await
    }

    /// Updates an existing product.
    pub async fn update(&self, id: &str, input: ProductInput) -> StoreResult<Product> {
        validate_product_input(&input)?;

        debug!(id = %id, "Updating product");

        let id = id.to_string();
        self.store
            .mutate(move |doc| {
                let existing = doc
                    .product_mut(&id)
                    .ok_or(CoreError::ProductNotFound(id.clone()))?;

                existing.name = input.name.trim().to_string();
                existing.category = input.category.trim().to_string();
                existing.sub_category = input.sub_category.trim().to_string();
                existing.price = input.price;
                existing.quantity = input.quantity;

                // Blank values keep what's already stored
                if let Some(description) = input.description.filter(|d| !d.is_empty()) {
                    existing.description = description;
                }
                if let Some(image_url) = input.image_url.filter(|u| !u.is_empty()) {
                    existing.image_url = image_url;
                }

                Ok(existing.clone())
            })
            .await
    }

    /// Deletes a product. Existing sales referencing it are left in place;
    /// read paths substitute a sentinel for the missing product.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");

        let id = id.to_string();
        self.store
            .mutate(move |doc| {
                let index = doc
                    .product_index(&id)
                    .ok_or(CoreError::ProductNotFound(id.clone()))?;
                doc.products.remove(index);
                Ok(())
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
    use brew_core::Money;

    async fn store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("database.json")).await.unwrap();
        (dir, store)
    }

    fn tea() -> ProductInput {
        ProductInput {
            name: "Green Tea".to_string(),
            description: None,
            category: "Beverages".to_string(),
            sub_category: "Hot Drinks".to_string(),
            price: Money::from_cents(500),
            quantity: 20,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let (_dir, store) = store().await;
        let created = store.products().create(tea()).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.description, "");
        assert_eq!(created.image_url, "");

        let listed = store.products().list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].name, "Green Tea");
        assert_eq!(listed[0].price, Money::from_cents(500));
        assert_eq!(listed[0].quantity, 20);
        assert_eq!(listed[0].created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_and_zero_price() {
        let (_dir, store) = store().await;

        let mut missing = tea();
        missing.sub_category = String::new();
        assert!(store.products().create(missing).await.is_err());

        let mut free = tea();
        free.price = Money::zero();
        assert!(store.products().create(free).await.is_err());

        let mut negative = tea();
        negative.quantity = -1;
        assert!(store.products().create(negative).await.is_err());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let (_dir, store) = store().await;
        let a = store.products().create(tea()).await.unwrap();
        let b = store.products().create(tea()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_update_overwrites_and_preserves_blanks() {
        let (_dir, store) = store().await;
        let mut input = tea();
        input.description = Some("Loose leaf".to_string());
        input.image_url = Some("/uploads/tea.png".to_string());
        let created = store.products().create(input).await.unwrap();

        let mut edit = tea();
        edit.name = "Jasmine Tea".to_string();
        edit.quantity = 12;
        // description/image_url absent in the edit body
        let updated = store.products().update(&created.id, edit).await.unwrap();

        assert_eq!(updated.name, "Jasmine Tea");
        assert_eq!(updated.quantity, 12);
        assert_eq!(updated.description, "Loose leaf");
        assert_eq!(updated.image_url, "/uploads/tea.png");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_enforces_price_positivity() {
        let (_dir, store) = store().await;
        let created = store.products().create(tea()).await.unwrap();

        let mut edit = tea();
        edit.price = Money::from_cents(-100);
        assert!(store.products().update(&created.id, edit).await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let (_dir, store) = store().await;
        let err = store.products().update("9999", tea()).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::StoreError::Core(CoreError::ProductNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_product() {
        let (_dir, store) = store().await;
        let created = store.products().create(tea()).await.unwrap();

        store.products().delete(&created.id).await.unwrap();
        assert!(store.products().list().await.is_empty());

        let err = store.products().delete(&created.id).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::StoreError::Core(CoreError::ProductNotFound(_))
        ));
    }
}
