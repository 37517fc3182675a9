//! # Domain Types
//!
//! Core domain types for the café inventory/point-of-sale tracker.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────────┐  │
//! │  │    Product     │   │      Sale      │   │    EnrichedSale    │  │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────────  │  │
//! │  │  id (time)     │   │  id (time)     │   │  sale (flattened)  │  │
//! │  │  name          │   │  product_id    │   │  product_name      │  │
//! │  │  category      │   │  quantity      │   │  product_image     │  │
//! │  │  price (Money) │   │  total (Money) │   │  price             │  │
//! │  │  quantity      │   │  date          │   └────────────────────┘  │
//! │  └────────────────┘   └────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Everything serializes with camelCase field names (`subCategory`,
//! `imageUrl`, `createdAt`) because that is the shape of the persisted
//! document and of the JSON the React frontend consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product
// =============================================================================

/// A product registered in the café's inventory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier. Time-based, immutable once assigned.
    pub id: String,

    /// Display name shown in the product grid.
    pub name: String,

    /// Optional free-text description. Defaults to empty.
    #[serde(default)]
    pub description: String,

    /// Top-level category (e.g. "Beverages").
    pub category: String,

    /// Second-level category (e.g. "Hot Drinks").
    pub sub_category: String,

    /// List price per unit. Strictly positive.
    pub price: Money,

    /// Current stock level. Never negative.
    pub quantity: i64,

    /// Optional display image reference. Defaults to empty.
    #[serde(default)]
    pub image_url: String,

    /// When the product was registered. Set once, never mutated.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Checks whether the requested quantity can be sold from current stock.
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }

    /// Value of the stock on hand (price × quantity).
    #[inline]
    pub fn inventory_value(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Classifies the current stock level for display purposes.
    pub fn stock_level(&self) -> StockLevel {
        if self.quantity == 0 {
            StockLevel::Out
        } else if self.quantity < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }
}

// =============================================================================
// Stock Level
// =============================================================================

/// Display classification of a product's stock, computed from `quantity`.
/// Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Stock at or above the low-stock threshold.
    InStock,
    /// Below the threshold but not empty.
    Low,
    /// Nothing left on the shelf.
    Out,
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale transaction against a single product.
///
/// The product reference is validated at creation time only; the product may
/// later be deleted, leaving an orphaned reference that read paths tolerate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier. Time-based, immutable.
    pub id: String,

    /// The product this sale was recorded against.
    pub product_id: String,

    /// Units sold. Strictly positive.
    pub quantity: i64,

    /// Recorded revenue for this transaction. Caller-supplied, not derived
    /// from list price × quantity.
    pub total: Money,

    /// Calendar date of the sale (`YYYY-MM-DD`), derived from creation time.
    pub date: String,

    /// Creation instant, used for ordering. Stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[ts(type = "number")]
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Enriched Sale
// =============================================================================

/// Sentinel product name shown for sales whose product was deleted.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// A sale enriched with a denormalized snapshot of its product, taken at
/// read time (not at sale time).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSale {
    #[serde(flatten)]
    pub sale: Sale,

    /// Product name at read time, or [`UNKNOWN_PRODUCT`].
    pub product_name: String,

    /// Product image at read time, or empty.
    pub product_image: String,

    /// Product list price at read time, or zero.
    pub price: Money,
}

impl EnrichedSale {
    /// The read-side join: attaches the product's current display fields to
    /// a sale. Every enriched read path goes through here so the sentinel
    /// behavior for deleted products lives in exactly one place.
    pub fn join(sale: Sale, product: Option<&Product>) -> Self {
        match product {
            Some(p) => EnrichedSale {
                sale,
                product_name: p.name.clone(),
                product_image: p.image_url.clone(),
                price: p.price,
            },
            None => EnrichedSale {
                sale,
                product_name: UNKNOWN_PRODUCT.to_string(),
                product_image: String::new(),
                price: Money::zero(),
            },
        }
    }
}

// =============================================================================
// Input DTOs
// =============================================================================

/// Caller input for creating or updating a product. The same body shape
/// serves both operations, as on the original surface.
///
/// For updates, `description` and `image_url` fall back to the existing value
/// when absent or empty; all other fields overwrite unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub sub_category: String,
    pub price: Money,
    pub quantity: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Caller input for recording a sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub product_id: String,
    pub quantity: i64,
    pub total: Money,
}

/// Caller input for editing a sale. Only quantity and total are mutable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleUpdate {
    pub quantity: i64,
    pub total: Money,
}

// =============================================================================
// Stock Adjustment
// =============================================================================

/// Direction of a stock adjustment outside the sale flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentType {
    /// Restock: increments quantity unconditionally.
    Add,
    /// Correction: decrements quantity, clamped at zero.
    Deduct,
}

impl std::str::FromStr for AdjustmentType {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(AdjustmentType::Add),
            "deduct" => Ok(AdjustmentType::Deduct),
            _ => Err(crate::error::ValidationError::NotAllowed {
                field: "adjustmentType".to_string(),
                allowed: vec!["add".to_string(), "deduct".to_string()],
            }),
        }
    }
}

/// Caller input for a stock adjustment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub product_id: String,
    pub adjustment_type: AdjustmentType,
    pub quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
