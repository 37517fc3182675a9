//! # brew-core: Pure Business Logic for Brew POS
//!
//! This crate is the heart of the café tracker. It contains every business
//! rule as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Brew POS Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                    Frontend (React)                         │    │
//! │  │   Product grid ─► Stock forms ─► Sales table ─► Reports     │    │
//! │  └──────────────────────────────┬──────────────────────────────┘    │
//! │                                 │ JSON request/response              │
//! │  ┌──────────────────────────────▼──────────────────────────────┐    │
//! │  │              brew-store (document + services)               │    │
//! │  │     ProductService, SaleService, StockService, Store        │    │
//! │  └──────────────────────────────┬──────────────────────────────┘    │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼──────────────────────────────┐    │
//! │  │               ★ brew-core (THIS CRATE) ★                    │    │
//! │  │                                                             │    │
//! │  │   ┌─────────┐  ┌─────────┐  ┌────────────┐  ┌──────────┐    │    │
//! │  │   │  types  │  │  money  │  │ validation │  │ reports  │    │    │
//! │  │   │ Product │  │  Money  │  │   rules    │  │ low stock│    │    │
//! │  │   │  Sale   │  │  cents  │  │   checks   │  │  profit  │    │    │
//! │  │   └─────────┘  └─────────┘  └────────────┘  └──────────┘    │    │
//! │  │                                                             │    │
//! │  │   NO I/O • NO FILE SYSTEM • NO NETWORK • PURE FUNCTIONS     │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, EnrichedSale, input DTOs)
//! - [`money`] - Money type with integer-cents arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`reports`] - Read-side report computations
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic, no side effects
//! 2. **No I/O**: document persistence lives in brew-store, never here
//! 3. **Integer Money**: all monetary arithmetic on cents (i64)
//! 4. **Explicit Errors**: typed errors, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock threshold below which a product is flagged as low stock.
///
/// ## Business Reason
/// Gives the café a reorder signal before the shelf is empty. A display
/// classification only - never persisted.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Estimated unit cost as a fraction of list price, in basis points
/// (7000 = 70%).
///
/// ## Business Reason
/// The tracker does not record purchase costs, so profit reports estimate
/// cost of goods at 70% of list price.
pub const ESTIMATED_COST_BPS: u32 = 7000;

/// Maximum length of free-text fields (name, category, sub-category).
///
/// ## Business Reason
/// Keeps the document and the UI grid sane; nobody needs a 10 KB name.
pub const MAX_TEXT_LENGTH: usize = 200;
