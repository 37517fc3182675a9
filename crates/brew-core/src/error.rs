//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  brew-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  brew-store errors (separate crate)                                 │
//! │  └── StoreError       - Persistence failures + wrapped CoreError    │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → caller            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These map one-to-one onto the caller-visible error taxonomy: not-found,
/// insufficient stock, and validation failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with the given id exists.
    ///
    /// Raised by every operation that dereferences a product id: product
    /// update/delete, sale creation, sale edit (the sale's product may have
    /// been deleted since), and stock adjustment.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No sale with the given id exists.
    #[error("Sale not found: {0}")]
    SaleNotFound(String),

    /// Requested quantity exceeds available stock.
    ///
    /// ## When This Occurs
    /// - Creating a sale for more units than the product has
    /// - Raising a sale's quantity by more than the remaining stock
    ///
    /// Stock adjustments never raise this: deduction clamps at zero instead.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements, before any
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is not in the allowed set (e.g. an unknown adjustment type).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
