//! # Validation Module
//!
//! Input validation for Brew POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Deserialization (serde)                                   │
//! │  ├── Type checks: a non-numeric price or quantity never parses      │
//! │  └── Money rejects non-finite numbers outright                      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  ├── Required text fields are non-empty after trimming              │
//! │  ├── Price strictly positive (creation AND update)                  │
//! │  └── Quantities in range                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::validation::validate_product_input;
//! use brew_core::{Money, ProductInput};
//!
//! let input = ProductInput {
//!     name: "Green Tea".into(),
//!     description: None,
//!     category: "Beverages".into(),
//!     sub_category: "Hot Drinks".into(),
//!     price: Money::from_cents(500),
//!     quantity: 20,
//!     image_url: None,
//! };
//! assert!(validate_product_input(&input).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::{NewSale, ProductInput, SaleUpdate, StockAdjustment};
use crate::MAX_TEXT_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required text field (name, category, sub-category).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `MAX_TEXT_LENGTH` characters
pub fn validate_required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_TEXT_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LENGTH,
        });
    }

    Ok(())
}

/// Validates a product id reference supplied by a caller.
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a product list price.
///
/// ## Rules
/// - Must be strictly positive. A zero price is rejected with an explicit
///   error (not as a missing field), and the rule applies on update as well
///   as creation.
pub fn validate_price(price: crate::Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a product stock quantity.
///
/// ## Rules
/// - Must not be negative. Zero is allowed: a product may be registered
///   (or updated) with nothing on the shelf.
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a sale or adjustment quantity.
///
/// ## Rules
/// - Must be strictly positive (selling or adjusting by zero or a negative
///   amount is meaningless)
pub fn validate_positive_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a sale total.
///
/// The total is caller-supplied (it may include ad hoc discounts), but a
/// negative recorded revenue is never valid.
pub fn validate_sale_total(total: crate::Money) -> ValidationResult<()> {
    if total.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "total".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// DTO Validators
// =============================================================================

/// Validates a product create/update body.
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<()> {
    validate_required_text("name", &input.name)?;
    validate_required_text("category", &input.category)?;
    validate_required_text("subCategory", &input.sub_category)?;
    validate_price(input.price)?;
    validate_stock_quantity(input.quantity)?;
    Ok(())
}

/// Validates a sale creation body.
pub fn validate_new_sale(sale: &NewSale) -> ValidationResult<()> {
    validate_id("productId", &sale.product_id)?;
    validate_positive_quantity(sale.quantity)?;
    validate_sale_total(sale.total)?;
    Ok(())
}

/// Validates a sale edit body.
pub fn validate_sale_update(update: &SaleUpdate) -> ValidationResult<()> {
    validate_positive_quantity(update.quantity)?;
    validate_sale_total(update.total)?;
    Ok(())
}

/// Validates a stock adjustment body.
pub fn validate_stock_adjustment(adjustment: &StockAdjustment) -> ValidationResult<()> {
    validate_id("productId", &adjustment.product_id)?;
    validate_positive_quantity(adjustment.quantity)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AdjustmentType;
    use crate::Money;

    fn input() -> ProductInput {
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

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("name", "Green Tea").is_ok());
        assert!(validate_required_text("name", "").is_err());
        assert!(validate_required_text("name", "   ").is_err());
        assert!(validate_required_text("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_stock_quantity_allows_zero() {
        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(50).is_ok());
        assert!(validate_stock_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_positive_quantity() {
        assert!(validate_positive_quantity(1).is_ok());
        assert!(validate_positive_quantity(0).is_err());
        assert!(validate_positive_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_product_input() {
        assert!(validate_product_input(&input()).is_ok());

        let mut bad = input();
        bad.category = String::new();
        assert!(validate_product_input(&bad).is_err());

        let mut bad = input();
        bad.price = Money::zero();
        assert!(validate_product_input(&bad).is_err());

        let mut zero_stock = input();
        zero_stock.quantity = 0;
        assert!(validate_product_input(&zero_stock).is_ok());
    }

    #[test]
    fn test_validate_new_sale() {
        let sale = NewSale {
            product_id: "1700000000000".to_string(),
            quantity: 3,
            total: Money::from_cents(1500),
        };
        assert!(validate_new_sale(&sale).is_ok());

        let mut bad = sale.clone();
        bad.product_id = String::new();
        assert!(validate_new_sale(&bad).is_err());

        let mut bad = sale.clone();
        bad.quantity = 0;
        assert!(validate_new_sale(&bad).is_err());

        let mut bad = sale;
        bad.total = Money::from_cents(-1);
        assert!(validate_new_sale(&bad).is_err());
    }

    #[test]
    fn test_validate_stock_adjustment() {
        let adj = StockAdjustment {
            product_id: "1700000000000".to_string(),
            adjustment_type: AdjustmentType::Deduct,
            quantity: 5,
        };
        assert!(validate_stock_adjustment(&adj).is_ok());

        let mut bad = adj;
        bad.quantity = -5;
        assert!(validate_stock_adjustment(&bad).is_err());
    }
}
