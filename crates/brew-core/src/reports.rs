//! # Reports Module
//!
//! Pure read-side computations over the product and sale collections:
//! today's takings, low-stock alerts, inventory value, and per-product
//! sales/profit summaries.
//!
//! Nothing here mutates or persists anything. Callers hand in slices of the
//! current document and get plain values back.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, Sale, StockLevel};
use crate::{ESTIMATED_COST_BPS, LOW_STOCK_THRESHOLD};

// =============================================================================
// Dashboard Figures
// =============================================================================

/// Sums the totals of all sales recorded on the given calendar date
/// (`YYYY-MM-DD`).
pub fn todays_total(sales: &[Sale], date: &str) -> Money {
    sales
        .iter()
        .filter(|sale| sale.date == date)
        .map(|sale| sale.total)
        .sum()
}

/// Products below the low-stock threshold, out-of-stock items included.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.quantity < LOW_STOCK_THRESHOLD)
        .collect()
}

/// Total value of stock on hand across all products (price × quantity).
pub fn inventory_value(products: &[Product]) -> Money {
    products.iter().map(Product::inventory_value).sum()
}

// =============================================================================
// Per-Product Sales Summary
// =============================================================================

/// Aggregated sales figures for one product.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSalesSummary {
    pub product_id: String,
    pub name: String,

    /// Current stock level.
    pub current_stock: i64,

    /// Reconstructed opening stock: current quantity plus everything sold.
    pub initial_stock: i64,

    /// Units sold across all recorded sales.
    pub total_sold: i64,

    /// Revenue across all recorded sales of this product.
    pub total_sales_value: Money,

    /// Estimated profit: recorded revenue minus estimated cost of goods,
    /// where unit cost is modeled as a fixed fraction of list price.
    pub estimated_profit: Money,

    /// Stock classification for display.
    pub stock_level: StockLevel,
}

/// Builds the per-product sales summary table.
///
/// Sales referencing deleted products contribute to no row; they still count
/// in [`overall_summary`] revenue via their product while it exists.
pub fn sales_by_product(products: &[Product], sales: &[Sale]) -> Vec<ProductSalesSummary> {
    products
        .iter()
        .map(|product| {
            let unit_cost = product.price.scale_bps(ESTIMATED_COST_BPS);

            let mut total_sold = 0;
            let mut total_sales_value = Money::zero();
            let mut estimated_profit = Money::zero();

            for sale in sales.iter().filter(|s| s.product_id == product.id) {
                total_sold += sale.quantity;
                total_sales_value += sale.total;
                estimated_profit += sale.total - unit_cost.multiply_quantity(sale.quantity);
            }

            ProductSalesSummary {
                product_id: product.id.clone(),
                name: product.name.clone(),
                current_stock: product.quantity,
                initial_stock: product.quantity + total_sold,
                total_sold,
                total_sales_value,
                estimated_profit,
                stock_level: product.stock_level(),
            }
        })
        .collect()
}

// =============================================================================
// Overall Summary
// =============================================================================

/// Headline figures across the whole catalog.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Revenue across all products.
    pub total_sales_value: Money,

    /// Estimated profit across all products.
    pub total_profit: Money,

    /// Number of distinct products with at least one sale.
    pub products_sold: usize,

    /// Number of products currently below the low-stock threshold.
    pub low_stock_count: usize,

    /// Value of stock currently on hand.
    pub inventory_value: Money,
}

/// Computes the headline report figures.
pub fn overall_summary(products: &[Product], sales: &[Sale]) -> ReportSummary {
    let rows = sales_by_product(products, sales);

    ReportSummary {
        total_sales_value: rows.iter().map(|r| r.total_sales_value).sum(),
        total_profit: rows.iter().map(|r| r.estimated_profit).sum(),
        products_sold: rows.iter().filter(|r| r.total_sold > 0).count(),
        low_stock_count: low_stock(products).len(),
        inventory_value: inventory_value(products),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
