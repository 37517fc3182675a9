//! Service implementations over the document store.
//!
//! One service struct per concern, reachable from the accessor methods on
//! [`Store`](crate::store::Store):
//!
//! - [`product::ProductService`] - product CRUD
//! - [`sale::SaleService`] - sale recording/editing with stock consistency
//! - [`stock::StockService`] - restocks and corrections

pub mod product;
pub mod sale;
pub mod stock;
