//! # brew-store: Document Store + Services for Brew POS
//!
//! This crate owns the persisted inventory document and every state
//! transition on it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Brew POS Data Flow                            │
//! │                                                                     │
//! │  Caller (API surface / seed binary / tests)                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                  brew-store (THIS CRATE)                    │    │
//! │  │                                                             │    │
//! │  │   ┌─────────────┐   ┌───────────────┐   ┌──────────────┐    │    │
//! │  │   │    Store    │   │   Services    │   │  Document    │    │    │
//! │  │   │ (store.rs)  │   │ (service/*)   │   │(document.rs) │    │    │
//! │  │   │             │   │               │   │              │    │    │
//! │  │   │ async Mutex │◄──│ ProductSvc    │   │ products[]   │    │    │
//! │  │   │ clone-flush │   │ SaleSvc       │   │ sales[]      │    │    │
//! │  │   │ -commit     │   │ StockSvc      │   │              │    │    │
//! │  │   └─────────────┘   └───────────────┘   └──────────────┘    │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ./data/database.json  (single JSON file, always written whole)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - the mutex-guarded document holder and flush discipline
//! - [`document`] - the persisted document layout
//! - [`service`] - Product/Sale/Stock service implementations
//! - [`ids`] - time-based id generation
//! - [`error`] - store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brew_store::Store;
//!
//! let store = Store::open("./data/database.json").await?;
//! let product = store.products().create(input).await?;
//! let sale = store.sales().create(new_sale).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod ids;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use document::InventoryDocument;
pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreStatus};

pub use service::product::ProductService;
pub use service::sale::SaleService;
pub use service::stock::StockService;
