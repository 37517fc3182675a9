//! # Store
//!
//! Durable holder of the inventory document, shared by all services.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Mutation Discipline                             │
//! │                                                                     │
//! │  service.op()                                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  lock document (single async Mutex - writes are serialized)         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  clone → apply business mutation to the draft                       │
//! │       │                                                             │
//! │       ├── rule rejected → return error, memory and disk untouched   │
//! │       ▼                                                             │
//! │  flush draft: write sibling temp file, rename over the document     │
//! │       │                                                             │
//! │       ├── flush failed → return Persistence, memory untouched       │
//! │       ▼                                                             │
//! │  commit draft to memory, return result                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole document is always written back whole; a reader of the file on
//! disk never observes a half-applied operation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use brew_core::CoreError;

use crate::document::InventoryDocument;
use crate::error::{StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::service::product::ProductService;
use crate::service::sale::SaleService;
use crate::service::stock::StockService;

// =============================================================================
// Store
// =============================================================================

/// Handle to the persisted inventory document.
///
/// Cheap to clone; all clones share the same in-memory document and flush to
/// the same file.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::open("./data/database.json").await?;
///
/// let product = store.products().create(input).await?;
/// let sales = store.sales().list().await;
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    path: PathBuf,
    doc: Mutex<InventoryDocument>,
    ids: IdGenerator,
}

impl Store {
    /// Opens the store at the given path.
    ///
    /// ## Behavior
    /// - Missing file: starts from an empty document (and writes it out, so
    ///   the file exists from first open onward). Never an error.
    /// - Present but unreadable file: `Persistence`.
    /// - Present but invalid JSON: `Corrupt` - the store refuses to open
    ///   rather than silently discarding data.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        info!(path = %path.display(), "Opening inventory store");

        let doc = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StoreError::Corrupt)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No document on disk, starting empty");
                InventoryDocument::default()
            }
            Err(err) => return Err(StoreError::Persistence(err)),
        };

        let store = Store {
            inner: Arc::new(StoreInner {
                path,
                doc: Mutex::new(doc),
                ids: IdGenerator::new(),
            }),
        };

        // Materialize the empty document on first open
        {
            let guard = store.inner.doc.lock().await;
            store.flush(&guard).await?;
        }

        Ok(store)
    }

    // -------------------------------------------------------------------------
    // Service Accessors
    // -------------------------------------------------------------------------

    /// Product create/update/delete/list operations.
    pub fn products(&self) -> ProductService {
        ProductService::new(self.clone())
    }

    /// Sale recording, editing, deletion, and enriched listing.
    pub fn sales(&self) -> SaleService {
        SaleService::new(self.clone())
    }

    /// Stock adjustments outside the sale flow.
    pub fn stock(&self) -> StockService {
        StockService::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Document Access (services only)
    // -------------------------------------------------------------------------

    /// Runs a read-only closure against the current document.
    pub(crate) async fn read<T>(&self, f: impl FnOnce(&InventoryDocument) -> T) -> T {
        let guard = self.inner.doc.lock().await;
        f(&guard)
    }

    /// Runs a mutation against a draft of the document, flushes the draft to
    /// disk, and commits it to memory only if the flush succeeded.
    pub(crate) async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut InventoryDocument) -> Result<T, CoreError>,
    ) -> StoreResult<T> {
        let mut guard = self.inner.doc.lock().await;

        let mut draft = guard.clone();
        let result = f(&mut draft)?;

        self.flush(&draft).await?;
        *guard = draft;

        Ok(result)
    }

    /// Fresh time-based id for a new entity.
    pub(crate) fn next_id(&self) -> String {
        self.inner.ids.next_id()
    }

    /// Writes the document to disk whole: serialize, write a sibling temp
    /// file, rename it over the document.
    async fn flush(&self, doc: &InventoryDocument) -> StoreResult<()> {
        let path = &self.inner.path;

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(StoreError::Persistence)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(doc)
            .map_err(|e| StoreError::Persistence(e.into()))?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(StoreError::Persistence)?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(StoreError::Persistence)?;

        debug!(bytes = bytes.len(), "Flushed document");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------

    /// Path of the document file.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Counts for the health/status surface.
    pub async fn status(&self) -> StoreStatus {
        self.read(|doc| StoreStatus {
            products: doc.products.len(),
            sales: doc.sales.len(),
            path: self.inner.path.display().to_string(),
        })
        .await
    }
}

/// Snapshot of store health for the status surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    pub products: usize,
    pub sales: usize,
    pub path: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
