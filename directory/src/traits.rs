//! Service trait definitions for dependency injection
//!
//! Vendor loading is abstracted behind a trait so the controller can be
//! driven by the bundled dataset, a file, or a mock in tests.

use async_trait::async_trait;
use shared::{SharedResult, Vendor};

/// Source of the vendor collection
#[mockall::automock]
#[async_trait]
pub trait VendorSource: Send + Sync {
    /// Load the full collection. Called once at startup and on every reload.
    ///
    /// Return `SharedError::SourceUnavailable` when the backing store cannot
    /// be reached at all, and `DatasetRead`/`DatasetParse` when it was reached
    /// but its content could not be used.
    async fn load_vendors(&self) -> SharedResult<Vec<Vendor>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}
