//! Vendor directory library
//!
//! A searchable, filterable listing of business-partner records. The pure
//! filter engine and directory state live in [`core`]; [`controller`] wraps
//! them in a tokio task that debounces search input and publishes views to
//! rendering collaborators.

pub mod commands;
pub mod controller;
pub mod core;
pub mod error;
pub mod render;
pub mod services;
pub mod traits;

// Re-export main types
pub use commands::CliCommand;
pub use controller::{DirectoryCommand, DirectoryController, DirectoryHandle};
pub use error::{DirectoryError, DirectoryResult};

// Re-export trait definitions
pub use traits::{MockVendorSource, VendorSource};

// Re-export service implementations
pub use services::{BundledVendorSource, FileVendorSource};
