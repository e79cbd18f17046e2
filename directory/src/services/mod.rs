//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod bundled_source;
pub mod file_source;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use bundled_source::BundledVendorSource;
pub use file_source::FileVendorSource;
