//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod dataset;
pub mod debounce;
pub mod filter;
pub mod state;

// Re-export commonly used types
pub use dataset::{ensure_unique_ids, parse_dataset};
pub use debounce::DebounceTimer;
pub use filter::{filter_vendors, industry_options, matches};
pub use state::DirectoryState;
