//! Shared types for the vendor directory
//!
//! Contains the vendor record, filter criteria and view model exchanged
//! between the directory controller and its rendering collaborators, plus
//! the workspace-wide configuration, error and logging utilities.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;
pub mod view;

pub use config::DirectoryConfig;
pub use errors::*;
pub use types::*;
pub use view::DirectoryView;
