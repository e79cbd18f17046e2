//! JSON file vendor source

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{SharedError, SharedResult, Vendor};
use tokio::fs;
use tracing::debug;

use crate::core::parse_dataset;
use crate::traits::VendorSource;

/// Reads a JSON array of vendors from disk on every load
pub struct FileVendorSource {
    path: PathBuf,
}

impl FileVendorSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl VendorSource for FileVendorSource {
    async fn load_vendors(&self) -> SharedResult<Vec<Vendor>> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => SharedError::SourceUnavailable {
                message: format!("no dataset at {}", self.path.display()),
            },
            _ => SharedError::DatasetRead {
                path: self.path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let vendors = parse_dataset(&content)?;
        debug!(path = %self.path.display(), vendors = vendors.len(), "📄 Read vendor dataset");
        Ok(vendors)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
