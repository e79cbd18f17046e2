//! Bundled vendor dataset
//!
//! Serves the sample dataset compiled into the binary, optionally after a
//! simulated network delay so the loading phase is observable.

use std::time::Duration;

use async_trait::async_trait;
use shared::{SharedResult, Vendor};

use crate::core::parse_dataset;
use crate::traits::VendorSource;

const BUNDLED_DATASET: &str = include_str!("../../data/vendors.json");

pub struct BundledVendorSource {
    /// Simulated latency before the dataset is returned
    delay: Duration,
}

impl BundledVendorSource {
    /// Serve the dataset immediately
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for BundledVendorSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VendorSource for BundledVendorSource {
    async fn load_vendors(&self) -> SharedResult<Vec<Vendor>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        parse_dataset(BUNDLED_DATASET)
    }

    fn describe(&self) -> String {
        format!("bundled dataset (delay {}ms)", self.delay.as_millis())
    }
}
