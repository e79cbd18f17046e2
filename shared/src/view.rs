//! View model handed to rendering collaborators

use serde::Serialize;
use std::sync::Arc;

use crate::types::{FilterCriteria, IndustryFilter, Vendor};

/// Snapshot of the directory as a renderer sees it
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView {
    pub filtered_vendors: Arc<[Vendor]>,
    pub all_vendors: Arc<[Vendor]>,
    pub criteria: FilterCriteria,
    pub has_active_filters: bool,
    pub loading: bool,
    pub industry_options: Vec<IndustryFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl DirectoryView {
    /// What a controller publishes before anything has loaded
    pub fn initial() -> Self {
        Self {
            filtered_vendors: Arc::from(Vec::new()),
            all_vendors: Arc::from(Vec::new()),
            criteria: FilterCriteria::default(),
            has_active_filters: false,
            loading: true,
            industry_options: vec![IndustryFilter::All],
            last_error: None,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} vendors",
            self.filtered_vendors.len(),
            self.all_vendors.len()
        )
    }

    /// Nothing to list and nothing in flight
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.filtered_vendors.is_empty()
    }
}
