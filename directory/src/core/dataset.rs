//! Vendor dataset parsing and validation

use std::collections::HashSet;

use shared::{SharedError, SharedResult, Vendor};

/// Parse a JSON array of vendor records and validate it
pub fn parse_dataset(json: &str) -> SharedResult<Vec<Vendor>> {
    let vendors: Vec<Vendor> = serde_json::from_str(json).map_err(|e| SharedError::DatasetParse {
        message: e.to_string(),
    })?;
    ensure_unique_ids(&vendors)?;
    Ok(vendors)
}

/// Reject collections where two records share an id
pub fn ensure_unique_ids(vendors: &[Vendor]) -> SharedResult<()> {
    let mut seen = HashSet::with_capacity(vendors.len());
    for vendor in vendors {
        if !seen.insert(&vendor.id) {
            return Err(SharedError::DuplicateVendorId {
                id: vendor.id.to_string(),
            });
        }
    }
    Ok(())
}
