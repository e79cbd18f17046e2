//! Test fixtures and data for directory tests

#![allow(dead_code)]

use chrono::NaiveDate;
use shared::{Vendor, VendorId, VerificationStatus};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const DEBOUNCE_MS: u64 = 1000;

    pub fn vendor(id: &str, name: &str, industry: &str, status: VerificationStatus) -> Vendor {
        Vendor {
            id: VendorId::new(id),
            company_name: name.to_string(),
            industry: industry.to_string(),
            location: "Minneapolis, MN".to_string(),
            verification_status: status,
            date_added: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            logo_url: None,
        }
    }

    /// The two-vendor collection used in the directory's documented examples
    pub fn acme_and_beta() -> Vec<Vendor> {
        vec![
            Self::vendor("1", "Acme Corp", "Logistics", VerificationStatus::Verified),
            Self::vendor("2", "Beta LLC", "Finance", VerificationStatus::Pending),
        ]
    }

    /// A larger collection with repeated industries and mixed statuses
    pub fn mixed_directory() -> Vec<Vendor> {
        vec![
            Self::vendor("1", "Acme Corp", "Logistics", VerificationStatus::Verified),
            Self::vendor("2", "Beta LLC", "Finance", VerificationStatus::Pending),
            Self::vendor("3", "Acme Capital", "Finance", VerificationStatus::Verified),
            Self::vendor("4", "Cobalt Freight", "Logistics", VerificationStatus::Pending),
            Self::vendor("5", "Delta Clinics", "Healthcare", VerificationStatus::Verified),
            Self::vendor("6", "acme health", "Healthcare", VerificationStatus::Pending),
        ]
    }

    pub fn names(vendors: &[Vendor]) -> Vec<String> {
        vendors.iter().map(|v| v.company_name.clone()).collect()
    }
}
