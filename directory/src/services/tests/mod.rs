//! Service-specific tests
//!
//! Each vendor source has its own test file; shared dataset fixtures live here.


pub mod fixtures {
    /// A small valid dataset in the on-disk JSON shape
    pub const VALID_DATASET: &str = r#"[
        {"id": "a", "companyName": "Acme Corp", "industry": "Logistics",
         "location": "Austin, TX", "verificationStatus": "verified", "dateAdded": "2024-01-15"},
        {"id": "b", "companyName": "Beta LLC", "industry": "Finance",
         "location": "Boston, MA", "verificationStatus": "pending", "dateAdded": "2024-02-20"}
    ]"#;

    /// Two records sharing the id "a"
    pub const DUPLICATE_DATASET: &str = r#"[
        {"id": "a", "companyName": "Acme Corp", "industry": "Logistics",
         "location": "Austin, TX", "verificationStatus": "verified", "dateAdded": "2024-01-15"},
        {"id": "a", "companyName": "Acme Copy", "industry": "Logistics",
         "location": "Austin, TX", "verificationStatus": "pending", "dateAdded": "2024-01-16"}
    ]"#;
}
