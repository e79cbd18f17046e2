//! Vendor filter engine
//!
//! Pure predicates over an in-memory vendor collection. No I/O, no state.

use shared::{FilterCriteria, IndustryFilter, Vendor};

/// Whether a single vendor satisfies every constraint in `criteria`
pub fn matches(vendor: &Vendor, criteria: &FilterCriteria) -> bool {
    let term = criteria.search_term().to_lowercase();
    matches_lowered(vendor, criteria, &term)
}

/// Matching subset of `vendors`, in input order
pub fn filter_vendors(vendors: &[Vendor], criteria: &FilterCriteria) -> Vec<Vendor> {
    // Lowercase the term once rather than per vendor
    let term = criteria.search_term().to_lowercase();
    vendors
        .iter()
        .filter(|vendor| matches_lowered(vendor, criteria, &term))
        .cloned()
        .collect()
}

fn matches_lowered(vendor: &Vendor, criteria: &FilterCriteria, term: &str) -> bool {
    let matches_search = term.is_empty() || vendor.company_name.to_lowercase().contains(term);
    let matches_industry = criteria.industry().admits(&vendor.industry);
    let matches_status = criteria
        .required_status()
        .map_or(true, |status| vendor.verification_status == status);

    matches_search && matches_industry && matches_status
}

/// Selectable industry options: `All`, then each distinct industry in first-seen order
pub fn industry_options(vendors: &[Vendor]) -> Vec<IndustryFilter> {
    let mut options = vec![IndustryFilter::All];
    for vendor in vendors {
        let option = IndustryFilter::exact(vendor.industry.clone());
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}
