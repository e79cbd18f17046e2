//! Central state management for the directory
//!
//! Pure business logic with no I/O dependencies. The controller owns one
//! `DirectoryState` and drives it from user commands, load results and the
//! debounce deadline.

use std::sync::Arc;

use shared::{DirectoryView, FilterCriteria, IndustryFilter, SharedResult, Vendor, VerificationStatus};

use super::dataset::ensure_unique_ids;
use super::filter::{filter_vendors, industry_options};

/// The parts of the criteria the filtered set depends on
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterKey {
    search: String,
    industry: IndustryFilter,
    status: Option<VerificationStatus>,
}

impl FilterKey {
    fn of(criteria: &FilterCriteria) -> Self {
        Self {
            search: criteria.search_term().to_string(),
            industry: criteria.industry().clone(),
            status: criteria.required_status(),
        }
    }
}

pub struct DirectoryState {
    /// Loaded collection, shared read-only with every view
    vendors: Arc<[Vendor]>,

    /// Memoized filter output for `applied`
    filtered: Arc<[Vendor]>,

    /// Criteria the memoized output was computed for
    applied: FilterKey,

    criteria: FilterCriteria,
    industry_options: Vec<IndustryFilter>,

    /// A vendor load is in flight
    vendors_loading: bool,

    /// Raw input has not been committed yet
    search_pending: bool,

    last_error: Option<String>,

    /// Number of times the filter engine actually ran
    recompute_count: u64,
}

impl DirectoryState {
    /// Empty collection, waiting for the first load
    pub fn new() -> Self {
        let criteria = FilterCriteria::default();
        Self {
            vendors: Arc::from(Vec::new()),
            filtered: Arc::from(Vec::new()),
            applied: FilterKey::of(&criteria),
            criteria,
            industry_options: vec![IndustryFilter::All],
            vendors_loading: true,
            search_pending: false,
            last_error: None,
            recompute_count: 0,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn vendors(&self) -> &Arc<[Vendor]> {
        &self.vendors
    }

    pub fn filtered(&self) -> &Arc<[Vendor]> {
        &self.filtered
    }

    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters()
    }

    /// Advisory: a load is in flight or the search input has not settled
    pub fn loading(&self) -> bool {
        self.vendors_loading || self.search_pending
    }

    pub fn search_pending(&self) -> bool {
        self.search_pending
    }

    // ── Loading ──────────────────────────────────────────────────────────

    pub fn begin_load(&mut self) {
        self.vendors_loading = true;
    }

    /// Replace the collection. An invalid collection is treated as a failed load.
    pub fn finish_load(&mut self, vendors: Vec<Vendor>) -> SharedResult<usize> {
        if let Err(e) = ensure_unique_ids(&vendors) {
            self.fail_load(e.to_string());
            return Err(e);
        }

        let count = vendors.len();
        self.industry_options = industry_options(&vendors);
        self.vendors = Arc::from(vendors);
        self.vendors_loading = false;
        self.last_error = None;
        self.recompute();
        Ok(count)
    }

    /// Keep the previous collection and stop reporting a load in flight
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.vendors_loading = false;
        self.last_error = Some(message.into());
    }

    // ── Criteria ─────────────────────────────────────────────────────────

    /// Record a keystroke. Returns true when the raw input changed, which
    /// means the caller must restart its debounce window.
    pub fn set_search_input(&mut self, value: impl Into<String>) -> bool {
        let changed = self.criteria.set_raw_input(value);
        if changed {
            self.search_pending = true;
        }
        changed
    }

    /// Debounce settled: promote the raw input and refilter if needed
    pub fn commit_search(&mut self) -> bool {
        self.search_pending = false;
        let changed = self.criteria.commit_search();
        self.refresh();
        changed
    }

    pub fn select_industry(&mut self, industry: IndustryFilter) -> bool {
        let changed = self.criteria.select_industry(industry);
        self.refresh();
        changed
    }

    pub fn set_verified_only(&mut self, value: bool) -> bool {
        let changed = self.criteria.set_verified_only(value);
        self.refresh();
        changed
    }

    pub fn set_pending_only(&mut self, value: bool) -> bool {
        let changed = self.criteria.set_pending_only(value);
        self.refresh();
        changed
    }

    /// Reset every criterion at once and drop any unsettled input
    pub fn clear_filters(&mut self) {
        self.criteria.reset();
        self.search_pending = false;
        self.refresh();
    }

    // ── Derivation ───────────────────────────────────────────────────────

    /// Recompute only when the filter-relevant criteria moved
    fn refresh(&mut self) {
        if FilterKey::of(&self.criteria) != self.applied {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.applied = FilterKey::of(&self.criteria);
        self.filtered = Arc::from(filter_vendors(&self.vendors, &self.criteria));
        self.recompute_count += 1;
    }

    pub fn view(&self) -> DirectoryView {
        DirectoryView {
            filtered_vendors: Arc::clone(&self.filtered),
            all_vendors: Arc::clone(&self.vendors),
            criteria: self.criteria.clone(),
            has_active_filters: self.has_active_filters(),
            loading: self.loading(),
            industry_options: self.industry_options.clone(),
            last_error: self.last_error.clone(),
        }
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}
