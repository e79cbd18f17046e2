//! Core shared types and identifiers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Display value of the "every industry" filter option
pub const ALL_INDUSTRIES: &str = "all industries";

/// Stable identifier of a vendor record
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(String);

impl VendorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a directory controller session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Verification state of a vendor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Pending,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationStatus::Verified => write!(f, "verified"),
            VerificationStatus::Pending => write!(f, "pending"),
        }
    }
}

/// A single directory entry. Never mutated after loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub company_name: String,
    pub industry: String,
    pub location: String,
    pub verification_status: VerificationStatus,
    #[serde(with = "date_added")]
    pub date_added: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// `dateAdded` wire format.
///
/// Reads a calendar date (`2024-01-15`) or a timestamp with or without an
/// offset (`2024-01-15T10:30:00Z`). Timestamps keep the date as written in
/// their own offset. Always writes `YYYY-MM-DD`.
pub mod date_added {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
            .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|dt| dt.date()))
    }

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("dateAdded must be a date or RFC 3339 timestamp, got {raw:?}"))
        })
    }
}

impl Vendor {
    /// Badge text shown when the vendor has no logo.
    ///
    /// First character of every space-separated word, uppercased.
    pub fn initials(&self) -> String {
        self.company_name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }
}

/// Industry constraint of the filter criteria
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IndustryFilter {
    #[default]
    All,
    Exact(String),
}

impl IndustryFilter {
    pub fn exact(industry: impl Into<String>) -> Self {
        IndustryFilter::Exact(industry.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, IndustryFilter::All)
    }

    /// Exact, case-sensitive comparison against a vendor's industry
    pub fn admits(&self, industry: &str) -> bool {
        match self {
            IndustryFilter::All => true,
            IndustryFilter::Exact(selected) => selected == industry,
        }
    }
}

impl fmt::Display for IndustryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndustryFilter::All => f.write_str(ALL_INDUSTRIES),
            IndustryFilter::Exact(industry) => f.write_str(industry),
        }
    }
}

impl From<String> for IndustryFilter {
    fn from(value: String) -> Self {
        if value == ALL_INDUSTRIES {
            IndustryFilter::All
        } else {
            IndustryFilter::Exact(value)
        }
    }
}

impl From<&str> for IndustryFilter {
    fn from(value: &str) -> Self {
        IndustryFilter::from(value.to_string())
    }
}

impl From<IndustryFilter> for String {
    fn from(filter: IndustryFilter) -> Self {
        filter.to_string()
    }
}

impl FromStr for IndustryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IndustryFilter::from(s))
    }
}

/// User-chosen constraints narrowing the displayed vendor collection.
///
/// `verified_only` and `pending_only` are kept mutually exclusive by the
/// setters, which is why the fields are not public.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    raw_input: String,
    committed_search: String,
    industry: IndustryFilter,
    verified_only: bool,
    pending_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria with an already-settled search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.raw_input = term.clone();
        self.committed_search = term;
        self
    }

    pub fn with_industry(mut self, industry: impl Into<IndustryFilter>) -> Self {
        self.industry = industry.into();
        self
    }

    pub fn with_verified_only(mut self, value: bool) -> Self {
        self.set_verified_only(value);
        self
    }

    pub fn with_pending_only(mut self, value: bool) -> Self {
        self.set_pending_only(value);
        self
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn search_term(&self) -> &str {
        &self.committed_search
    }

    pub fn industry(&self) -> &IndustryFilter {
        &self.industry
    }

    pub fn verified_only(&self) -> bool {
        self.verified_only
    }

    pub fn pending_only(&self) -> bool {
        self.pending_only
    }

    /// Status a vendor must have to pass, if any
    pub fn required_status(&self) -> Option<VerificationStatus> {
        if self.verified_only {
            Some(VerificationStatus::Verified)
        } else if self.pending_only {
            Some(VerificationStatus::Pending)
        } else {
            None
        }
    }

    /// Returns true when the raw input actually changed
    pub fn set_raw_input(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.raw_input == value {
            return false;
        }
        self.raw_input = value;
        true
    }

    /// Promote the raw input to the committed search term.
    /// Returns true when the committed term changed.
    pub fn commit_search(&mut self) -> bool {
        if self.committed_search == self.raw_input {
            return false;
        }
        self.committed_search = self.raw_input.clone();
        true
    }

    pub fn select_industry(&mut self, industry: IndustryFilter) -> bool {
        if self.industry == industry {
            return false;
        }
        self.industry = industry;
        true
    }

    /// Sets the verified flag and always clears the pending flag
    pub fn set_verified_only(&mut self, value: bool) -> bool {
        let changed = self.verified_only != value || self.pending_only;
        self.verified_only = value;
        self.pending_only = false;
        changed
    }

    /// Sets the pending flag and always clears the verified flag
    pub fn set_pending_only(&mut self, value: bool) -> bool {
        let changed = self.pending_only != value || self.verified_only;
        self.pending_only = value;
        self.verified_only = false;
        changed
    }

    /// Any constraint set, counting unsettled search input
    pub fn has_active_filters(&self) -> bool {
        !self.raw_input.is_empty() || !self.industry.is_all() || self.verified_only || self.pending_only
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
