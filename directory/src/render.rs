//! Plain-text rendering of directory views
//!
//! Used by the binary to show what a browser would: a filter bar summary,
//! a grid of vendor cards, an empty state, or a loading line.

use std::fmt::Write;

use shared::{DirectoryView, Vendor, VerificationStatus};

pub const EMPTY_TITLE: &str = "No vendors found";
pub const EMPTY_DESCRIPTION: &str = "Try adjusting your search or filters.";
pub const LOADING_LINE: &str = "⏳ Loading vendors...";

/// One vendor card
pub fn render_card(vendor: &Vendor) -> String {
    let avatar = match &vendor.logo_url {
        Some(url) => format!("[logo: {url}]"),
        None => format!("[{}]", vendor.initials()),
    };
    let badge = match vendor.verification_status {
        VerificationStatus::Verified => "✔ Verified",
        VerificationStatus::Pending => "⏱ Pending",
    };

    format!(
        "{avatar} {name} ({industry}) {badge}\n    📍 {location} · added {date}",
        name = vendor.company_name,
        industry = vendor.industry,
        location = vendor.location,
        date = vendor.date_added.format("%b %-d, %Y"),
    )
}

/// The filter bar: criteria, options and the result count
pub fn render_filter_bar(view: &DirectoryView) -> String {
    let criteria = &view.criteria;
    let options: Vec<String> = view.industry_options.iter().map(ToString::to_string).collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Search: \"{}\"  Industry: {}  Verified: {}  Pending: {}",
        criteria.raw_input(),
        criteria.industry(),
        on_off(criteria.verified_only()),
        on_off(criteria.pending_only()),
    );
    let _ = writeln!(out, "Industries: {}", options.join(" | "));
    let _ = write!(out, "{}", view.summary());
    if view.has_active_filters {
        let _ = write!(out, "  [clear filters available]");
    }
    out
}

/// Full view: filter bar followed by cards, empty state or loading line
pub fn render_view(view: &DirectoryView) -> String {
    let mut out = render_filter_bar(view);
    out.push('\n');

    if let Some(error) = &view.last_error {
        let _ = writeln!(out, "⚠️ Last load failed: {error}");
    }

    if view.is_empty_state() {
        let _ = writeln!(out, "{EMPTY_TITLE}\n{EMPTY_DESCRIPTION}");
    } else if view.loading {
        out.push_str(LOADING_LINE);
        out.push('\n');
    } else {
        for vendor in view.filtered_vendors.iter() {
            out.push_str(&render_card(vendor));
            out.push('\n');
        }
    }
    out
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
