//! Pure formatting functions for UI output.
//!
//! Everything that turns a [`Metadata`] snapshot into text lives here so it
//! can be tested without a terminal. The `display_*` helpers are the only
//! functions that print.

use chrono::SecondsFormat;
use console::style;
use url::Url;

use crate::field::Field;
use crate::metadata::Metadata;
use crate::platform;
use crate::warning::MetadataWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a metadata warning to the user.
pub fn display_warning(warning: &MetadataWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

fn url_text(url: Option<&Url>) -> String {
    url.map(|u| u.to_string()).unwrap_or_default()
}

/// Text form of one field's parsed value, or "" when unset.
///
/// Dates are rendered as RFC 3339 in UTC; the author as `Name <email>`.
/// URLs are printed normalized, so a bare host gains a trailing `/`.
pub fn format_field(meta: &Metadata, field: Field) -> String {
    match field {
        Field::Author => meta.author_info().to_string(),
        Field::AuthorUrl => url_text(meta.author_url()),
        Field::Copyright => meta.copyright().to_string(),
        Field::Date => meta
            .date()
            .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default(),
        Field::Desc => meta.description().to_string(),
        Field::Dev => meta.development().to_string(),
        Field::Docs => url_text(meta.docs()),
        Field::License => meta.license().to_string(),
        Field::LicenseUrl => url_text(meta.license_url()),
        Field::Name => meta.name().to_string(),
        Field::Note => meta.note().to_string(),
        Field::Sha => meta.sha().to_string(),
        Field::Src => url_text(meta.source()),
        Field::Title => meta.title().to_string(),
        Field::Url => url_text(meta.url()),
        Field::Version => meta.version().to_string(),
    }
}

/// Label/value rows for a full report: every set field, then the derived
/// version components and the runtime environment.
pub fn report_rows(meta: &Metadata) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = Field::ALL
        .iter()
        .map(|&field| (field.name().to_string(), format_field(meta, field)))
        .filter(|(_, value)| !value.is_empty())
        .collect();

    if !meta.short_sha().is_empty() {
        rows.push(("short_sha".to_string(), meta.short_sha().to_string()));
    }
    if !meta.semver().is_empty() {
        let semver = meta.semver();
        rows.push(("version_major".to_string(), semver.major.clone()));
        rows.push(("version_minor".to_string(), semver.minor.clone()));
        rows.push(("version_patch".to_string(), semver.patch.clone()));
        if !semver.pre_release.is_empty() {
            rows.push(("version_pre_release".to_string(), semver.pre_release.clone()));
        }
        if !semver.build.is_empty() {
            rows.push(("version_build".to_string(), semver.build.clone()));
        }
    }

    rows.push(("arch".to_string(), platform::arch().to_string()));
    rows.push(("os".to_string(), platform::os().to_string()));
    rows.push(("rustc".to_string(), platform::rustc_version().to_string()));
    rows
}

/// Lay out rows as `label  value` with labels padded to a common width.
pub fn format_rows(rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
