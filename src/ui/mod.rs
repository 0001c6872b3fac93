//! User interface module - terminal output for the `app-meta` binary.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Printing reports and check results

use console::style;

use crate::error::MetaError;
use crate::metadata::Metadata;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_success, display_warning, format_field, format_rows,
    report_rows,
};

/// Prints every set field followed by the runtime environment.
pub fn print_report(meta: &Metadata) {
    let title = match (meta.title().is_empty(), meta.name().is_empty()) {
        (false, _) => meta.title(),
        (true, false) => meta.name(),
        (true, true) => "Application metadata",
    };
    println!("{}", style(title).bold());
    println!("{}", format_rows(&report_rows(meta)));

    for warning in meta.warnings() {
        display_warning(warning);
    }
}

/// Prints the outcome of validating every field.
///
/// # Returns
/// `true` if no field failed validation
pub fn print_check_results(errors: &[MetaError], meta: Option<&Metadata>) -> bool {
    for error in errors {
        display_error(&error.to_string());
    }

    if let Some(meta) = meta {
        for warning in meta.warnings() {
            display_warning(warning);
        }
    }

    if errors.is_empty() {
        display_success("All metadata fields are valid");
        true
    } else {
        display_status(&format!("{} invalid field(s)", errors.len()));
        false
    }
}
