//! Git commit hash validation

use crate::error::{MetaError, Result};
use crate::field::Field;

/// Length of a full git SHA-1 commit hash
pub const SHA_LEN: usize = 40;

/// Length of the abbreviated commit hash
pub const SHORT_SHA_LEN: usize = 7;

/// Validate a full commit hash.
///
/// Empty input is accepted and returned as-is. Anything else must be exactly
/// 40 hex digits, in either case; the value is returned unchanged.
pub fn parse_sha(field: Field, value: &str) -> Result<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    if value.len() != SHA_LEN {
        return Err(MetaError::invalid(
            field,
            value,
            format!("expected {} characters, got {}", SHA_LEN, value.chars().count()),
        ));
    }

    if let Some(c) = value.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(MetaError::invalid(
            field,
            value,
            format!("'{}' is not a hex digit", c),
        ));
    }

    Ok(value.to_string())
}

/// The abbreviated form of a validated commit hash, or "" when unset.
pub fn short_sha(sha: &str) -> &str {
    sha.get(..SHORT_SHA_LEN).unwrap_or_default()
}

/// Like [`short_sha`], falling back to an abbreviated `default` when unset.
///
/// Defaults shorter than seven characters are returned whole.
pub fn short_sha_or<'a>(sha: &'a str, default: &'a str) -> &'a str {
    if sha.is_empty() {
        default.get(..SHORT_SHA_LEN).unwrap_or(default)
    } else {
        short_sha(sha)
    }
}
