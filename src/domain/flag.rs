use crate::error::{MetaError, Result};
use crate::field::Field;

/// Parse a boolean flag value.
///
/// Empty means `false`. Otherwise only `true`/`false` are accepted, in any case.
pub fn parse_flag(field: Field, value: &str) -> Result<bool> {
    if value.is_empty() || value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else {
        Err(MetaError::invalid(field, value, "expected 'true' or 'false'"))
    }
}
