use url::{Position, Url};

use crate::error::{MetaError, Result};
use crate::field::Field;

/// Parse an absolute URL. Empty input yields `None`.
///
/// A scheme, a `//` authority and a non-empty host are all required, so bare
/// domains such as `example.com`, `http:example.com` and host-less URLs such
/// as `mailto:` links are rejected. Whitespace and control characters are
/// never stripped.
pub fn parse_url(field: Field, value: &str) -> Result<Option<Url>> {
    if value.is_empty() {
        return Ok(None);
    }

    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(MetaError::invalid(
            field,
            value,
            "contains whitespace or control characters",
        ));
    }

    let url = Url::parse(value).map_err(|e| MetaError::invalid(field, value, e.to_string()))?;

    // Schemes are ASCII, so the parsed scheme length indexes the raw input.
    let after_scheme = value.get(url.scheme().len()..).unwrap_or_default();
    if !after_scheme.starts_with("://") {
        return Err(MetaError::invalid(field, value, "missing authority"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(MetaError::invalid(field, value, "missing host"));
    }

    Ok(Some(url))
}

/// Host and explicit port of a URL, e.g. `example.com:8080`.
pub fn authority(url: &Url) -> &str {
    &url[Position::BeforeHost..Position::AfterPort]
}
