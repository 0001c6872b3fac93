//! Author string handling
//!
//! Splits strings like `Jane Doe <jdoe@example.com>` into a display name and
//! an email address. Parsing never fails: anything that isn't recognizably an
//! address is kept whole as the display name.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*<([^<>]*)>$").expect("bracketed address pattern"));

/// Name and email of the application author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Author {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Parse a free-form author string
    ///
    /// Accepts a bare name, a bare address, `<address>` or `Name <address>`.
    /// Bracketed content that isn't a valid address leaves the whole input as
    /// the name.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            return Author::default();
        }

        let trimmed = value.trim();

        if let Some(captures) = BRACKETED.captures(trimmed) {
            let display = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            let address = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

            if is_valid_address(address) {
                return Author::new(unquote(display.trim()), address);
            }
        }

        if is_valid_address(trimmed) {
            return Author::new("", trimmed);
        }

        Author::new(value, "")
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }

    /// True when the input used bracket syntax but no address could be read
    /// from it, so the brackets ended up in the name.
    pub fn has_unparsed_address(&self) -> bool {
        self.email.is_empty() && BRACKETED.is_match(self.name.trim())
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name.is_empty(), self.email.is_empty()) {
            (false, false) => write!(f, "{} <{}>", self.name, self.email),
            (true, false) => write!(f, "{}", self.email),
            _ => write!(f, "{}", self.name),
        }
    }
}

fn unquote(display: &str) -> &str {
    display
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(display)
}

/// Checks `local@domain` address syntax.
///
/// The local part is a dot-atom or a quoted string; the domain is a dot-atom.
pub fn is_valid_address(address: &str) -> bool {
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };

    let local_ok = if local.len() >= 2 && local.starts_with('"') && local.ends_with('"') {
        is_quoted_local(&local[1..local.len() - 1])
    } else {
        is_dot_atom(local)
    };

    local_ok && is_dot_atom(domain)
}

fn is_dot_atom(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

fn is_quoted_local(inner: &str) -> bool {
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '"' => return false,
            c if c.is_ascii_control() => return false,
            _ => {}
        }
    }
    true
}
