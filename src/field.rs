//! Catalogue of the recognized metadata fields.

use std::fmt;
use std::str::FromStr;

use crate::error::MetaError;

/// A named build metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Author,
    AuthorUrl,
    Copyright,
    Date,
    Desc,
    Dev,
    Docs,
    License,
    LicenseUrl,
    Name,
    Note,
    Sha,
    Src,
    Title,
    Url,
    Version,
}

/// How a field's raw value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Stored verbatim
    Verbatim,
    /// Malformed values degrade to a fallback
    BestEffort,
    /// Malformed values are rejected
    Strict,
}

impl Field {
    /// Every field, in the order they are validated.
    pub const ALL: [Field; 16] = [
        Field::Author,
        Field::AuthorUrl,
        Field::Copyright,
        Field::Date,
        Field::Desc,
        Field::Dev,
        Field::Docs,
        Field::License,
        Field::LicenseUrl,
        Field::Name,
        Field::Note,
        Field::Sha,
        Field::Src,
        Field::Title,
        Field::Url,
        Field::Version,
    ];

    /// The field's key, as used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Field::Author => "author",
            Field::AuthorUrl => "author_url",
            Field::Copyright => "copyright",
            Field::Date => "date",
            Field::Desc => "desc",
            Field::Dev => "dev",
            Field::Docs => "docs",
            Field::License => "license",
            Field::LicenseUrl => "license_url",
            Field::Name => "name",
            Field::Note => "note",
            Field::Sha => "sha",
            Field::Src => "src",
            Field::Title => "title",
            Field::Url => "url",
            Field::Version => "version",
        }
    }

    /// The environment variable carrying the field's raw value.
    pub fn env_var(self) -> &'static str {
        match self {
            Field::Author => "APP_META_AUTHOR",
            Field::AuthorUrl => "APP_META_AUTHOR_URL",
            Field::Copyright => "APP_META_COPYRIGHT",
            Field::Date => "APP_META_DATE",
            Field::Desc => "APP_META_DESC",
            Field::Dev => "APP_META_DEV",
            Field::Docs => "APP_META_DOCS",
            Field::License => "APP_META_LICENSE",
            Field::LicenseUrl => "APP_META_LICENSE_URL",
            Field::Name => "APP_META_NAME",
            Field::Note => "APP_META_NOTE",
            Field::Sha => "APP_META_SHA",
            Field::Src => "APP_META_SRC",
            Field::Title => "APP_META_TITLE",
            Field::Url => "APP_META_URL",
            Field::Version => "APP_META_VERSION",
        }
    }

    pub fn strictness(self) -> Strictness {
        match self {
            Field::Author | Field::Version => Strictness::BestEffort,
            Field::AuthorUrl
            | Field::Date
            | Field::Dev
            | Field::Docs
            | Field::LicenseUrl
            | Field::Sha
            | Field::Src
            | Field::Url => Strictness::Strict,
            Field::Copyright
            | Field::Desc
            | Field::License
            | Field::Name
            | Field::Note
            | Field::Title => Strictness::Verbatim,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == key)
            .ok_or_else(|| MetaError::config(format!("Unknown metadata field: '{}'", s)))
    }
}
