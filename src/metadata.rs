//! Validated application metadata
//!
//! [`Metadata::load`] parses every field of a [`RawMetadata`] once and keeps
//! the results in an immutable snapshot. Strict fields (URLs, date, dev flag,
//! SHA) fail the load; best-effort fields (author, version) degrade and record
//! a [`MetadataWarning`] instead.
//!
//! Every accessor has an `_or` variant that returns the given default when the
//! raw value was empty.

use chrono::{DateTime, Utc};
use url::Url;

use crate::config::RawMetadata;
use crate::domain::{
    format_timestamp, parse_flag, parse_sha, parse_timestamp, parse_url, short_sha,
    short_sha_or, Author, SemVer,
};
use crate::error::{MetaError, Result};
use crate::field::{Field, Strictness};
use crate::warning::MetadataWarning;

/// Immutable snapshot of parsed build metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    author: Author,
    author_url: Option<Url>,
    copyright: String,
    date: Option<DateTime<Utc>>,
    description: String,
    development: bool,
    docs: Option<Url>,
    license: String,
    license_url: Option<Url>,
    name: String,
    note: String,
    sha: String,
    source: Option<Url>,
    title: String,
    url: Option<Url>,
    version: String,
    semver: SemVer,
    warnings: Vec<MetadataWarning>,
}

fn or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

impl Metadata {
    /// Parse and validate every field.
    ///
    /// Returns the first strict-field error, in [`Field::ALL`] order.
    pub fn load(raw: &RawMetadata) -> Result<Self> {
        let author = Author::parse(&raw.author);
        let semver = SemVer::parse(&raw.version);

        let mut warnings = Vec::new();
        if author.has_unparsed_address() {
            tracing::warn!(author = %raw.author, "author has no valid email address");
            warnings.push(MetadataWarning::AuthorWithoutAddress {
                author: raw.author.clone(),
            });
        }
        if semver.is_empty() && !raw.version.is_empty() {
            tracing::warn!(version = %raw.version, "version is not a semantic version");
            warnings.push(MetadataWarning::UnparsableVersion {
                version: raw.version.clone(),
            });
        }

        let metadata = Metadata {
            author,
            author_url: parse_url(Field::AuthorUrl, &raw.author_url)?,
            copyright: raw.copyright.clone(),
            date: parse_timestamp(Field::Date, &raw.date)?,
            description: raw.desc.clone(),
            development: parse_flag(Field::Dev, &raw.dev)?,
            docs: parse_url(Field::Docs, &raw.docs)?,
            license: raw.license.clone(),
            license_url: parse_url(Field::LicenseUrl, &raw.license_url)?,
            name: raw.name.clone(),
            note: raw.note.clone(),
            sha: parse_sha(Field::Sha, &raw.sha)?,
            source: parse_url(Field::Src, &raw.src)?,
            title: raw.title.clone(),
            url: parse_url(Field::Url, &raw.url)?,
            version: raw.version.clone(),
            semver,
            warnings,
        };

        tracing::debug!(
            fields = ?raw.present_fields(),
            "loaded application metadata"
        );
        Ok(metadata)
    }

    /// Check every strict field and collect all errors rather than the first.
    pub fn diagnose(raw: &RawMetadata) -> Vec<MetaError> {
        Field::ALL
            .iter()
            .filter(|field| field.strictness() == Strictness::Strict)
            .filter_map(|&field| validate_field(field, raw.get(field)).err())
            .collect()
    }

    /// Warnings raised by best-effort fields during [`Metadata::load`].
    pub fn warnings(&self) -> &[MetadataWarning] {
        &self.warnings
    }

    /// Name of the application author.
    pub fn author(&self) -> &str {
        &self.author.name
    }

    pub fn author_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.author.name, default)
    }

    /// Parsed author name and email.
    pub fn author_info(&self) -> &Author {
        &self.author
    }

    /// Email address of the application author.
    pub fn author_email(&self) -> &str {
        &self.author.email
    }

    pub fn author_email_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.author.email, default)
    }

    /// Homepage of the application author.
    pub fn author_url(&self) -> Option<&Url> {
        self.author_url.as_ref()
    }

    pub fn author_url_or<'a>(&'a self, default: &'a Url) -> &'a Url {
        self.author_url.as_ref().unwrap_or(default)
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn copyright_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.copyright, default)
    }

    /// Time at which the application was built, in UTC.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn date_or(&self, default: DateTime<Utc>) -> DateTime<Utc> {
        self.date.unwrap_or(default)
    }

    /// Build time rendered with a strftime layout, or "" if no date is set.
    pub fn date_format(&self, layout: &str) -> Result<String> {
        self.date_format_or(layout, "")
    }

    pub fn date_format_or(&self, layout: &str, default: &str) -> Result<String> {
        match &self.date {
            Some(date) => format_timestamp(date, layout),
            None => Ok(default.to_string()),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn description_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.description, default)
    }

    /// Whether this is a development build.
    pub fn development(&self) -> bool {
        self.development
    }

    /// Documentation URL.
    pub fn docs(&self) -> Option<&Url> {
        self.docs.as_ref()
    }

    pub fn docs_or<'a>(&'a self, default: &'a Url) -> &'a Url {
        self.docs.as_ref().unwrap_or(default)
    }

    /// SPDX license identifier.
    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn license_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.license, default)
    }

    pub fn license_url(&self) -> Option<&Url> {
        self.license_url.as_ref()
    }

    pub fn license_url_or<'a>(&'a self, default: &'a Url) -> &'a Url {
        self.license_url.as_ref().unwrap_or(default)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.name, default)
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn note_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.note, default)
    }

    /// Full git SHA the application was built from.
    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn sha_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.sha, default)
    }

    /// First seven characters of the git SHA, or "" if none is set.
    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }

    pub fn short_sha_or<'a>(&'a self, default: &'a str) -> &'a str {
        short_sha_or(&self.sha, default)
    }

    /// Source repository URL.
    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    pub fn source_or<'a>(&'a self, default: &'a Url) -> &'a Url {
        self.source.as_ref().unwrap_or(default)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.title, default)
    }

    /// Homepage URL.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn url_or<'a>(&'a self, default: &'a Url) -> &'a Url {
        self.url.as_ref().unwrap_or(default)
    }

    /// Version slug, exactly as provided.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn version_or<'a>(&'a self, default: &'a str) -> &'a str {
        or(&self.version, default)
    }

    pub fn semver(&self) -> &SemVer {
        &self.semver
    }

    /// Semantic version of the build, or of `default` when no version is set.
    pub fn semver_or(&self, default: &str) -> SemVer {
        if self.version.is_empty() {
            SemVer::parse(default)
        } else {
            self.semver.clone()
        }
    }

    pub fn version_major(&self) -> &str {
        &self.semver.major
    }

    pub fn version_minor(&self) -> &str {
        &self.semver.minor
    }

    pub fn version_patch(&self) -> &str {
        &self.semver.patch
    }

    pub fn version_pre_release(&self) -> &str {
        &self.semver.pre_release
    }

    pub fn version_build(&self) -> &str {
        &self.semver.build
    }
}

impl TryFrom<&RawMetadata> for Metadata {
    type Error = MetaError;

    fn try_from(raw: &RawMetadata) -> Result<Self> {
        Metadata::load(raw)
    }
}

fn validate_field(field: Field, value: &str) -> Result<()> {
    match field {
        Field::AuthorUrl | Field::Docs | Field::LicenseUrl | Field::Src | Field::Url => {
            parse_url(field, value).map(|_| ())
        }
        Field::Date => parse_timestamp(field, value).map(|_| ()),
        Field::Dev => parse_flag(field, value).map(|_| ()),
        Field::Sha => parse_sha(field, value).map(|_| ()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SHA: &str = "bb2fecbb4a287ea4c1f9887ca86dd0eb7ff28ec6";

    fn full_raw() -> RawMetadata {
        RawMetadata::default()
            .with(Field::Author, "Jane Doe <jdoe@example.com>")
            .with(Field::AuthorUrl, "https://example.com/profile")
            .with(Field::Copyright, "2021 Jane Doe")
            .with(Field::Date, "Fri, 23 Aug 2019 11:00:00 -0700")
            .with(Field::Desc, "A super simple demonstration application")
            .with(Field::Dev, "TRUE")
            .with(Field::Docs, "https://example.com/demo/README.md")
            .with(Field::License, "MIT")
            .with(Field::LicenseUrl, "https://example.com/demo/LICENSE.txt")
            .with(Field::Name, "demo-app")
            .with(Field::Note, "Built on CI")
            .with(Field::Sha, SHA)
            .with(Field::Src, "https://example.com/demo.git")
            .with(Field::Title, "Demo Application")
            .with(Field::Url, "https://example.com/demo")
            .with(Field::Version, "v1.2.3-rc.456+build.789")
    }

    #[test]
    fn test_load_empty() {
        let meta = Metadata::load(&RawMetadata::default()).unwrap();
        assert_eq!(meta.author(), "");
        assert_eq!(meta.author_email(), "");
        assert_eq!(meta.author_url(), None);
        assert_eq!(meta.date(), None);
        assert!(!meta.development());
        assert_eq!(meta.sha(), "");
        assert_eq!(meta.short_sha(), "");
        assert_eq!(meta.semver(), &SemVer::default());
        assert_eq!(meta.date_format("%Y").unwrap(), "");
        assert!(meta.warnings().is_empty());
    }

    #[test]
    fn test_load_full() {
        let meta = Metadata::load(&full_raw()).unwrap();
        assert_eq!(meta.author(), "Jane Doe");
        assert_eq!(meta.author_email(), "jdoe@example.com");
        assert_eq!(
            meta.author_url().map(Url::as_str),
            Some("https://example.com/profile")
        );
        assert_eq!(meta.copyright(), "2021 Jane Doe");
        assert_eq!(
            meta.date(),
            Some(Utc.with_ymd_and_hms(2019, 8, 23, 18, 0, 0).unwrap())
        );
        assert_eq!(
            meta.date_format("%Y-%m-%dT%H:%M:%SZ").unwrap(),
            "2019-08-23T18:00:00Z"
        );
        assert_eq!(meta.description(), "A super simple demonstration application");
        assert!(meta.development());
        assert_eq!(meta.license(), "MIT");
        assert_eq!(meta.name(), "demo-app");
        assert_eq!(meta.note(), "Built on CI");
        assert_eq!(meta.sha(), SHA);
        assert_eq!(meta.short_sha(), "bb2fecb");
        assert_eq!(meta.title(), "Demo Application");
        assert_eq!(meta.version(), "v1.2.3-rc.456+build.789");
        assert_eq!(meta.version_major(), "1");
        assert_eq!(meta.version_minor(), "2");
        assert_eq!(meta.version_patch(), "3");
        assert_eq!(meta.version_pre_release(), "rc.456");
        assert_eq!(meta.version_build(), "build.789");
        assert!(meta.warnings().is_empty());
    }

    #[test]
    fn test_or_variants_use_default_only_when_empty() {
        let empty = Metadata::load(&RawMetadata::default()).unwrap();
        let full = Metadata::load(&full_raw()).unwrap();
        let fallback = Url::parse("https://fallback.example.com").unwrap();

        assert_eq!(empty.name_or("fallback"), "fallback");
        assert_eq!(full.name_or("fallback"), "demo-app");
        assert_eq!(empty.author_or("nobody"), "nobody");
        assert_eq!(empty.author_email_or("x@y.z"), "x@y.z");
        assert_eq!(empty.license_or("Apache-2.0"), "Apache-2.0");
        assert_eq!(empty.url_or(&fallback), &fallback);
        assert_ne!(full.url_or(&fallback), &fallback);
        assert_eq!(empty.docs_or(&fallback), &fallback);
        assert_eq!(empty.sha_or("unknown"), "unknown");
        assert_eq!(empty.short_sha_or("0123456789"), "0123456");
        assert_eq!(full.short_sha_or("0123456789"), "bb2fecb");
        assert_eq!(empty.version_or("development"), "development");
        assert_eq!(empty.date_format_or("%Y", "never").unwrap(), "never");
        assert_eq!(full.date_format_or("%Y", "never").unwrap(), "2019");

        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(empty.date_or(epoch), epoch);
        assert_ne!(full.date_or(epoch), epoch);
    }

    #[test]
    fn test_semver_or() {
        let empty = Metadata::load(&RawMetadata::default()).unwrap();
        assert_eq!(empty.semver_or("v0.1.0").to_string(), "0.1.0");

        let full = Metadata::load(&full_raw()).unwrap();
        assert_eq!(full.semver_or("v0.1.0").major, "1");
    }

    #[test]
    fn test_load_rejects_strict_fields() {
        let cases = [
            (Field::AuthorUrl, "example.com/page"),
            (Field::Date, "tomorrow"),
            (Field::Dev, "yes"),
            (Field::Docs, "example.com/page"),
            (Field::LicenseUrl, "http://localhost:http"),
            (Field::Sha, "0000000"),
            (Field::Src, "http://"),
            (Field::Url, "example.com"),
        ];

        for (field, value) in cases {
            let raw = RawMetadata::default().with(field, value);
            let err = Metadata::load(&raw).unwrap_err();
            assert_eq!(err.field(), Some(field), "value {:?}", value);
            assert!(err.to_string().contains(value));
        }
    }

    #[test]
    fn test_best_effort_fields_warn_instead_of_failing() {
        let raw = RawMetadata::default()
            .with(Field::Author, "Jane Doe <example@>")
            .with(Field::Version, "latest");
        let meta = Metadata::load(&raw).unwrap();

        assert_eq!(meta.author(), "Jane Doe <example@>");
        assert_eq!(meta.author_email(), "");
        assert_eq!(meta.version(), "latest");
        assert_eq!(meta.version_major(), "");
        assert_eq!(meta.warnings().len(), 2);
    }

    #[test]
    fn test_diagnose_collects_every_error() {
        let raw = full_raw()
            .with(Field::Dev, "maybe")
            .with(Field::Sha, "xyz")
            .with(Field::Url, "example.com")
            .with(Field::Version, "latest");

        let fields: Vec<Field> = Metadata::diagnose(&raw)
            .iter()
            .filter_map(MetaError::field)
            .collect();
        assert_eq!(fields, vec![Field::Dev, Field::Sha, Field::Url]);
        assert!(Metadata::diagnose(&full_raw()).is_empty());
    }

    #[test]
    fn test_load_is_deterministic() {
        let raw = full_raw();
        let first = Metadata::load(&raw).unwrap();
        let second = Metadata::try_from(&raw).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.author(), first.author());
    }
}
