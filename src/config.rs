use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::field::Field;

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "appmeta.toml";

/// Raw, unparsed metadata strings, one per field.
///
/// Missing keys are empty strings, which every parser treats as "not set".
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RawMetadata {
    pub author: String,
    pub author_url: String,
    pub copyright: String,
    pub date: String,
    pub desc: String,
    pub dev: String,
    pub docs: String,
    pub license: String,
    pub license_url: String,
    pub name: String,
    pub note: String,
    pub sha: String,
    pub src: String,
    pub title: String,
    pub url: String,
    pub version: String,
}

impl RawMetadata {
    /// Returns the raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        self.slot(field)
    }

    /// Sets the raw value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Builder-style [`RawMetadata::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builds raw metadata from `(field, value)` pairs, skipping unset values.
    ///
    /// Used by [`build_env!`](crate::build_env) with `option_env!` results.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Field, Option<&'a str>)>,
    {
        pairs
            .into_iter()
            .fold(RawMetadata::default(), |raw, (field, value)| match value {
                Some(value) => raw.with(field, value),
                None => raw,
            })
    }

    /// Reads every field through `lookup`, keyed by environment variable name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Field::ALL
            .iter()
            .fold(RawMetadata::default(), |raw, &field| match lookup(field.env_var()) {
                Some(value) => raw.with(field, value),
                None => raw,
            })
    }

    /// Reads every field from the `APP_META_*` variables of the running process.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlays the non-empty fields of `other` on top of `self`.
    pub fn merge(mut self, other: &RawMetadata) -> Self {
        for field in Field::ALL {
            let value = other.get(field);
            if !value.is_empty() {
                self.set(field, value);
            }
        }
        self
    }

    /// Fields that carry a value.
    pub fn present_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|&field| !self.get(field).is_empty())
            .collect()
    }

    fn slot(&self, field: Field) -> &String {
        match field {
            Field::Author => &self.author,
            Field::AuthorUrl => &self.author_url,
            Field::Copyright => &self.copyright,
            Field::Date => &self.date,
            Field::Desc => &self.desc,
            Field::Dev => &self.dev,
            Field::Docs => &self.docs,
            Field::License => &self.license,
            Field::LicenseUrl => &self.license_url,
            Field::Name => &self.name,
            Field::Note => &self.note,
            Field::Sha => &self.sha,
            Field::Src => &self.src,
            Field::Title => &self.title,
            Field::Url => &self.url,
            Field::Version => &self.version,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Author => &mut self.author,
            Field::AuthorUrl => &mut self.author_url,
            Field::Copyright => &mut self.copyright,
            Field::Date => &mut self.date,
            Field::Desc => &mut self.desc,
            Field::Dev => &mut self.dev,
            Field::Docs => &mut self.docs,
            Field::License => &mut self.license,
            Field::LicenseUrl => &mut self.license_url,
            Field::Name => &mut self.name,
            Field::Note => &mut self.note,
            Field::Sha => &mut self.sha,
            Field::Src => &mut self.src,
            Field::Title => &mut self.title,
            Field::Url => &mut self.url,
            Field::Version => &mut self.version,
        }
    }
}

/// Reads raw metadata captured from the compile-time environment of the
/// calling crate.
///
/// Each field comes from the matching `APP_META_*` variable as seen by
/// `option_env!`, so values can be injected with
/// `APP_META_VERSION=1.2.3 cargo build` or `cargo:rustc-env` in a build script.
#[macro_export]
macro_rules! build_env {
    () => {
        $crate::RawMetadata::from_pairs([
            ($crate::Field::Author, option_env!("APP_META_AUTHOR")),
            ($crate::Field::AuthorUrl, option_env!("APP_META_AUTHOR_URL")),
            ($crate::Field::Copyright, option_env!("APP_META_COPYRIGHT")),
            ($crate::Field::Date, option_env!("APP_META_DATE")),
            ($crate::Field::Desc, option_env!("APP_META_DESC")),
            ($crate::Field::Dev, option_env!("APP_META_DEV")),
            ($crate::Field::Docs, option_env!("APP_META_DOCS")),
            ($crate::Field::License, option_env!("APP_META_LICENSE")),
            ($crate::Field::LicenseUrl, option_env!("APP_META_LICENSE_URL")),
            ($crate::Field::Name, option_env!("APP_META_NAME")),
            ($crate::Field::Note, option_env!("APP_META_NOTE")),
            ($crate::Field::Sha, option_env!("APP_META_SHA")),
            ($crate::Field::Src, option_env!("APP_META_SRC")),
            ($crate::Field::Title, option_env!("APP_META_TITLE")),
            ($crate::Field::Url, option_env!("APP_META_URL")),
            ($crate::Field::Version, option_env!("APP_META_VERSION")),
        ])
    };
}

/// Locates the metadata file to load.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `appmeta.toml` in current directory
/// 3. `app-meta/appmeta.toml` in the user config directory
fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("app-meta").join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads raw metadata from file, or returns empty metadata if none is found.
///
/// # Arguments
/// * `config_path` - Optional path to a custom metadata file
///
/// # Returns
/// * `Ok(RawMetadata)` - Loaded or empty metadata
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<RawMetadata> {
    let Some(path) = locate_config(config_path) else {
        tracing::debug!("no metadata file found, using empty metadata");
        return Ok(RawMetadata::default());
    };

    tracing::debug!(path = %path.display(), "loading metadata file");
    let content = fs::read_to_string(&path)?;
    let raw: RawMetadata = toml::from_str(&content)?;
    Ok(raw)
}
