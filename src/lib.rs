//! Build-time application metadata, validated once at startup.
//!
//! Raw strings (author, version, URLs, git SHA, build date, ...) are collected
//! into a [`RawMetadata`] and parsed into an immutable [`Metadata`] snapshot:
//!
//! ```no_run
//! let meta = app_meta::Metadata::load(&app_meta::build_env!())?;
//! println!("{} {}", meta.name_or("demo"), meta.version_or("development"));
//! # Ok::<(), app_meta::MetaError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod field;
pub mod global;
pub mod metadata;
pub mod platform;
pub mod ui;
pub mod warning;

pub use config::{load_config, RawMetadata};
pub use domain::{Author, SemVer};
pub use error::{MetaError, Result};
pub use field::Field;
pub use metadata::Metadata;
pub use warning::MetadataWarning;
