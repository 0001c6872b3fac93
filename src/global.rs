//! Process-wide metadata snapshot
//!
//! The first call to [`install`] or [`current`] parses the metadata; every
//! later call, from any thread, sees that same result. A failed load is
//! stored too and is never retried.

use std::sync::OnceLock;

use crate::config::RawMetadata;
use crate::error::{MetaError, Result};
use crate::metadata::Metadata;

static SNAPSHOT: OnceLock<Result<Metadata>> = OnceLock::new();

/// Load `raw` as the process-wide metadata, unless a snapshot already exists.
///
/// Once initialized, `raw` is ignored and the existing snapshot is returned.
pub fn install(raw: &RawMetadata) -> std::result::Result<&'static Metadata, &'static MetaError> {
    SNAPSHOT.get_or_init(|| Metadata::load(raw)).as_ref()
}

/// The process-wide metadata, loaded from this crate's compile-time
/// environment on first use.
pub fn current() -> std::result::Result<&'static Metadata, &'static MetaError> {
    SNAPSHOT
        .get_or_init(|| Metadata::load(&crate::build_env!()))
        .as_ref()
}

/// The process-wide metadata if it has been successfully initialized.
pub fn get() -> Option<&'static Metadata> {
    SNAPSHOT.get().and_then(|snapshot| snapshot.as_ref().ok())
}
