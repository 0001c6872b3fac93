use std::fmt;

/// Non-fatal issues found while reading best-effort fields.
/// The value is still usable, but probably not what the build intended.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataWarning {
    /// Version is set but isn't a semantic version, so its components are empty
    UnparsableVersion { version: String },
    /// Author uses `<...>` syntax but the bracketed text isn't an email address
    AuthorWithoutAddress { author: String },
}

impl fmt::Display for MetadataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataWarning::UnparsableVersion { version } => {
                write!(
                    f,
                    "Version '{}' is not a semantic version; components left empty",
                    version
                )
            }
            MetadataWarning::AuthorWithoutAddress { author } => {
                write!(
                    f,
                    "Author '{}' has no valid email address; using it as the name",
                    author
                )
            }
        }
    }
}
