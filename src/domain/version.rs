use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    )
    .expect("semver pattern")
});

/// Semantic version components, kept as the strings they were written as
///
/// See https://semver.org. All components are empty when the version string
/// didn't follow `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemVer {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub pre_release: String,
    pub build: String,
}

impl SemVer {
    /// Parse version from a string (e.g., "v1.2.3-rc.1+build.5")
    ///
    /// Never fails: strings like "latest", "1.2" or "1.2.3.4" yield empty
    /// components.
    pub fn parse(value: &str) -> Self {
        let clean = value.strip_prefix('v').unwrap_or(value);

        let Some(captures) = SEMVER.captures(clean) else {
            return SemVer::default();
        };
        let group = |i: usize| {
            captures
                .get(i)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        SemVer {
            major: group(1),
            minor: group(2),
            patch: group(3),
            pre_release: group(4),
            build: group(5),
        }
    }

    /// True when the source string was not a semantic version.
    pub fn is_empty(&self) -> bool {
        self.major.is_empty()
    }

    /// Convert to a comparable [`semver::Version`].
    ///
    /// Returns `None` for empty components, and for versions the strict
    /// grammar rejects (leading zeros, numbers that overflow `u64`).
    pub fn to_version(&self) -> Option<::semver::Version> {
        if self.is_empty() {
            return None;
        }
        ::semver::Version::parse(&self.to_string()).ok()
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}
