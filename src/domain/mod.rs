//! Field parsers - pure functions from a raw string to a typed value

pub mod author;
pub mod flag;
pub mod link;
pub mod sha;
pub mod timestamp;
pub mod version;

pub use author::Author;
pub use flag::parse_flag;
pub use link::{authority, parse_url};
pub use sha::{parse_sha, short_sha, short_sha_or};
pub use timestamp::{format_timestamp, parse_timestamp};
pub use version::SemVer;
