//! Git repository URL parsing.
//!
//! This crate turns the URL shapes git has accumulated over the years into a
//! [`ParsedUrl`] record. Supported forms:
//! - ssh://[user@]host[:port]/owner/name.git (also git://, http[s]://, rsync://)
//! - git+ssh://, git+https:// and other composite schemes
//! - [user@]host:[/]owner/name.git (SCP-like SSH)
//! - host:name.git, host/name (bare SCP-like)
//!
//! Parsing tries a fixed list of [`Matcher`]s in order and the first one that
//! matches supplies every field of the record. Hosts are never resolved and
//! paths are never validated.

pub mod matcher;
pub mod protocol;
pub mod url;

use serde::Serialize;

pub use matcher::Matcher;
pub use protocol::extract_protocols;
pub use url::parse;

/// Errors that can occur while parsing a git URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("invalid URL '{0}'")]
    Unparseable(String),
}

impl UrlError {
    /// The input that could not be parsed.
    pub fn url(&self) -> &str {
        match self {
            UrlError::Unparseable(url) => url,
        }
    }
}

pub type Result<T> = std::result::Result<T, UrlError>;

/// Transport assumed when the winning matcher captures no scheme.
pub const DEFAULT_PROTOCOL: &str = "ssh";

/// Parsed git URL.
///
/// Every optional field is `None` unless the winning [`Matcher`] captured it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    /// Path component including the owner and name segments.
    pub pathname: Option<String>,
    /// Tokens in front of `://`, split on `+`. Empty for SCP-like input.
    pub protocols: Vec<String>,
    /// Effective transport, e.g. `ssh` for `git+ssh://`.
    pub protocol: String,
    /// The input, unmodified.
    pub href: String,
    pub resource: Option<String>,
    pub user: Option<String>,
    pub port: Option<String>,
    /// Repository name without the `.git` suffix.
    pub name: Option<String>,
    pub owner: Option<String>,
}

impl std::fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.href)
    }
}
