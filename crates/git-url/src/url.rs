//! Git URL parsing.
//!
//! Supports all git URL formats the matcher table knows about:
//! - ssh://[user@]host[:port]/owner/name.git
//! - git://, http[s]://, rsync:// with the same shape
//! - git+ssh://host/owner/name.git and other composites
//! - [user@]host:[/]owner/name.git (SCP-like SSH)
//! - host:name.git, host/name

use std::str::FromStr;

use crate::matcher::first_match;
use crate::protocol::extract_protocols;
use crate::{ParsedUrl, Result, UrlError, DEFAULT_PROTOCOL};

impl ParsedUrl {
    /// Parse a git URL string into a ParsedUrl.
    ///
    /// The first matcher in [`Matcher::ALL`](crate::Matcher::ALL) that
    /// matches supplies every field; groups it did not capture stay `None`.
    /// `protocols` is always derived from the text before `://`, whichever
    /// matcher wins.
    pub fn parse(url: &str) -> Result<Self> {
        let Some((matcher, caps)) = first_match(url) else {
            tracing::debug!(url = %url, "no matcher accepted URL");
            return Err(UrlError::Unparseable(url.to_string()));
        };
        tracing::debug!(url = %url, matcher = matcher.name(), "matched URL");

        let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

        Ok(ParsedUrl {
            pathname: group("pathname"),
            protocols: extract_protocols(url),
            protocol: group("protocol").unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            href: url.to_string(),
            resource: group("resource"),
            user: group("user"),
            port: group("port"),
            name: group("name"),
            owner: group("owner"),
        })
    }
}

impl FromStr for ParsedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self> {
        ParsedUrl::parse(s)
    }
}

/// Parse a git URL string. See [`ParsedUrl::parse`].
pub fn parse(url: &str) -> Result<ParsedUrl> {
    ParsedUrl::parse(url)
}
