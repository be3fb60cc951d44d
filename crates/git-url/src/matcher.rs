//! The ordered matcher table.
//!
//! Git URL syntaxes overlap, so instead of one grammar there are four
//! patterns tried in a fixed order. The first pattern that matches anywhere
//! in the input wins outright, even when a later one would produce captures
//! that look more plausible.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// `scheme://[user@]host[:port]/owner/name.git` with a single, known scheme.
const SCHEME: &str = r"^(?P<protocol>https?|git|ssh|rsync)://(?:(?P<user>.+)@)*(?P<resource>[a-z0-9_.-]*)[:/]*(?P<port>\d+)?(?P<pathname>/(?P<owner>.+)/(?P<name>.+)\.git)";

/// `[git+]scheme://[user@]host[:port][/owner]/[name[.git]]`
const COMPOSITE: &str = r"(?:git\+)?(?:(?P<protocol>\w+)://)(?:(?P<user>\w+)@)?(?P<resource>[\w.-]+)(?::(?P<port>\d+))?(?P<pathname>(?:/(?P<owner>\w+)/)?(?:/?(?P<name>[\w-]+)(?:\.git)?)?)";

/// `[user@]host[:port]:[/]owner/name.git`
const SCP_AUTHORITY: &str = r"^(?:(?P<user>.+)@)*(?P<resource>[a-z0-9_.-]*)[:/]*(?P<port>\d+)?:(?P<pathname>/?(?P<owner>.+)/(?P<name>.+)\.git)";

/// `[user@]host(:|/)[owner/][name[.git]]`
const SCP: &str = r"(?:(?P<user>\w+)@)?(?P<resource>[\w.-]+)[:/]{1,2}(?P<pathname>(?:(?P<owner>\w+)/)?(?:(?P<name>[\w-]+)(?:\.git)?)?)";

/// One entry of the matcher table, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matcher {
    /// Explicit `http`, `https`, `git`, `ssh` or `rsync` scheme with an
    /// `/owner/name.git` path.
    Scheme = 0,
    /// Any word scheme, optionally prefixed with `git+`. Owner and `.git`
    /// are optional.
    Composite = 1,
    /// No recognised scheme, `:` before an `owner/name.git` path.
    ScpAuthority = 2,
    /// Last resort: host followed by one or two `:`/`/` and a short path.
    Scp = 3,
}

impl Matcher {
    /// All matchers in the order they are tried.
    pub const ALL: [Matcher; 4] = [
        Matcher::Scheme,
        Matcher::Composite,
        Matcher::ScpAuthority,
        Matcher::Scp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Matcher::Scheme => "scheme",
            Matcher::Composite => "composite",
            Matcher::ScpAuthority => "scp-authority",
            Matcher::Scp => "scp",
        }
    }

    /// Return the matcher that wins for `url`, if any.
    pub fn find(url: &str) -> Option<Matcher> {
        first_match(url).map(|(matcher, _)| matcher)
    }

    fn pattern(self) -> &'static str {
        match self {
            Matcher::Scheme => SCHEME,
            Matcher::Composite => COMPOSITE,
            Matcher::ScpAuthority => SCP_AUTHORITY,
            Matcher::Scp => SCP,
        }
    }

    /// The compiled pattern. Compiled once per process on first use.
    pub(crate) fn regex(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 4]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            Matcher::ALL.map(|matcher| {
                Regex::new(matcher.pattern()).expect("matcher patterns are valid regexes")
            })
        });
        &patterns[self as usize]
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Try every matcher in order and return the first one that matches along
/// with its captures.
pub(crate) fn first_match(url: &str) -> Option<(Matcher, Captures<'_>)> {
    Matcher::ALL.into_iter().find_map(|matcher| {
        tracing::trace!(matcher = matcher.name(), "trying matcher");
        matcher.regex().captures(url).map(|caps| (matcher, caps))
    })
}
