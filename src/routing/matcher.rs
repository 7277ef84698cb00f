//! Import path matching.
//!
//! # Responsibilities
//! - Decide whether a mapping covers a requested import path
//! - Derive the `go-import` tag advertised for a covered path
//!
//! # Design Decisions
//! - Exact matching covers the mapping root and its whole subtree, and
//!   always advertises the root
//! - Wildcard matching requires at least one child segment and delegates
//!   exactly one level: `host/a/b/c` under `host` resolves to `host/a`
//! - Requested paths are cleaned before comparison; mapping roots are not
//! - No regex, no allocation on the miss path beyond cleaning

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routing::path;

/// A configured correspondence between an import path root and a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    /// Version control system, passed through untouched (e.g. "git").
    pub vcs: String,
    /// Import path root served by this mapping (e.g. "acln.ro/foo").
    pub from: String,
    /// Repository root corresponding to `from`.
    pub to: String,
}

impl PathMapping {
    pub fn new(vcs: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            vcs: vcs.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns the tag for `path` if it is `self.from` or lies beneath it.
    ///
    /// The tag always points at the mapping root. Given `from ==
    /// "acln.ro/foo"`, a request for `acln.ro/foo/bar` yields an import
    /// path of `acln.ro/foo`.
    pub fn tag_for(&self, path: &str) -> Result<ResolvedTag, NoMatch> {
        let p = path::clean(path);
        if p != self.from && self.child_of(&p).is_none() {
            return Err(self.no_match(p, NoMatchReason::RootMismatch));
        }
        Ok(ResolvedTag {
            import_path: self.from.clone(),
            vcs: self.vcs.clone(),
            repo: self.to.clone(),
        })
    }

    /// Returns the wildcard tag for `path`, which must be a strict sub-path
    /// of `self.from`.
    ///
    /// The tag is rooted at the first element beyond `from`. Given `from ==
    /// "acln.ro"` and `to == "https://github.com/acln0"`, a request for
    /// `acln.ro/foo/bar` yields `acln.ro/foo` and
    /// `https://github.com/acln0/foo`.
    pub fn wildcard_tag_for(&self, path: &str) -> Result<ResolvedTag, NoMatch> {
        let p = path::clean(path);
        let rest = match self.child_of(&p) {
            Some(rest) => rest,
            None if p == self.from => {
                return Err(self.no_match(p, NoMatchReason::NoChildSegment));
            }
            None => return Err(self.no_match(p, NoMatchReason::RootMismatch)),
        };

        let seg = match rest.find('/') {
            Some(i) => &rest[..i],
            None => rest,
        };

        Ok(ResolvedTag {
            import_path: path::join(&[self.from.as_str(), seg]),
            vcs: self.vcs.clone(),
            repo: append_segment(&self.to, seg),
        })
    }

    /// The remainder of `p` after `self.from` and a separating slash.
    fn child_of<'a>(&self, p: &'a str) -> Option<&'a str> {
        p.strip_prefix(self.from.as_str())?
            .strip_prefix('/')
            .filter(|rest| !rest.is_empty())
    }

    fn no_match(&self, path: String, reason: NoMatchReason) -> NoMatch {
        NoMatch {
            path,
            from: self.from.clone(),
            reason,
        }
    }
}

/// Appends one path element to a repository location.
///
/// Repository locations are usually URLs, so they are not cleaned: the
/// `//` after the scheme must survive.
fn append_segment(root: &str, seg: &str) -> String {
    format!("{}/{}", root.trim_end_matches('/'), seg)
}

/// A resolved `go-import` tag: import path root, VCS and repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTag {
    pub import_path: String,
    pub vcs: String,
    pub repo: String,
}

/// Why a mapping did not cover a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchReason {
    /// The path is neither the mapping root nor beneath it.
    RootMismatch,
    /// The path is the mapping root itself, but a wildcard needs a child.
    NoChildSegment,
}

impl std::fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoMatchReason::RootMismatch => write!(f, "root mismatch"),
            NoMatchReason::NoChildSegment => write!(f, "no child segment"),
        }
    }
}

/// The requested path is not covered by a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path} is not covered by {from}: {reason}")]
pub struct NoMatch {
    /// Cleaned request path.
    pub path: String,
    /// Root of the mapping that was tried.
    pub from: String,
    pub reason: NoMatchReason,
}

/// How a mapping is matched against request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The mapping root and its whole subtree resolve to the root.
    #[default]
    Exact,
    /// Each first-level child of the root resolves to its own repository.
    Wildcard,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::Wildcard => write!(f, "wildcard"),
        }
    }
}

/// Trait for resolving request paths against a mapping.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Resolve `path` to a tag, or report why it is not covered.
    fn resolve(&self, path: &str) -> Result<ResolvedTag, NoMatch>;

    /// The mapping this matcher evaluates.
    fn mapping(&self) -> &PathMapping;

    fn mode(&self) -> MatchMode;
}

/// Matches the mapping root and everything beneath it.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    mapping: PathMapping,
}

impl ExactMatcher {
    pub fn new(mapping: PathMapping) -> Self {
        Self { mapping }
    }
}

impl Matcher for ExactMatcher {
    fn resolve(&self, path: &str) -> Result<ResolvedTag, NoMatch> {
        self.mapping.tag_for(path)
    }

    fn mapping(&self) -> &PathMapping {
        &self.mapping
    }

    fn mode(&self) -> MatchMode {
        MatchMode::Exact
    }
}

/// Matches strict sub-paths, one repository per first-level child.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    mapping: PathMapping,
}

impl WildcardMatcher {
    pub fn new(mapping: PathMapping) -> Self {
        Self { mapping }
    }
}

impl Matcher for WildcardMatcher {
    fn resolve(&self, path: &str) -> Result<ResolvedTag, NoMatch> {
        self.mapping.wildcard_tag_for(path)
    }

    fn mapping(&self) -> &PathMapping {
        &self.mapping
    }

    fn mode(&self) -> MatchMode {
        MatchMode::Wildcard
    }
}

/// Build the matcher for `mapping` under `mode`.
pub fn matcher_for(mapping: PathMapping, mode: MatchMode) -> Box<dyn Matcher> {
    match mode {
        MatchMode::Exact => Box::new(ExactMatcher::new(mapping)),
        MatchMode::Wildcard => Box::new(WildcardMatcher::new(mapping)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(import_path: &str, repo: &str) -> ResolvedTag {
        ResolvedTag {
            import_path: import_path.into(),
            vcs: "git".into(),
            repo: repo.into(),
        }
    }

    #[test]
    fn test_exact_covers_subtree() {
        let m = PathMapping::new("git", "acln.ro/foo", "https://github.com/acln0/foo");
        let want = tag("acln.ro/foo", "https://github.com/acln0/foo");

        for p in ["acln.ro/foo", "acln.ro/foo/", "acln.ro/foo/bar", "acln.ro/foo/bar/baz"] {
            assert_eq!(m.tag_for(p), Ok(want.clone()), "{p}");
        }
    }

    #[test]
    fn test_exact_rejects_outside_paths() {
        let m = PathMapping::new("git", "acln.ro/foo", "https://github.com/acln0/foo");

        for p in ["acln.ro/", "acln.ro/bar", "acln.ro/foobar", "example.com/foo"] {
            let err = m.tag_for(p).unwrap_err();
            assert_eq!(err.reason, NoMatchReason::RootMismatch, "{p}");
            assert_eq!(err.from, "acln.ro/foo");
        }
    }

    #[test]
    fn test_wildcard_delegates_first_child() {
        let m = PathMapping::new("git", "acln.ro", "https://github.com/acln0");
        let want = tag("acln.ro/foo", "https://github.com/acln0/foo");

        for p in ["acln.ro/foo", "acln.ro/foo/bar", "acln.ro/foo/bar/baz", "acln.ro//foo/"] {
            assert_eq!(m.wildcard_tag_for(p), Ok(want.clone()), "{p}");
        }
    }

    #[test]
    fn test_wildcard_requires_child_segment() {
        let m = PathMapping::new("git", "acln.ro", "https://github.com/acln0");

        for p in ["acln.ro", "acln.ro/"] {
            let err = m.wildcard_tag_for(p).unwrap_err();
            assert_eq!(err.reason, NoMatchReason::NoChildSegment, "{p}");
        }

        let err = m.wildcard_tag_for("example.com/foo").unwrap_err();
        assert_eq!(err.reason, NoMatchReason::RootMismatch);
        let err = m.wildcard_tag_for("acln.rofoo/bar").unwrap_err();
        assert_eq!(err.reason, NoMatchReason::RootMismatch);
    }

    #[test]
    fn test_wildcard_plain_roots() {
        let m = PathMapping::new("hg", "H", "R");
        let got = m.wildcard_tag_for("H/foo/bar").unwrap();
        assert_eq!(got.import_path, "H/foo");
        assert_eq!(got.repo, "R/foo");
        assert_eq!(got.vcs, "hg");
    }

    #[test]
    fn test_wildcard_repo_with_trailing_slash() {
        let m = PathMapping::new("git", "acln.ro", "https://github.com/acln0/");
        let got = m.wildcard_tag_for("acln.ro/foo").unwrap();
        assert_eq!(got.repo, "https://github.com/acln0/foo");
    }

    #[test]
    fn test_matching_is_idempotent() {
        let m = PathMapping::new("git", "acln.ro", "https://github.com/acln0");
        assert_eq!(m.wildcard_tag_for("acln.ro/x/y"), m.wildcard_tag_for("acln.ro/x/y"));
        assert_eq!(m.tag_for("acln.ro/x"), m.tag_for("acln.ro/x"));
    }

    #[test]
    fn test_matcher_trait_dispatch() {
        let m = PathMapping::new("git", "acln.ro", "https://github.com/acln0");

        let exact = matcher_for(m.clone(), MatchMode::Exact);
        assert_eq!(exact.mode(), MatchMode::Exact);
        assert_eq!(exact.resolve("acln.ro/foo").unwrap().import_path, "acln.ro");

        let wildcard = matcher_for(m, MatchMode::Wildcard);
        assert_eq!(wildcard.mode(), MatchMode::Wildcard);
        assert_eq!(wildcard.resolve("acln.ro/foo").unwrap().import_path, "acln.ro/foo");
    }

    #[test]
    fn test_no_match_display() {
        let m = PathMapping::new("git", "acln.ro", "https://github.com/acln0");
        let err = m.wildcard_tag_for("acln.ro").unwrap_err();
        assert_eq!(err.to_string(), "acln.ro is not covered by acln.ro: no child segment");
    }
}
