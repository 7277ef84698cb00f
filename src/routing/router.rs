//! Mapping lookup.
//!
//! # Responsibilities
//! - Store compiled matchers
//! - Resolve an effective import path against them in priority order
//! - Return the resolved tag or an explicit miss
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over mappings (acceptable for typical vanity domains)
//! - Longer roots are tried first so specific mappings shadow wildcards

use crate::config::MappingConfig;
use crate::routing::matcher::{matcher_for, MatchMode, Matcher, ResolvedTag};

/// Resolves import paths against the configured mappings.
#[derive(Debug, Default)]
pub struct MappingRouter {
    matchers: Vec<Box<dyn Matcher>>,
}

impl MappingRouter {
    /// Compile the router from mapping configuration.
    ///
    /// Matchers are ordered by root length, longest first; on equal length
    /// exact mappings come before wildcards. Otherwise configuration order
    /// is kept.
    pub fn from_config(configs: Vec<MappingConfig>) -> Self {
        let mut matchers: Vec<Box<dyn Matcher>> = configs
            .into_iter()
            .map(|c| {
                let mode = c.mode;
                matcher_for(c.into_mapping(), mode)
            })
            .collect();

        matchers.sort_by(|a, b| {
            b.mapping()
                .from
                .len()
                .cmp(&a.mapping().from.len())
                .then_with(|| mode_rank(a.mode()).cmp(&mode_rank(b.mode())))
        });

        for m in &matchers {
            tracing::debug!(
                from = %m.mapping().from,
                to = %m.mapping().to,
                vcs = %m.mapping().vcs,
                mode = %m.mode(),
                "Mapping compiled"
            );
        }

        Self { matchers }
    }

    /// Resolve `path` to the tag of the first mapping that covers it.
    pub fn resolve(&self, path: &str) -> Option<ResolvedTag> {
        for m in &self.matchers {
            match m.resolve(path) {
                Ok(tag) => return Some(tag),
                Err(miss) => {
                    tracing::trace!(path = %miss.path, from = %miss.from, reason = %miss.reason, "Mapping skipped");
                }
            }
        }
        None
    }

    /// Number of compiled mappings.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

fn mode_rank(mode: MatchMode) -> u8 {
    match mode {
        MatchMode::Exact => 0,
        MatchMode::Wildcard => 1,
    }
}
