//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject mapping roots that could never match a cleaned request path
//! - Validate addresses, hosts and value ranges
//! - Detect conflicting mappings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: VanityConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::VanityConfig;
use crate::routing::MatchMode;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mapping #{index}: `{field}` must not be empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("mapping #{index}: root `{from}` is not a clean import path")]
    UncleanRoot { index: usize, from: String },

    #[error("mapping #{index}: duplicate {mode} mapping for `{from}`")]
    DuplicateMapping {
        index: usize,
        from: String,
        mode: MatchMode,
    },

    #[error("invalid {field} address `{value}`")]
    InvalidAddress { field: &'static str, value: String },

    #[error("invalid documentation host `{0}`")]
    InvalidDocsHost(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &VanityConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen: HashSet<(&str, MatchMode)> = HashSet::new();

    for (index, m) in config.mappings.iter().enumerate() {
        for (field, value) in [("from", &m.from), ("to", &m.to), ("vcs", &m.vcs)] {
            if value.trim().is_empty() {
                errors.push(ValidationError::EmptyField { index, field });
            }
        }

        if !m.from.is_empty() && !is_clean_root(&m.from) {
            errors.push(ValidationError::UncleanRoot {
                index,
                from: m.from.clone(),
            });
        }

        if !seen.insert((m.from.as_str(), m.mode)) {
            errors.push(ValidationError::DuplicateMapping {
                index,
                from: m.from.clone(),
                mode: m.mode,
            });
        }
    }

    check_address(&mut errors, "listener", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(&mut errors, "metrics", &config.observability.metrics_address);
    }

    let docs_host = config.docs.host.trim();
    let docs_ok = !docs_host.is_empty()
        && !docs_host.contains('/')
        && url::Url::parse(&format!("https://{docs_host}/")).is_ok();
    if !docs_ok {
        errors.push(ValidationError::InvalidDocsHost(config.docs.host.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A root is clean when it has no leading or trailing slash, no empty
/// elements and no `.`/`..` elements, i.e. it equals its own cleaned form.
fn is_clean_root(from: &str) -> bool {
    from.split('/').all(|e| !e.is_empty() && e != "." && e != "..")
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
