//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{MatchMode, PathMapping};

/// Root configuration for the vanity import server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct VanityConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Documentation site that browsers are redirected to.
    pub docs: DocsConfig,

    /// Import path mappings served by this host.
    pub mappings: Vec<MappingConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Documentation redirect configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Host of the documentation site (always reached over https).
    pub host: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            host: "pkg.go.dev".to_string(),
        }
    }
}

/// A single import path mapping.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MappingConfig {
    /// Import path root (e.g., "acln.ro/foo" or "acln.ro").
    pub from: String,

    /// Repository root (e.g., "https://github.com/acln0/foo").
    pub to: String,

    /// Version control system (default: "git").
    #[serde(default = "default_vcs")]
    pub vcs: String,

    /// Matching strategy (default: exact).
    #[serde(default)]
    pub mode: MatchMode,
}

impl MappingConfig {
    pub fn into_mapping(self) -> PathMapping {
        PathMapping::new(self.vcs, self.from, self.to)
    }
}

fn default_vcs() -> String {
    "git".to_string()
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
