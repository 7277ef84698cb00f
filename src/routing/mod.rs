//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (host, path)
//!     → path.rs (effective import path: host + path, cleaned)
//!     → router.rs (ordered mapping lookup)
//!     → matcher.rs (exact or wildcard strategy)
//!     → Return: ResolvedTag or no match
//!
//! Router Compilation (at startup):
//!     MappingConfig[]
//!     → Sort by specificity (longest root first)
//!     → Build one matcher per mapping
//!     → Freeze as immutable MappingRouter
//! ```
//!
//! # Design Decisions
//! - Mappings compiled at startup, immutable at runtime
//! - Plain string prefix matching, no regex
//! - Deterministic: same input always resolves to the same tag
//! - First match wins, and an unmatched path never falls back to a default

pub mod matcher;
pub mod path;
pub mod router;

pub use matcher::{MatchMode, Matcher, NoMatch, NoMatchReason, PathMapping, ResolvedTag};
pub use router::MappingRouter;
