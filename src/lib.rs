//! Vanity import path server library.
//!
//! Resolves import paths served from a custom domain to their real
//! repositories and answers with `go-import` meta tag documents.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;

pub use config::VanityConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use render::Renderer;
pub use routing::{MappingRouter, PathMapping, ResolvedTag};
