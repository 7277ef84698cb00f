//! Document rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     templates.rs (fixed template sources)
//!     → Renderer::new (compile once, fatal on error)
//!     → shared via Arc, never mutated
//!
//! Per request:
//!     ResolvedTag → Renderer::render_tag → go-import document
//!     target URL  → Renderer::render_redirect → redirect document
//! ```
//!
//! # Design Decisions
//! - Every interpolated value is attribute-escaped (see escape.rs)
//! - Rendering writes to any `io::Write`; callers buffer before committing a response
//! - The only per-request failure is the sink rejecting a write

pub mod escape;
pub mod templates;

use std::io::Write;

use tera::{Context, Tera};
use thiserror::Error;

use crate::routing::ResolvedTag;
use templates::{GO_IMPORT, GO_IMPORT_TEMPLATE, REDIRECT, REDIRECT_TEMPLATE};

/// Errors raised while compiling or rendering documents.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A built-in template failed to parse. Fatal at startup.
    #[error("failed to compile template {name}: {source}")]
    Compile {
        name: &'static str,
        #[source]
        source: tera::Error,
    },

    /// Rendering failed, usually because the output sink rejected a write.
    #[error("failed to render {name}: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: tera::Error,
    },
}

/// Compiled document templates.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Compile the built-in templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.set_escape_fn(escape::escape_attr);

        for (name, source) in [(GO_IMPORT, GO_IMPORT_TEMPLATE), (REDIRECT, REDIRECT_TEMPLATE)] {
            tera.add_raw_template(name, source)
                .map_err(|source| RenderError::Compile { name, source })?;
        }

        tracing::debug!(templates = 2, "Templates compiled");
        Ok(Self { tera })
    }

    /// Render the HTML document carrying the `go-import` meta tag for `tag`.
    pub fn render_tag<W: Write>(&self, tag: &ResolvedTag, w: W) -> Result<(), RenderError> {
        let context = Context::from_serialize(tag)
            .map_err(|source| RenderError::Render { name: GO_IMPORT, source })?;
        self.render(GO_IMPORT, &context, w)
    }

    /// Render the HTML document linking to documentation at `target`.
    pub fn render_redirect<W: Write>(&self, target: &str, w: W) -> Result<(), RenderError> {
        let mut context = Context::new();
        context.insert("url", target);
        self.render(REDIRECT, &context, w)
    }

    fn render<W: Write>(&self, name: &'static str, context: &Context, w: W) -> Result<(), RenderError> {
        self.tera
            .render_to(name, context, w)
            .map_err(|source| RenderError::Render { name, source })
    }
}
