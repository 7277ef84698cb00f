//! Documentation redirects.
//!
//! # Responsibilities
//! - Derive the documentation URL for a request (`https://{docs}/{host}/{path}`)
//! - Answer with a 302 carrying a small HTML link document
//!
//! # Design Decisions
//! - The vanity host becomes the first path element at the documentation site
//! - All-or-nothing: the document is rendered before the status and headers
//!   are committed; a render failure yields a 500 and nothing else

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use url::Url;

use crate::http::response::{buffered_html, internal_error};
use crate::render::Renderer;
use crate::routing::path;

/// Builds redirects to the documentation site.
#[derive(Debug, Clone)]
pub struct RedirectBuilder {
    base: Url,
}

impl RedirectBuilder {
    /// Create a builder redirecting to `https://{docs_host}`.
    pub fn new(docs_host: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(&format!("https://{docs_host}/"))?;
        Ok(Self { base })
    }

    /// The documentation URL for a request to `host` and `url_path`.
    pub fn target(&self, host: &str, url_path: &str) -> Url {
        let mut target = self.base.clone();
        target.set_path(&path::effective_path(host, url_path));
        target
    }

    /// Redirect a request for `host` and `url_path` to its documentation.
    pub fn redirect(&self, renderer: &Renderer, host: &str, url_path: &str) -> Response {
        let target = self.target(host, url_path);

        let location = match HeaderValue::from_str(target.as_str()) {
            Ok(v) => v,
            Err(e) => return internal_error(&e),
        };

        let mut response = buffered_html(StatusCode::FOUND, |buf| {
            renderer.render_redirect(target.as_str(), buf)
        });
        if response.status() == StatusCode::FOUND {
            response.headers_mut().insert(header::LOCATION, location);
        }
        response
    }
}
