//! Response construction.
//!
//! # Responsibilities
//! - Turn fully rendered documents into HTML responses
//! - Map render failures to 500 responses with a diagnostic body
//! - Produce plain-text 404s for unmapped paths
//!
//! # Design Decisions
//! - Bodies are rendered into a buffer before any status or header is set,
//!   so a failed render never leaves a half-written response behind

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::render::RenderError;

/// Content type of every rendered document.
pub const TEXT_HTML: &str = "text/html";

/// Render into a buffer with `render`, then commit the result as an HTML
/// response with `status`.
pub fn buffered_html<F>(status: StatusCode, render: F) -> Response
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), RenderError>,
{
    let mut buf = Vec::new();
    if let Err(e) = render(&mut buf) {
        return internal_error(&e);
    }
    html(status, buf)
}

/// An HTML response with an already rendered body.
pub fn html(status: StatusCode, body: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_HTML));
    response
}

/// A 500 response describing `err`.
pub fn internal_error(err: &dyn std::error::Error) -> Response {
    tracing::error!(error = %err, "Failed to build response");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("internal server error: {err}"),
    )
        .into_response()
}

/// A 404 response for a path no mapping covers.
pub fn not_found(path: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("no vanity mapping for {path}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_html_success() {
        let response = buffered_html(StatusCode::OK, |buf| {
            buf.extend_from_slice(b"<!DOCTYPE html>");
            Ok(())
        });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_HTML);
    }

    #[test]
    fn test_buffered_html_failure_is_500() {
        let response = buffered_html(StatusCode::OK, |buf| {
            buf.extend_from_slice(b"partial");
            Err(RenderError::Render {
                name: "go-import.html",
                source: tera::Error::msg("sink closed"),
            })
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_ne!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static(TEXT_HTML))
        );
    }

    #[test]
    fn test_not_found() {
        let response = not_found("acln.ro/nope");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
