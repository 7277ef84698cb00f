//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, handler)
//!     → request.rs (request ID, host extraction, go-get detection)
//!     → routing layer resolves the import path
//!     → response.rs (buffered HTML documents, error responses)
//!     → redirect.rs (documentation redirects for browsers)
//!     → Send to client
//! ```

pub mod redirect;
pub mod request;
pub mod response;
pub mod server;

pub use redirect::RedirectBuilder;
pub use request::{is_go_get, request_host, MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
