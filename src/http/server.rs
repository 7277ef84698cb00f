//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the vanity handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch requests to the mapping router
//! - Answer go-get requests with go-import documents and browsers with
//!   documentation redirects

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::VanityConfig;
use crate::http::redirect::RedirectBuilder;
use crate::http::request::{is_go_get, request_host, MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::{buffered_html, not_found};
use crate::observability::metrics;
use crate::render::{RenderError, Renderer};
use crate::routing::{path, MappingRouter};

/// Errors raised while assembling the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("invalid documentation host `{host}`: {source}")]
    DocsHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<MappingRouter>,
    pub renderer: Arc<Renderer>,
    pub redirects: Arc<RedirectBuilder>,
}

/// HTTP server for vanity import paths.
pub struct HttpServer {
    router: Router,
    config: VanityConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Templates are compiled here; a failure is a startup error.
    pub fn new(config: VanityConfig) -> Result<Self, ServerError> {
        let mapping_router = Arc::new(MappingRouter::from_config(config.mappings.clone()));
        let renderer = Arc::new(Renderer::new()?);
        let redirects = RedirectBuilder::new(&config.docs.host).map_err(|source| {
            ServerError::DocsHost {
                host: config.docs.host.clone(),
                source,
            }
        })?;

        let state = AppState {
            router: mapping_router,
            renderer,
            redirects: Arc::new(redirects),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &VanityConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(vanity_handler))
            .route("/{*path}", get(vanity_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for serving or driving directly.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mappings = self.config.mappings.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &VanityConfig {
        &self.config
    }
}

/// Main vanity handler.
/// Resolves the effective import path, then serves the go-import document
/// or redirects to documentation.
async fn vanity_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let host = request_host(&request);
    let url_path = request.uri().path();
    let import_path = path::effective_path(host, url_path);
    let go_get = is_go_get(request.uri().query());

    tracing::debug!(
        request_id = %request_id,
        import_path = %import_path,
        go_get,
        "Resolving import path"
    );

    let Some(tag) = state.router.resolve(&import_path) else {
        tracing::info!(request_id = %request_id, import_path = %import_path, "No mapping matched");
        let response = not_found(&import_path);
        metrics::record_request("unmatched", response.status().as_u16(), start_time);
        return response;
    };

    let (outcome, response) = if go_get {
        let response = buffered_html(StatusCode::OK, |buf| state.renderer.render_tag(&tag, buf));
        ("go_get", response)
    } else {
        ("redirect", state.redirects.redirect(&state.renderer, host, url_path))
    };

    tracing::debug!(
        request_id = %request_id,
        import_path = %import_path,
        root = %tag.import_path,
        repo = %tag.repo,
        status = response.status().as_u16(),
        "Import path resolved"
    );
    metrics::record_request(outcome, response.status().as_u16(), start_time);
    response
}
