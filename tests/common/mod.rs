//! Shared utilities for integration testing.

use std::net::SocketAddr;

use axum::{body::Body, http::Request, response::Response, Router};
use tokio::net::TcpListener;
use tower::ServiceExt;
use vanity_server::config::{parse_config, VanityConfig};
use vanity_server::{HttpServer, Shutdown};

/// Configuration used across the integration tests.
pub const TEST_CONFIG: &str = r#"
[docs]
host = "pkg.go.dev"

[[mappings]]
from = "acln.ro/foo"
to = "https://github.com/acln0/foo"

[[mappings]]
from = "acln.ro"
to = "https://github.com/acln0"
mode = "wildcard"
"#;

pub fn test_config() -> VanityConfig {
    parse_config(TEST_CONFIG).expect("test config is valid")
}

/// Build the fully layered router for `config`.
pub fn app(config: VanityConfig) -> Router {
    HttpServer::new(config).expect("server builds").router()
}

/// Send one GET request for `host` + `path_and_query` through `app`.
pub async fn get(app: Router, host: &str, path_and_query: &str) -> Response {
    let request = Request::builder()
        .uri(path_and_query)
        .header("Host", host)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Start a server on an ephemeral port. Returns its address.
#[allow(dead_code)]
pub async fn start_server(config: VanityConfig, shutdown: &Shutdown) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    addr
}
