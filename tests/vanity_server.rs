//! End-to-end behaviour of the vanity server.

use axum::http::{header, StatusCode};
use vanity_server::Shutdown;

mod common;

use common::{app, body_text, get, test_config};

#[tokio::test]
async fn test_go_get_exact_mapping() {
    for path in ["/foo?go-get=1", "/foo/bar?go-get=1", "/foo/bar/baz?go-get=1"] {
        let response = get(app(test_config()), "acln.ro", path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");

        let body = body_text(response).await;
        assert!(
            body.contains(r#"<meta name="go-import" content="acln.ro/foo git https://github.com/acln0/foo">"#),
            "{path}: {body}"
        );
    }
}

#[tokio::test]
async fn test_go_get_wildcard_mapping() {
    let response = get(app(test_config()), "acln.ro", "/bar/baz?go-get=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"content="acln.ro/bar git https://github.com/acln0/bar""#));
}

#[tokio::test]
async fn test_go_get_unmapped_is_not_found() {
    for (host, path) in [("acln.ro", "/?go-get=1"), ("example.com", "/foo?go-get=1")] {
        let response = get(app(test_config()), host, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{host}{path}");
    }
}

#[tokio::test]
async fn test_browser_is_redirected_to_docs() {
    let response = get(app(test_config()), "acln.ro", "/foo/bar").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://pkg.go.dev/acln.ro/foo/bar"
    );
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");

    let body = body_text(response).await;
    assert!(body.contains("Redirecting to documentation at https://pkg.go.dev/acln.ro/foo/bar"));
}

#[tokio::test]
async fn test_redirect_uses_configured_docs_host() {
    let mut config = test_config();
    config.docs.host = "docs-host".into();

    let response = get(app(config), "acln.ro", "/foo").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "https://docs-host/acln.ro/foo");
}

#[tokio::test]
async fn test_go_get_other_value_redirects() {
    let response = get(app(test_config()), "acln.ro", "/foo?go-get=0").await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let response = get(app(test_config()), "acln.ro", "/foo?go-get=1").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_identical_requests_yield_identical_documents() {
    let a = body_text(get(app(test_config()), "acln.ro", "/foo/x?go-get=1").await).await;
    let b = body_text(get(app(test_config()), "acln.ro", "/foo/x?go-get=1").await).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_serves_over_tcp() {
    let shutdown = Shutdown::new();
    let addr = common::start_server(test_config(), &shutdown).await;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap();

    let res = client
        .get(format!("http://{addr}/foo?go-get=1"))
        .header("Host", "acln.ro")
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"content="acln.ro/foo git https://github.com/acln0/foo""#));

    let res = client
        .get(format!("http://{addr}/foo"))
        .header("Host", "acln.ro")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "https://pkg.go.dev/acln.ro/foo");

    shutdown.trigger();
}
