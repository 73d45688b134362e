use httpmock::prelude::*;
use serde_json::Value;

use tunehint::{config::ProviderConfig, server, utils};

fn provider_config(server: &MockServer, with_credentials: bool) -> ProviderConfig {
    ProviderConfig {
        client_id: with_credentials.then(|| "test-client-id".to_string()),
        client_secret: with_credentials.then(|| "test-client-secret".to_string()),
        token_url: server.url("/api/token"),
    }
}

// Serves the proxy app on an ephemeral port and returns its base URL.
async fn spawn_proxy(config: ProviderConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = server::app(config.into_shared());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn missing_credentials_fail_without_upstream_call() {
    let upstream = MockServer::start_async().await;
    let exchange = upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/token");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "access_token": "unreachable" }));
        })
        .await;

    let base = spawn_proxy(provider_config(&upstream, false)).await;
    let res = reqwest::get(format!("{}/api/spotify-token", base))
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Spotify credentials are not configured on the server."
    );

    exchange.assert_calls_async(0).await;
}

#[tokio::test]
async fn successful_exchange_returns_access_token() {
    let upstream = MockServer::start_async().await;
    let exchange = upstream
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/token")
                .header(
                    "authorization",
                    utils::basic_auth_header("test-client-id", "test-client-secret"),
                )
                .header("content-type", "application/x-www-form-urlencoded")
                .body("grant_type=client_credentials");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "access_token": "T",
                    "token_type": "Bearer",
                    "expires_in": 3600
                }));
        })
        .await;

    let base = spawn_proxy(provider_config(&upstream, true)).await;
    let res = reqwest::get(format!("{}/api/spotify-token", base))
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["access_token"], "T");

    exchange.assert_calls_async(1).await;
}

#[tokio::test]
async fn upstream_failure_yields_generic_error() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/token");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "error": "invalid_client",
                    "error_description": "Invalid client secret"
                }));
        })
        .await;

    let base = spawn_proxy(provider_config(&upstream, true)).await;
    let res = reqwest::get(format!("{}/api/spotify-token", base))
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let text = res.text().await.unwrap();

    // Generic message only; upstream diagnostics must not leak
    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["error"], "Failed to retrieve Spotify token.");
    assert!(!text.contains("invalid_client"));
    assert!(!text.contains("Invalid client secret"));
}

#[tokio::test]
async fn health_reports_ok() {
    let upstream = MockServer::start_async().await;
    let base = spawn_proxy(provider_config(&upstream, true)).await;

    let res = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
