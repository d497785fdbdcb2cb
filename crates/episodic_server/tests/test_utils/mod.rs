//! Shared helpers for HTTP tests.

#![allow(dead_code)]

mod mock_prompter;

pub use mock_prompter::{FailingPrompter, StaticPrompter, TEST_PROMPTER_OUTPUT};

use axum::http::StatusCode;
use episodic_interface::{EpisodeStore, Prompter};
use episodic_server::{AppState, create_router, default_registry};
use serde_json::Value;
use std::sync::Arc;

/// A router served on an ephemeral local port.
#[derive(Debug, Clone)]
pub struct TestServer {
    base_url: String,
    client: reqwest::Client,
}

/// Serve `store` and `prompter` with the default registry.
pub async fn spawn_app(store: Arc<dyn EpisodeStore>, prompter: Arc<dyn Prompter>) -> TestServer {
    let router = create_router(AppState::new(store, prompter, default_registry()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
    }
}

/// Send a GET request.
pub async fn get(app: &TestServer, path: &str) -> (StatusCode, Vec<u8>) {
    let request = app.client.get(format!("{}{}", app.base_url, path));
    send(request).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: &TestServer, path: &str, body: &Value) -> (StatusCode, Vec<u8>) {
    post_raw(app, path, body.to_string()).await
}

/// Send a POST request with a raw body labelled as JSON.
pub async fn post_raw(
    app: &TestServer,
    path: &str,
    body: impl Into<String>,
) -> (StatusCode, Vec<u8>) {
    let request = app
        .client
        .post(format!("{}{}", app.base_url, path))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body.into());
    send(request).await
}

async fn send(request: reqwest::RequestBuilder) -> (StatusCode, Vec<u8>) {
    let response = request.send().await.unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let bytes = response.bytes().await.unwrap();
    (status, bytes.to_vec())
}

/// Parse a response body as JSON.
pub fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}
