//! Integration tests for the pizzeria backend.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pizzeria-integration-tests
//! ```
//!
//! Each test starts its own server on an ephemeral port with a private
//! catalog file and static directory under the system temp dir, so tests
//! can run in parallel.
//!
//! # Test Categories
//!
//! - `pizzas` - Catalog endpoints
//! - `cart` - Cart endpoints and inactivity expiry
//! - `http` - Static front-end, CORS headers, request ids

#![allow(clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use pizzeria_storefront::config::{DEFAULT_CART_TTL_SECS, StorefrontConfig};
use pizzeria_storefront::services::ExpiryTask;
use pizzeria_storefront::state::AppState;
use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Markup written to the test front-end's `index.html`.
pub const INDEX_HTML: &str = "<!doctype html><title>Pizzeria</title><div id=\"root\"></div>";

/// A running server plus the client and paths a test needs.
pub struct TestServer {
    pub client: Client,
    pub base_url: String,
    pub state: AppState,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    expiry: Option<ExpiryTask>,
}

impl TestServer {
    /// Start a server with the default 30 minute cart window.
    pub async fn start() -> Self {
        Self::start_with(Duration::from_secs(DEFAULT_CART_TTL_SECS), None).await
    }

    /// Start a server whose cart expires after `cart_ttl`, without the
    /// background expiry task.
    pub async fn start_with_ttl(cart_ttl: Duration) -> Self {
        Self::start_with(cart_ttl, None).await
    }

    /// Start a server whose cart expires after `cart_ttl`, with the background
    /// expiry task running.
    pub async fn start_with_expiry(cart_ttl: Duration) -> Self {
        Self::start_with(cart_ttl, None).await.with_expiry_task()
    }

    /// Start a server whose catalog file is pre-filled with `catalog`.
    pub async fn start_with_catalog(catalog: &Value) -> Self {
        Self::start_with(Duration::from_secs(DEFAULT_CART_TTL_SECS), Some(catalog)).await
    }

    async fn start_with(cart_ttl: Duration, catalog: Option<&Value>) -> Self {
        let root = std::env::temp_dir().join(format!("pizzeria-it-{}", Uuid::new_v4()));
        let data_file = root.join("data").join("pizzas.json");
        let static_dir = root.join("build");

        tokio::fs::create_dir_all(static_dir.join("assets"))
            .await
            .expect("Failed to create static dir");
        tokio::fs::write(static_dir.join("index.html"), INDEX_HTML)
            .await
            .expect("Failed to write index.html");
        tokio::fs::write(static_dir.join("assets").join("app.js"), "console.log('hi');")
            .await
            .expect("Failed to write asset");

        if let Some(catalog) = catalog {
            tokio::fs::create_dir_all(data_file.parent().expect("data file has a parent"))
                .await
                .expect("Failed to create data dir");
            tokio::fs::write(&data_file, catalog.to_string())
                .await
                .expect("Failed to write catalog");
        }

        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("valid loopback address"),
            port: 0,
            data_file: data_file.clone(),
            static_dir: static_dir.clone(),
            cart_ttl,
            sentry_dsn: None,
            sentry_environment: None,
        };

        let state = AppState::new(config.clone())
            .await
            .expect("Failed to create application state");

        let listener = tokio::net::TcpListener::bind(config.socket_addr())
            .await
            .expect("Failed to bind test listener");
        let addr: SocketAddr = listener.local_addr().expect("listener has an address");

        let app = pizzeria_storefront::app(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            state,
            data_file,
            static_dir,
            expiry: None,
        }
    }

    fn with_expiry_task(mut self) -> Self {
        self.expiry = Some(self.state.cart().spawn_expiry());
        self
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /pizzas` with a complete pizza; returns the created pizza.
    pub async fn create_pizza(&self, name: &str, description: &str, price: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/pizzas"))
            .json(&json!({
                "pizza": { "name": name, "description": description, "price": price }
            }))
            .send()
            .await
            .expect("Failed to create pizza");
        assert!(resp.status().is_success(), "create failed: {}", resp.status());

        let body: Value = resp.json().await.expect("Invalid create response");
        body["pizza"].clone()
    }

    /// `GET` a JSON endpoint, returning status and body.
    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, Value) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed");
        let status = resp.status();
        (status, resp.json().await.expect("Invalid JSON response"))
    }

    /// Send a bodiless request with `method`, returning status and JSON body.
    pub async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> (reqwest::StatusCode, Value) {
        let resp = self
            .client
            .request(method, self.url(path))
            .send()
            .await
            .expect("Request failed");
        let status = resp.status();
        (status, resp.json().await.expect("Invalid JSON response"))
    }

    /// Stop the background expiry task, if one was started.
    pub async fn stop_expiry(&mut self) {
        if let Some(task) = self.expiry.take() {
            task.shutdown().await;
        }
    }
}
