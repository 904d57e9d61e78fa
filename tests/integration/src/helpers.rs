//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers over the in-memory store and
//! making HTTP requests against them.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chatroom_api::{create_app, AppState};
use chatroom_common::AppConfig;
use chatroom_db::MemoryStore;
use chatroom_service::{PresenceSweeper, ServiceContext};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Name of the header carrying the caller's participant name
pub const USER: &str = "user";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an empty in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(AppConfig::in_memory()).await
    }

    /// Start a test server with custom config
    ///
    /// The store backend setting is ignored; the server always runs over a
    /// fresh [`MemoryStore`] that the test can inspect.
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let store = Arc::new(MemoryStore::new());
        let context = ServiceContext::in_memory(store.clone(), config.presence.clone());
        let state = AppState::new(context, config);

        // Build application
        let app = create_app(state.clone());

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            state,
            store,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The sweeper bound to this server's store
    pub fn sweeper(&self) -> &Arc<PresenceSweeper> {
        self.state.sweeper()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn as_user(request: RequestBuilder, user: Option<&str>) -> RequestBuilder {
        match user {
            Some(name) => request.header(USER, name),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with an optional `user` header
    pub async fn get_as(&self, path: &str, user: Option<&str>) -> Result<Response> {
        let request = Self::as_user(self.client.get(self.url(path)), user);
        Ok(request.send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with a raw body
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body and an optional `user` header
    pub async fn post_as<T: Serialize>(
        &self,
        path: &str,
        user: Option<&str>,
        body: &T,
    ) -> Result<Response> {
        let request = Self::as_user(self.client.post(self.url(path)), user);
        Ok(request.json(body).send().await?)
    }

    /// Make a bodiless POST request with an optional `user` header
    pub async fn post_empty_as(&self, path: &str, user: Option<&str>) -> Result<Response> {
        let request = Self::as_user(self.client.post(self.url(path)), user);
        Ok(request.send().await?)
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
