//! Async wrapper around [`Brickset`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use brickset_sdk::AsyncBrickset;
//!
//! #[tokio::main]
//! async fn main() {
//!     let brickset = AsyncBrickset::builder().api_key("my-api-key").build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let set = brickset.run(|b| b.sets().get(6905, None)).await.unwrap();
//!
//!     // Convenience method
//!     let recent = brickset.recently_updated(60).await.unwrap();
//! }
//! ```

use std::time::Duration;

use crate::error::{BricksetError, Result};
use crate::models::{LegoSet, Session};
use crate::queries::SearchSetsParams;
use crate::{Brickset, BricksetBuilder};

// ---------------------------------------------------------------------------
// AsyncBricksetBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncBrickset`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncBricksetBuilder {
    inner: BricksetBuilder,
}

impl AsyncBricksetBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.inner = self.inner.api_key(key);
        self
    }

    /// Override the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Whether `build()` checks the key against the service.
    pub fn verify_key(mut self, verify: bool) -> Self {
        self.inner = self.inner.verify_key(verify);
        self
    }

    /// Build the async client.
    ///
    /// Initialization (including the key check) runs on the blocking thread
    /// pool so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncBrickset> {
        let inner = self.inner;
        let brickset = tokio::task::spawn_blocking(move || inner.build())
            .await
            .map_err(|e| BricksetError::InvalidArgument(format!("Task join error: {e}")))??;
        Ok(AsyncBrickset { inner: brickset })
    }
}

// ---------------------------------------------------------------------------
// AsyncBrickset
// ---------------------------------------------------------------------------

/// Async wrapper around [`Brickset`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The wrapped client is shared, not
/// locked, since the gateway is immutable after construction.
///
/// The blocking HTTP client must not be dropped on an async worker thread;
/// call [`close()`](Self::close) to release it on the blocking pool.
pub struct AsyncBrickset {
    inner: Brickset,
}

impl AsyncBrickset {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncBricksetBuilder {
        AsyncBricksetBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&Brickset` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Brickset) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let brickset = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&brickset))
            .await
            .map_err(|e| BricksetError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Check that the API key is accepted by the service.
    pub async fn validate_key(&self) -> Result<()> {
        self.run(|b| b.validate_key()).await
    }

    /// Log in and return a [`Session`].
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let username = username.to_string();
        let password = password.to_string();
        self.run(move |b| b.login(&username, &password)).await
    }

    /// Search sets asynchronously.
    pub async fn search(
        &self,
        params: &SearchSetsParams,
        session: Option<&Session>,
    ) -> Result<Vec<LegoSet>> {
        let params = params.clone();
        let session = session.cloned();
        self.run(move |b| b.search(&params, session.as_ref())).await
    }

    /// Get one set by id asynchronously.
    pub async fn get_set(&self, set_id: i64, session: Option<&Session>) -> Result<LegoSet> {
        let session = session.cloned();
        self.run(move |b| b.get_set(set_id, session.as_ref())).await
    }

    /// Sets updated within the last `minutes_ago` minutes.
    pub async fn recently_updated(&self, minutes_ago: u32) -> Result<Vec<LegoSet>> {
        self.run(move |b| b.sets().recently_updated(minutes_ago)).await
    }

    /// Close the client, dropping the blocking HTTP client on the blocking
    /// thread pool.
    pub async fn close(self) -> Result<()> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || drop(inner))
            .await
            .map_err(|e| BricksetError::InvalidArgument(format!("Task join error: {e}")))
    }
}
