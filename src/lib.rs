//! Brickset SDK for Rust.
//!
//! Provides a blocking client for the Brickset catalog API: search LEGO sets,
//! look them up by id, and read their reviews, additional images and
//! building instructions. Responses are XML and are decoded into typed
//! models by field name.
//!
//! # Quick start
//!
//! ```no_run
//! use brickset_sdk::{Brickset, SearchSetsParams};
//!
//! let brickset = Brickset::builder().api_key("my-api-key").build().unwrap();
//!
//! // Search sets
//! let params = SearchSetsParams {
//!     theme: Some("Technic".into()),
//!     order_by: Some("PiecesDESC".into()),
//!     ..Default::default()
//! };
//! let sets = brickset.sets().search(&params, None).unwrap();
//!
//! // Related collections are fetched on first access, then cached
//! for review in sets[0].reviews().unwrap() {
//!     println!("{:?}: {:?}", review.author, review.title);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod decode;
pub mod error;
pub mod gateway;
pub mod lazy;
pub mod models;
pub mod order;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncBrickset;
pub use decode::{Fields, Lenient};
pub use error::{BricksetError, Result};
pub use gateway::Gateway;
pub use lazy::FetchOnce;
pub use models::{LegoSet, RelatedFetch, Review, Session};
pub use order::{OrderBy, SortField};
pub use queries::SearchSetsParams;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// BricksetBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Brickset`] client.
///
/// Use [`Brickset::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](BricksetBuilder::build) to create the client.
#[derive(Debug, Clone)]
pub struct BricksetBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    verify_key: bool,
}

impl Default for BricksetBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            verify_key: true,
        }
    }
}

impl BricksetBuilder {
    /// Set the API key.
    ///
    /// If not set, the key is read from the `BRICKSET_API_KEY` environment
    /// variable at build time.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base URL. Defaults to the public v2 endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether [`build()`](Self::build) checks the key against the service.
    ///
    /// Defaults to `true`.
    pub fn verify_key(mut self, verify: bool) -> Self {
        self.verify_key = verify;
        self
    }

    /// Build the client.
    ///
    /// Unless key verification was disabled, this issues one `checkKey`
    /// request and fails with [`BricksetError::InvalidApiKey`] if the
    /// service rejects the key.
    pub fn build(self) -> Result<Brickset> {
        let api_key = self
            .api_key
            .or_else(config::api_key_from_env)
            .ok_or_else(|| {
                BricksetError::InvalidArgument(format!(
                    "no API key given and {} is not set",
                    config::API_KEY_ENV
                ))
            })?;
        let gw = Gateway::new(&self.base_url, &api_key, self.timeout)?;
        let brickset = Brickset { gw: Arc::new(gw) };
        if self.verify_key {
            brickset.validate_key()?;
        }
        Ok(brickset)
    }
}

// ---------------------------------------------------------------------------
// Brickset
// ---------------------------------------------------------------------------

/// The main entry point for the Brickset SDK.
///
/// Wraps a shared [`Gateway`] and exposes endpoint families as lightweight
/// borrowing query interfaces. Cloning is cheap; clones share the gateway.
///
/// Created via [`Brickset::builder()`] or [`Brickset::from_env()`].
#[derive(Debug, Clone)]
pub struct Brickset {
    gw: Arc<Gateway>,
}

impl Brickset {
    /// Create a new builder for configuring the client.
    pub fn builder() -> BricksetBuilder {
        BricksetBuilder::default()
    }

    /// Build a client with default settings and the key from
    /// `BRICKSET_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the key validation and login interface.
    pub fn auth(&self) -> queries::auth::AuthQuery<'_> {
        queries::auth::AuthQuery::new(&self.gw)
    }

    /// Access the set query interface.
    pub fn sets(&self) -> queries::sets::SetQuery<'_> {
        queries::sets::SetQuery::new(&self.gw)
    }

    /// Access the review query interface.
    pub fn reviews(&self) -> queries::reviews::ReviewQuery<'_> {
        queries::reviews::ReviewQuery::new(&self.gw)
    }

    /// Access the additional image and instruction interface.
    pub fn media(&self) -> queries::media::MediaQuery<'_> {
        queries::media::MediaQuery::new(&self.gw)
    }

    // -- Shortcuts ---------------------------------------------------------

    /// Check that the API key is accepted by the service.
    pub fn validate_key(&self) -> Result<()> {
        self.auth().validate_key()
    }

    /// Log in and return a [`Session`] for user-scoped queries.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        self.auth().login(username, password)
    }

    /// Search sets. See [`SetQuery::search`](queries::sets::SetQuery::search).
    pub fn search(
        &self,
        params: &SearchSetsParams,
        session: Option<&Session>,
    ) -> Result<Vec<LegoSet>> {
        self.sets().search(params, session)
    }

    /// Get one set by id, or [`BricksetError::InvalidSetId`].
    pub fn get_set(&self, set_id: i64, session: Option<&Session>) -> Result<LegoSet> {
        self.sets().get(set_id, session)
    }

    /// Return a reference to the underlying [`Gateway`] for advanced usage.
    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gw
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Brickset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Brickset(base_url={})", self.gw.base_url())
    }
}
