//! HTTP gateway to the Brickset API.
//!
//! Issues GET requests to `{base_url}/{endpoint}` with the API key added to
//! every call, rejects non-success statuses through one shared check, and
//! parses the XML envelope into one [`Fields`] map per result element.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::decode::Fields;
use crate::error::{BricksetError, Result};
use crate::models::{RelatedFetch, Review};
use crate::queries;

/// Query parameters for one request, in the order they are sent.
pub type Params = Vec<(&'static str, String)>;

/// Owns the HTTP client, base URL and API key.
///
/// Immutable after construction; shared behind an `Arc` by the client facade
/// and by every set it returns.
pub struct Gateway {
    base_url: String,
    api_key: String,
    client: Client,
}

impl Gateway {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// GET an endpoint and return the response body after the status check.
    ///
    /// `apiKey` is prepended to `params`.
    pub fn get_text(&self, endpoint: &str, params: Params) -> Result<String> {
        let mut query: Params = Vec::with_capacity(params.len() + 1);
        query.push(("apiKey", self.api_key.clone()));
        query.extend(params);

        let url = self.endpoint_url(endpoint);
        let resp = self.client.get(&url).query(&query).send()?;
        let status = resp.status();
        let body = resp.text()?;
        debug!(endpoint, status = status.as_u16(), bytes = body.len(), "Brickset response");

        check_status(status, &body)?;
        Ok(body)
    }

    /// GET an endpoint and decode each child of the XML root element.
    pub fn get_rows(&self, endpoint: &str, params: Params) -> Result<Vec<Fields>> {
        let body = self.get_text(endpoint, params)?;
        parse_rows(&body)
    }

    /// GET an endpoint whose response is a single `<string>` element.
    pub fn get_string(&self, endpoint: &str, params: Params) -> Result<String> {
        let body = self.get_text(endpoint, params)?;
        parse_string(&body)
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl RelatedFetch for Gateway {
    fn additional_images(&self, set_id: i64) -> Result<Vec<String>> {
        queries::media::fetch_additional_images(self, set_id)
    }

    fn reviews(&self, set_id: i64) -> Result<Vec<Review>> {
        queries::reviews::fetch_reviews(self, set_id)
    }

    fn instructions(&self, set_id: i64) -> Result<Vec<String>> {
        queries::media::fetch_instructions(self, set_id)
    }
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

/// Accept 2xx and 3xx; anything else becomes `InvalidRequest` carrying the
/// server's error text.
pub fn check_status(status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() || status.is_redirection() {
        return Ok(());
    }
    let message = error_message(body);
    warn!(status = status.as_u16(), %message, "Brickset rejected request");
    Err(BricksetError::InvalidRequest {
        status: status.as_u16(),
        message,
    })
}

/// The first non-empty line of an error body, trimmed.
pub fn error_message(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Decode every element child of the document root.
pub fn parse_rows(xml: &str) -> Result<Vec<Fields>> {
    let doc = roxmltree::Document::parse(xml)?;
    Ok(doc
        .root_element()
        .children()
        .filter(|node| node.is_element())
        .map(Fields::from_node)
        .collect())
}

/// Text content of the document root, trimmed.
pub fn parse_string(xml: &str) -> Result<String> {
    let doc = roxmltree::Document::parse(xml)?;
    Ok(doc.root_element().text().unwrap_or_default().trim().to_string())
}
