//! Low-level HTTP client — `LoklakHttp`.
//!
//! One method per API endpoint. Each call is a single stateless
//! request/response round trip: build the URL and query string, issue the
//! request, and normalize the response into parsed JSON, raw bytes, or an
//! error-shaped payload. Internal to the SDK — the high-level client wraps
//! this.

use crate::domain::search::{AggregationQuery, SearchQuery};
use crate::domain::vis::{MapParams, MarkdownParams};
use crate::error::{ErrorPayload, HttpError};
use crate::network;

use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::time::Duration;

// Synthesized payload messages. Part of the wire-compatible contract, typos
// included.
const NO_USER_NAME: &str = "No user name given to query. Please check and try again";
const NO_SEARCH_QUERY: &str = "No Query string has been given to run a query for";
const NO_AGGREGATION_QUERY: &str =
    "No Query string has been given to run an aggregation query for";
const NO_ACCOUNT_QUERY: &str = "No Query string has been given to run an query for account";
const SERVER_DOWN: &str = "Something went wrong, Looks like the server is down.";
const ACCOUNT_QUERY_WRONG: &str = "Something went wrong, Looks query is wrong.";
const SETTINGS_RESTRICTED: &str =
    "This API has access restrictions: only localhost clients are granted.";

/// Low-level HTTP client for the loklak REST API.
pub struct LoklakHttp {
    base_url: String,
    admin_url: String,
    client: Client,
}

impl LoklakHttp {
    pub fn new(base_url: &str, admin_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_url: admin_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    // ── Server ───────────────────────────────────────────────────────────

    pub async fn status(&self) -> Result<Value, HttpError> {
        let url = format!("{}/api/status.json", self.base_url);
        self.get_json_or(&url, json!({})).await
    }

    pub async fn hello(&self) -> Result<Value, HttpError> {
        let url = format!("{}/api/hello.json", self.base_url);
        self.get_json_or(&url, json!({})).await
    }

    pub async fn peers(&self) -> Result<Value, HttpError> {
        let url = format!("{}/api/peers.json", self.base_url);
        self.get_json_or(&url, json!({})).await
    }

    pub async fn settings(&self) -> Result<Value, HttpError> {
        let url = format!("{}/api/settings.json", self.base_url);
        self.get_json_or(&url, ErrorPayload::new(SETTINGS_RESTRICTED).into_value())
            .await
    }

    // ── Geocode ──────────────────────────────────────────────────────────

    pub async fn geocode(&self, places: Option<&str>) -> Result<Value, HttpError> {
        let mut url = format!("{}/api/geocode.json", self.base_url);
        if let Some(places) = given(places) {
            url = format!("{}?places={}", url, urlencoding::encode(places));
        }
        self.get_json_or(&url, json!({})).await
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub async fn search(&self, query: &SearchQuery) -> Result<Value, HttpError> {
        let Some(compound) = query.to_query_param() else {
            return Ok(ErrorPayload::new(NO_SEARCH_QUERY).into_value());
        };
        let url = format!(
            "{}/api/search.json?query={}",
            self.base_url,
            urlencoding::encode(&compound)
        );
        self.get_json_or(&url, ErrorPayload::new(SERVER_DOWN).into_value())
            .await
    }

    pub async fn aggregations(&self, query: &AggregationQuery) -> Result<Value, HttpError> {
        let Some(compound) = query.to_query_param() else {
            return Ok(ErrorPayload::new(NO_AGGREGATION_QUERY).into_value());
        };
        let mut url = format!(
            "{}/api/search.json?query={}",
            self.base_url,
            urlencoding::encode(&compound)
        );
        if let Some(fields) = query.fields_param() {
            url = format!("{}&fields={}", url, urlencoding::encode(&fields));
        }
        // Aggregation-only queries: no result docs, served from cache.
        url = format!(
            "{}&limit={}&count=0&source=cache",
            url,
            query.limit_or_default()
        );
        self.get_json_or(&url, ErrorPayload::new(SERVER_DOWN).into_value())
            .await
    }

    // ── Users ────────────────────────────────────────────────────────────

    pub async fn user(
        &self,
        name: Option<&str>,
        followers: Option<bool>,
        following: Option<bool>,
    ) -> Result<Value, HttpError> {
        let Some(name) = given(name) else {
            return Ok(ErrorPayload::new(NO_USER_NAME).into_value());
        };
        let mut url = format!(
            "{}/api/user.json?screen_name={}",
            self.base_url,
            urlencoding::encode(name)
        );
        // Sent only when explicitly chosen, including an explicit `false`.
        if let Some(followers) = followers {
            url = format!("{}&followers={}", url, followers);
        }
        if let Some(following) = following {
            url = format!("{}&following={}", url, following);
        }
        self.get_json_or(&url, json!({})).await
    }

    // ── Vis ──────────────────────────────────────────────────────────────

    pub async fn map(&self, params: &MapParams) -> Result<Vec<u8>, HttpError> {
        let url = format!(
            "{}/vis/map.png?text={}&mlat={}&mlon={}&width={}&height={}&zoom={}",
            self.base_url,
            urlencoding::encode(&params.text),
            params.lat,
            params.lon,
            params.width,
            params.height,
            params.zoom
        );
        self.get_bytes_or_empty(&url).await
    }

    pub async fn markdown(&self, params: &MarkdownParams) -> Result<Vec<u8>, HttpError> {
        let url = format!(
            "{}/vis/markdown.png?text={}&color_text={}&color_background={}&padding={}&uppercase={}",
            self.base_url,
            urlencoding::encode(&params.text),
            urlencoding::encode(&params.color_text),
            urlencoding::encode(&params.color_background),
            params.padding,
            params.uppercase
        );
        self.get_bytes_or_empty(&url).await
    }

    // ── Account ──────────────────────────────────────────────────────────

    /// Account lookup/update against the local-admin endpoint.
    ///
    /// `name` wins over `action`: a lookup is issued whenever a screen name
    /// is given, an update only when `action` is `"update"` and `data` is
    /// present. Anything else synthesizes the missing-input payload without
    /// touching the network.
    pub async fn account(
        &self,
        name: Option<&str>,
        action: Option<&str>,
        data: Option<&Value>,
    ) -> Result<Value, HttpError> {
        let url = format!("{}/account.json", self.admin_url);
        if let Some(name) = given(name) {
            let url = format!("{}?screen_name={}", url, urlencoding::encode(name));
            return self.admin_request(Method::GET, &url).await;
        }
        if given(action) == Some("update") {
            if let Some(data) = data {
                let url = format!(
                    "{}?action=update&data={}",
                    url,
                    urlencoding::encode(&data.to_string())
                );
                return self.admin_request(Method::POST, &url).await;
            }
        }
        Ok(ErrorPayload::new(NO_ACCOUNT_QUERY).into_value())
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// GET a JSON endpoint; non-200 responses collapse to `fallback`.
    async fn get_json_or(&self, url: &str, fallback: Value) -> Result<Value, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await.map_err(map_transport)?;
        if resp.status().is_success() {
            return resp.json::<Value>().await.map_err(map_transport);
        }
        tracing::debug!(status = resp.status().as_u16(), "non-success from {}", url);
        Ok(fallback)
    }

    /// GET a binary endpoint; non-200 responses collapse to empty bytes.
    async fn get_bytes_or_empty(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await.map_err(map_transport)?;
        if resp.status().is_success() {
            return Ok(resp.bytes().await.map_err(map_transport)?.to_vec());
        }
        tracing::debug!(status = resp.status().as_u16(), "non-success from {}", url);
        Ok(Vec::new())
    }

    /// Local-admin request with the fixed identification headers.
    async fn admin_request(&self, method: Method, url: &str) -> Result<Value, HttpError> {
        tracing::debug!("{} {}", method, url);
        let resp = self
            .client
            .request(method, url)
            .header(reqwest::header::USER_AGENT, network::ACCOUNT_USER_AGENT)
            .header("From", network::ACCOUNT_FROM)
            .send()
            .await
            .map_err(map_transport)?;
        if resp.status().is_success() {
            return resp.json::<Value>().await.map_err(map_transport);
        }
        tracing::debug!(status = resp.status().as_u16(), "non-success from {}", url);
        Ok(ErrorPayload::new(ACCOUNT_QUERY_WRONG).into_value())
    }
}

impl Clone for LoklakHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            admin_url: self.admin_url.clone(),
            client: self.client.clone(),
        }
    }
}

/// Empty strings count as absent inputs, matching the server's own handling.
fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn map_transport(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(err)
    }
}
