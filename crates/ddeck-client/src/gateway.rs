//! HTTP gateway to the design service
//!
//! Issues the create/list/get operations and collapses every transport
//! failure into the request taxonomy. No caching, no retry: retry
//! policy belongs to the transport layer and the user's own actions.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use ddeck_core::prelude::*;
use ddeck_core::{Design, DesignSpec};

use crate::api::DesignApi;
use crate::session::SessionContext;

/// Client timeout for any single request. "Never resolves" is the
/// transport's problem to turn into a failure, not ours.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body shape the service uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client wrapping the design service endpoints.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl HttpGateway {
    /// Create a gateway for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Build a request to `path`, attaching the bearer credential when
    /// the session holds one.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a request and deserialize the JSON response, normalizing
    /// failures. `not_found_id` maps a 404 to `Error::NotFound` for
    /// the single-record fetch.
    async fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        not_found_id: Option<&str>,
    ) -> Result<T> {
        let resp = req.send().await.map_err(normalize_transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            return Err(error_for_status(status, &body, not_found_id));
        }

        resp.json::<T>().await.map_err(normalize_transport)
    }
}

// The Send-bounded variant: the application crate moves these futures
// onto spawned tasks.
impl DesignApi for HttpGateway {
    async fn submit(&self, spec: &DesignSpec) -> Result<Design> {
        // Fail fast on local constraints; no network activity for an
        // empty prompt.
        spec.validate()?;

        debug!(style = ?spec.style, "Submitting design request");
        self.send_json(
            self.request(Method::POST, "/designs").json(spec),
            None,
        )
        .await
    }

    async fn list(&self) -> Result<Vec<Design>> {
        self.send_json(self.request(Method::GET, "/designs"), None)
            .await
    }

    async fn fetch_one(&self, id: &str) -> Result<Design> {
        self.send_json(
            self.request(Method::GET, &format!("/designs/{id}")),
            Some(id),
        )
        .await
    }
}

/// Collapse a reqwest error into the taxonomy: no response received is
/// a network error, a response we could not decode is a service error.
fn normalize_transport(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::service("Malformed response from the design service")
    } else if err.is_timeout() || err.is_connect() || err.status().is_none() {
        Error::network(err.to_string())
    } else {
        Error::service(err.to_string())
    }
}

/// Classify a non-success status, extracting the service's message
/// from the body when present.
fn error_for_status(status: StatusCode, body: &[u8], not_found_id: Option<&str>) -> Error {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::auth(
            message.unwrap_or_else(|| "credential missing or rejected".to_string()),
        ),
        StatusCode::NOT_FOUND if not_found_id.is_some() => {
            Error::not_found(not_found_id.unwrap_or_default())
        }
        _ => Error::service(
            message.unwrap_or_else(|| format!("Design service returned status {status}")),
        ),
    }
}
