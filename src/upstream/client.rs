//! Reqwest-backed client for the upstream employee API.
//!
//! # Responsibilities
//! - Issue the four upstream calls (list, get, create, delete-by-name)
//! - Enforce connect and request timeouts from configuration
//! - Classify failures into NotFound / Transient / Malformed / Rejected
//! - Record per-call metrics
//!
//! No retries happen here; every failure is surfaced to the caller at once.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{
    Envelope, RawCreateRequest, RawDeleteRequest, RawEmployee, UpstreamError, UpstreamResult,
};

/// Operations the facade needs from the employee-data backend.
pub trait EmployeeUpstream: Send + Sync {
    /// Fetch the full collection in upstream order.
    fn fetch_all(&self) -> impl Future<Output = UpstreamResult<Vec<RawEmployee>>> + Send;

    /// Fetch one record by id.
    fn fetch_one(&self, id: &str) -> impl Future<Output = UpstreamResult<RawEmployee>> + Send;

    /// Create a record and return it with its upstream-assigned id.
    fn create(
        &self,
        request: &RawCreateRequest,
    ) -> impl Future<Output = UpstreamResult<RawEmployee>> + Send;

    /// Delete by name; `Ok(false)` means the upstream reported nothing was deleted.
    fn delete_by_name(&self, name: &str) -> impl Future<Output = UpstreamResult<bool>> + Send;
}

/// What an upstream 404 means for a given call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Missing {
    /// The addressed record is absent.
    Record,
    /// The collection route itself is gone, which is an outage.
    Route,
}

/// HTTP implementation of [`EmployeeUpstream`].
#[derive(Clone)]
pub struct HttpEmployeeClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpEmployeeClient {
    /// Build a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            UpstreamError::Config(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::Config(format!(
                "base URL '{}' cannot carry path segments",
                config.base_url
            )));
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Config(e.to_string()))?;

        tracing::info!(
            base_url = %base_url,
            timeout_secs = config.timeout_secs,
            "Upstream employee client initialized"
        );

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Collection URL all requests are derived from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn record_url(&self, id: &str) -> UpstreamResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UpstreamError::Config("base URL cannot carry path segments".into()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        missing: Missing,
        request: RequestBuilder,
    ) -> UpstreamResult<T> {
        let start = Instant::now();
        let result = classify_missing(self.send_and_decode(request).await, missing);

        let outcome = match &result {
            Ok(_) => "ok",
            Err(UpstreamError::NotFound) => "not_found",
            Err(UpstreamError::Transient(_)) => "transient",
            Err(UpstreamError::Malformed(_)) => "malformed",
            Err(UpstreamError::Rejected { .. }) => "rejected",
            Err(UpstreamError::Config(_)) => "config",
        };
        metrics::record_upstream_call(operation, outcome, start);

        match &result {
            Ok(_) | Err(UpstreamError::NotFound) => {
                tracing::debug!(operation, outcome, elapsed = ?start.elapsed(), "Upstream call finished");
            }
            Err(e) => {
                tracing::warn!(operation, outcome, error = %e, "Upstream call failed");
            }
        }
        result
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> UpstreamResult<T> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }

        decode_envelope(&body)
    }
}

impl EmployeeUpstream for HttpEmployeeClient {
    async fn fetch_all(&self) -> UpstreamResult<Vec<RawEmployee>> {
        let request = self.client.get(self.base_url.clone());
        let records: Vec<RawEmployee> = self
            .exchange("fetch_all", Missing::Route, request)
            .await?;
        for record in &records {
            record.check()?;
        }
        Ok(records)
    }

    async fn fetch_one(&self, id: &str) -> UpstreamResult<RawEmployee> {
        let request = self.client.get(self.record_url(id)?);
        let record: Option<RawEmployee> = self
            .exchange("fetch_one", Missing::Record, request)
            .await?;
        let record = record.ok_or(UpstreamError::NotFound)?;
        record.check()?;
        Ok(record)
    }

    async fn create(&self, body: &RawCreateRequest) -> UpstreamResult<RawEmployee> {
        let request = self.client.post(self.base_url.clone()).json(body);
        let record: Option<RawEmployee> = self
            .exchange("create", Missing::Route, request)
            .await?;
        let record = record
            .ok_or_else(|| UpstreamError::Malformed("create returned no record".to_string()))?;
        record.check()?;
        Ok(record)
    }

    async fn delete_by_name(&self, name: &str) -> UpstreamResult<bool> {
        let body = RawDeleteRequest {
            name: name.to_string(),
        };
        let request = self.client.delete(self.base_url.clone()).json(&body);
        self.exchange("delete_by_name", Missing::Route, request).await
    }
}

impl std::fmt::Debug for HttpEmployeeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEmployeeClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> UpstreamResult<T> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| UpstreamError::Malformed(format!("invalid employee payload: {e}")))
}

fn classify_missing<T>(result: UpstreamResult<T>, missing: Missing) -> UpstreamResult<T> {
    match result {
        Err(UpstreamError::NotFound) if missing == Missing::Route => Err(
            UpstreamError::Transient("status 404: collection route not found".to_string()),
        ),
        other => other,
    }
}

fn map_transport_error(error: reqwest::Error, timeout: Duration) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::Transient(format!("timed out after {timeout:?}"))
    } else if error.is_connect() {
        UpstreamError::Transient(format!("connection failed: {error}"))
    } else {
        UpstreamError::Transient(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UpstreamError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::NOT_FOUND => UpstreamError::NotFound,
        StatusCode::TOO_MANY_REQUESTS | StatusCode::REQUEST_TIMEOUT => {
            UpstreamError::Transient(message)
        }
        _ if status.is_client_error() => UpstreamError::Rejected {
            status: status.as_u16(),
            message: preview,
        },
        _ => UpstreamError::Transient(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
