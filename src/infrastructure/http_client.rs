use std::time::{Duration, Instant};

use reqwest::header::HeaderMap;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::errors::{FetchError, SERVER_ERROR_MESSAGE};
use crate::domain::order::Order;
use crate::domain::order_id::OrderId;
use crate::domain::ports::{FetchOutcome, FetchedOrder, OrderSource, TimingSource};

/// `X-Execution-Time-MS`: server-side handling time in milliseconds.
pub const EXECUTION_TIME_HEADER: &str = "x-execution-time-ms";

// ── Wire DTOs ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Unreachable(e.to_string())
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

pub struct HttpOrderClient {
    client: Client,
    base_url: Url,
}

impl HttpOrderClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthStatus, FetchError> {
        let url = endpoint(&self.base_url, &["health"])?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(FetchError::ServerReported(server_message(&body)));
        }
        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

impl OrderSource for HttpOrderClient {
    /// GET /order/{order_uid}
    ///
    /// One attempt, no retry. The client timing covers request issue up to
    /// header receipt; a parseable `X-Execution-Time-MS` header replaces it.
    async fn fetch_order(&self, id: &OrderId) -> FetchOutcome {
        let url = order_url(&self.base_url, id)?;
        log::info!("Fetching order {} from {}", id, url);

        let started = Instant::now();
        let response = self.client.get(url).send().await.map_err(|e| {
            log::error!("Request for order {} failed: {}", id, e);
            FetchError::from(e)
        })?;
        let client_ms = elapsed_ms(started.elapsed());

        let status = response.status();
        let server_ms = server_execution_time(response.headers());
        let body = response.bytes().await.map_err(|e| {
            log::error!("Reading body for order {} failed: {}", id, e);
            FetchError::from(e)
        })?;

        if !status.is_success() {
            let message = server_message(&body);
            log::warn!("Order {} request returned {}: {}", id, status, message);
            return Err(FetchError::ServerReported(message));
        }

        let order: Order = serde_json::from_slice(&body).map_err(|e| {
            log::error!("Order {} response is not an order record: {}", id, e);
            FetchError::Malformed(e.to_string())
        })?;

        let (execution_time_ms, timing) = match server_ms {
            Some(ms) => (ms, TimingSource::Server),
            None => (client_ms, TimingSource::Client),
        };
        log::info!(
            "Order {} retrieved: status={} execution_time_ms={} timing={:?}",
            id,
            status,
            execution_time_ms,
            timing
        );

        Ok(FetchedOrder {
            order,
            execution_time_ms,
            timing,
        })
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// `{base_url}/order/{id}` with the id percent-encoded as a single segment.
pub fn order_url(base_url: &Url, id: &OrderId) -> Result<Url, FetchError> {
    endpoint(base_url, &["order", id.as_str()])
}

fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| FetchError::Unreachable(format!("base url '{}' cannot carry a path", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Whole milliseconds, rounded to nearest.
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from((elapsed.as_nanos() + 500_000) / 1_000_000).unwrap_or(u64::MAX)
}

fn server_execution_time(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(EXECUTION_TIME_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// `message` from a JSON error body, or the generic fallback.
fn server_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string())
}
