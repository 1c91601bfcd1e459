use std::time::{Duration, Instant};

use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{HttpError, TransportError};

use super::classify::classify_error;

/// Per-probe-type request bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutPolicy {
    pub ambient: Duration,
    pub health: Duration,
    pub page: Duration,
    pub realtime: Duration,
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self {
            ambient: Duration::from_secs(10),
            health: Duration::from_millis(5000),
            page: Duration::from_millis(10_000),
            realtime: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    json: Option<serde_json::Value>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.json = Some(body);
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// What came back from one request. Never outlives the probe that asked.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
    elapsed: Duration,
}

impl ProbeResponse {
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Header value by case-insensitive name, if present and valid ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Decodes the body against an explicit response shape.
    ///
    /// # Errors
    ///
    /// Returns the decode error when the body is not JSON of that shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Thin wrapper over `reqwest::Client`. No retries at this layer.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    client: Client,
}

impl ProbeClient {
    /// Builds a client whose requests are bounded by `default_timeout` unless
    /// a call overrides it.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialised.
    pub fn new(default_timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(default_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;
        Ok(Self { client })
    }

    /// Issues one request and reads the full body.
    ///
    /// # Errors
    ///
    /// Returns a classified [`TransportError`] when no complete response was
    /// received. Non-2xx statuses are not errors.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<ProbeResponse, TransportError> {
        let mut builder = self.client.request(method.clone(), url);
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = options.json.as_ref() {
            builder = builder.json(body);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let started = Instant::now();
        let response = builder.send().await.map_err(|err| {
            let classified = classify_error(&err);
            debug!(%method, url, kind = %classified.kind(), "request failed");
            classified
        })?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|err| classify_error(&err))?;
        let elapsed = started.elapsed();

        debug!(
            %method,
            url,
            status,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "request completed"
        );

        Ok(ProbeResponse {
            status,
            headers,
            body,
            elapsed,
        })
    }

    /// # Errors
    ///
    /// See [`ProbeClient::request`].
    pub async fn get(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<ProbeResponse, TransportError> {
        self.request(Method::GET, url, options).await
    }
}
