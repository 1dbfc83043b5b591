// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Bobcat miners.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::net::TcpStream;

use crate::device::MinerSettings;
use crate::error::ProtocolError;
use crate::protocol::Transport;

// ============================================================================
// HttpConfig - Connection parameters for one miner
// ============================================================================

/// Configuration for an HTTP connection to a Bobcat miner.
///
/// Holds the connection target plus the independent timeouts used for local
/// miner calls, the public chain-height lookup and the TCP reachability
/// probe.
///
/// # Examples
///
/// ```
/// use bobcat_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.120");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.120")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5))
///     .with_chain_timeout(Duration::from_secs(15))
///     .with_probe_timeout(Duration::from_secs(1));
/// assert_eq!(config.base_url(), "http://192.168.1.120:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
    chain_timeout: Duration,
    probe_timeout: Duration,
    chain_height_url: String,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default timeout for requests to the miner.
    pub const DEFAULT_TIMEOUT: Duration = MinerSettings::DEFAULT_TIMEOUT;
    /// Default timeout for the public chain-height lookup.
    pub const DEFAULT_CHAIN_TIMEOUT: Duration = MinerSettings::DEFAULT_CHAIN_TIMEOUT;
    /// Default timeout for the TCP reachability probe.
    pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);
    /// Public endpoint reporting the current Helium block height.
    pub const DEFAULT_CHAIN_HEIGHT_URL: &'static str = MinerSettings::DEFAULT_CHAIN_HEIGHT_URL;

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the miner on the local network
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
            chain_timeout: Self::DEFAULT_CHAIN_TIMEOUT,
            probe_timeout: Self::DEFAULT_PROBE_TIMEOUT,
            chain_height_url: Self::DEFAULT_CHAIN_HEIGHT_URL.to_string(),
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the timeout for requests to the miner.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout for the chain-height lookup.
    #[must_use]
    pub fn with_chain_timeout(mut self, timeout: Duration) -> Self {
        self.chain_timeout = timeout;
        self
    }

    /// Sets the timeout for the TCP reachability probe.
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Overrides the chain-height endpoint.
    #[must_use]
    pub fn with_chain_height_url(mut self, url: impl Into<String>) -> Self {
        self.chain_height_url = url.into();
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout for requests to the miner.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the timeout for the chain-height lookup.
    #[must_use]
    pub fn chain_timeout(&self) -> Duration {
        self.chain_timeout
    }

    /// Returns the timeout for the TCP reachability probe.
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    /// Returns the chain-height endpoint.
    #[must_use]
    pub fn chain_height_url(&self) -> &str {
        &self.chain_height_url
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or carries a scheme, or if the
    /// HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        if self.host.contains("://") || self.host.contains('/') {
            return Err(ProtocolError::InvalidAddress(format!(
                "expected a bare host name or IP address, got {}",
                self.host
            )));
        }

        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            host: self.host,
            port: self.port,
            timeout: self.timeout,
            probe_timeout: self.probe_timeout,
        })
    }
}

// ============================================================================
// HttpClient - reqwest-backed Transport
// ============================================================================

/// HTTP client for communicating with one Bobcat miner.
///
/// Holds a single connection pool for its whole lifetime; dropping the client
/// releases it.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    host: String,
    port: u16,
    timeout: Duration,
    probe_timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the miner.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a miner path.
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn fetch_json(
        &self,
        url: &str,
        label: &str,
        timeout: Duration,
    ) -> Result<Option<Value>, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP GET");

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::debug!(path = %label, "Miner is rate limiting requests");
            return Err(ProtocolError::RateLimited {
                path: label.to_string(),
            });
        }

        if status != StatusCode::OK {
            tracing::debug!(path = %label, status = status.as_u16(), "No data: unexpected status");
            return Ok(None);
        }

        // Read as text first: the miner mislabels JSON as text/html.
        let body = response.text().await.map_err(|e| classify(e, timeout))?;

        tracing::debug!(path = %label, body = %body, "Received HTTP response");

        Ok(decode_body(label, &body))
    }
}

impl Transport for HttpClient {
    async fn get(&self, path: &str, timeout: Duration) -> Result<Option<Value>, ProtocolError> {
        let url = self.build_url(path);
        self.fetch_json(&url, path, timeout).await
    }

    async fn get_url(&self, url: &str, timeout: Duration) -> Result<Option<Value>, ProtocolError> {
        self.fetch_json(url, url, timeout).await
    }

    async fn post(&self, path: &str, headers: &[(&str, &str)]) -> Result<String, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, "Sending HTTP POST");

        let mut request = self.client.post(&url).timeout(self.timeout);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify(e, self.timeout))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProtocolError::RateLimited {
                path: path.to_string(),
            });
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !status.is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify(e, self.timeout))?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(body)
    }

    async fn probe(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        match tokio::time::timeout(self.probe_timeout, connect).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(e)) => {
                tracing::debug!(host = %self.host, port = self.port, error = %e, "Probe refused");
                false
            }
            Err(_) => {
                tracing::debug!(host = %self.host, port = self.port, "Probe timed out");
                false
            }
        }
    }
}

/// Decodes a response body as JSON, whatever content type it was served with.
fn decode_body(label: &str, body: &str) -> Option<Value> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(path = %label, error = %e, "No data: body is not JSON");
            None
        }
    }
}

/// Maps a reqwest failure onto the library's error taxonomy.
fn classify(error: reqwest::Error, timeout: Duration) -> ProtocolError {
    if error.is_timeout() {
        ProtocolError::Timeout(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
    } else if error.is_connect() || error.is_request() || error.is_body() {
        // Refused, reset or dropped mid-exchange
        ProtocolError::ConnectionFailed(error.to_string())
    } else if error.is_builder() {
        ProtocolError::InvalidAddress(error.to_string())
    } else {
        ProtocolError::Http(error)
    }
}
