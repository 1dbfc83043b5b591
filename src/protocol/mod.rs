// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to Bobcat miners.
//!
//! The miner's web API is small but sloppy: JSON is served with the wrong
//! content type, bodies are occasionally truncated, and bursts of requests
//! are answered with HTTP 429. The [`Transport`] trait captures the contract
//! callers rely on:
//!
//! - read endpoints yield `Some(json)` or `None` ("no data"), never a decode
//!   error
//! - HTTP 429 is always reported as [`ProtocolError::RateLimited`]
//! - every call is bounded by a timeout
//!
//! [`HttpClient`] is the reqwest-backed implementation.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use std::time::Duration;

use serde_json::Value;

use crate::error::ProtocolError;

/// Raw text returned by an administrative endpoint.
///
/// The miner answers admin POSTs with human-readable text rather than JSON,
/// so the body is kept as-is for the caller to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminResponse {
    body: String,
}

impl AdminResponse {
    /// Creates a new admin response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns the body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Trait for transports that can reach a miner.
///
/// Paths are relative to the miner's web root (`miner.json`,
/// `admin/reboot`); [`get_url`](Transport::get_url) is for absolute URLs off
/// the local network.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issues a GET against a miner path and decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::RateLimited`] on HTTP 429,
    /// [`ProtocolError::Timeout`] when `timeout` elapses and
    /// [`ProtocolError::ConnectionFailed`] when the miner cannot be reached.
    /// Undecodable bodies and other status codes yield `Ok(None)`.
    async fn get(&self, path: &str, timeout: Duration) -> Result<Option<Value>, ProtocolError>;

    /// Issues a GET against an absolute URL with the same semantics as
    /// [`get`](Transport::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Transport::get).
    async fn get_url(&self, url: &str, timeout: Duration) -> Result<Option<Value>, ProtocolError>;

    /// Issues a POST against a miner path and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::RateLimited`] on HTTP 429,
    /// [`ProtocolError::AuthenticationFailed`] on HTTP 401 and
    /// [`ProtocolError::ConnectionFailed`] on any other non-success status.
    async fn post(&self, path: &str, headers: &[(&str, &str)]) -> Result<String, ProtocolError>;

    /// Checks whether the miner accepts TCP connections at all.
    ///
    /// Never fails: a refusal or timeout is reported as `false`.
    async fn probe(&self) -> bool;
}
