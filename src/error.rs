// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Bobcat library.
//!
//! Failures are split by layer: [`ProtocolError`] covers everything that can
//! go wrong talking to the miner (or the public chain API), and
//! [`ParseError`] covers turning what came back into typed values.
//!
//! Undecodable bodies on read endpoints are *not* errors. The miner is known
//! to mislabel content types and send truncated JSON, so the transport
//! reports those as "no data" instead.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the miner or the chain API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a value out of a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns `true` if the miner rejected the request with HTTP 429.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::RateLimited { .. }))
    }

    /// Returns `true` if the request did not complete within its timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::Timeout(_)))
    }

    /// Returns `true` if the remote end could not be reached at all.
    #[must_use]
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::ConnectionFailed(_)))
    }
}

/// Errors related to HTTP communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed for a reason not covered by another variant.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote end is unreachable, dropped the connection, or answered
    /// with an unexpected status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The miner answered with HTTP 429.
    #[error("rate limited by miner on {path}")]
    RateLimited {
        /// Path (or URL) of the rejected request.
        path: String,
    },

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The admin credential was rejected.
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors related to parsing miner responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A sensor string carried no digits.
    #[error("no numeric value in {0:?}")]
    NoNumericValue(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_display() {
        let err = ProtocolError::RateLimited {
            path: "led.json".to_string(),
        };
        assert_eq!(err.to_string(), "rate limited by miner on led.json");
    }

    #[test]
    fn error_classification() {
        let err: Error = ProtocolError::RateLimited {
            path: "miner.json".to_string(),
        }
        .into();
        assert!(err.is_rate_limited());
        assert!(!err.is_timeout());

        let err: Error = ProtocolError::Timeout(500).into();
        assert!(err.is_timeout());
        assert!(!err.is_connection_failure());

        let err: Error = ProtocolError::ConnectionFailed("refused".to_string()).into();
        assert!(err.is_connection_failure());
    }

    #[test]
    fn no_numeric_value_display() {
        let err = ParseError::NoNumericValue("°C".to_string());
        assert_eq!(err.to_string(), "no numeric value in \"°C\"");
    }

    #[test]
    fn error_from_parse_error() {
        let err: Error = ParseError::NoNumericValue("n/a".to_string()).into();
        assert!(matches!(err, Error::Parse(ParseError::NoNumericValue(_))));
        assert_eq!(err.to_string(), "parse error: no numeric value in \"n/a\"");
    }
}
