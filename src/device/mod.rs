// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level API for one Bobcat miner.
//!
//! [`Miner`] wraps a [`Transport`] with one typed operation per endpoint.
//! Read operations return `Ok(None)` when the miner answered but sent nothing
//! usable; admin operations hand back the miner's raw confirmation text.
//!
//! ```no_run
//! use bobcat_lib::Miner;
//!
//! # async fn example() -> bobcat_lib::Result<()> {
//! let miner = Miner::http("192.168.1.120").build().await?;
//!
//! if let Some(status) = miner.miner_status().await? {
//!     println!("{:?} is {:?}", status.animal, status.state());
//! }
//!
//! let response = miner.reboot().await?;
//! println!("{}", response.body());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;

#[cfg(feature = "http")]
pub use http_builder::HttpMinerBuilder;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::protocol::{AdminResponse, Transport};
use crate::response::{
    ChainHeightResponse, DigReport, LedStatus, MinerStatus, SyncStatus, TemperatureReport,
};
use crate::types::AdminCredential;

/// Paths of the miner's web API.
pub mod endpoint {
    /// Miner status and identity.
    pub const MINER: &str = "miner.json";
    /// Temperature detail.
    pub const TEMPERATURE: &str = "temp.json";
    /// LED color.
    pub const LED: &str = "led.json";
    /// Seed-node DNS diagnostic.
    pub const DIG: &str = "dig.json";
    /// Sync status.
    pub const SYNC_STATUS: &str = "status.json";
    /// Reboot the hotspot.
    pub const REBOOT: &str = "admin/reboot";
    /// Reset the miner's blockchain data.
    pub const RESET: &str = "admin/reset";
    /// Download a chain snapshot.
    pub const FAST_SYNC: &str = "admin/fastsync";
}

/// Per-miner settings that do not belong to the transport.
#[derive(Debug, Clone)]
pub struct MinerSettings {
    timeout: Duration,
    chain_timeout: Duration,
    chain_height_url: String,
    admin_credential: AdminCredential,
}

impl Default for MinerSettings {
    fn default() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            chain_timeout: Self::DEFAULT_CHAIN_TIMEOUT,
            chain_height_url: Self::DEFAULT_CHAIN_HEIGHT_URL.to_string(),
            admin_credential: AdminCredential::default(),
        }
    }
}

impl MinerSettings {
    /// Default timeout for requests to the miner.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default timeout for the public chain-height lookup.
    pub const DEFAULT_CHAIN_TIMEOUT: Duration = Duration::from_secs(10);
    /// Public endpoint reporting the current Helium block height.
    pub const DEFAULT_CHAIN_HEIGHT_URL: &'static str = "https://api.helium.io/v1/blocks/height";

    /// Sets the timeout for reads from the miner.
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

    /// Sets the chain-height endpoint.
    #[must_use]
    pub fn with_chain_height_url(mut self, url: impl Into<String>) -> Self {
        self.chain_height_url = url.into();
        self
    }

    /// Sets the credential sent to admin endpoints.
    #[must_use]
    pub fn with_admin_credential(mut self, credential: AdminCredential) -> Self {
        self.admin_credential = credential;
        self
    }

    /// Returns the timeout for reads from the miner.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the timeout for the chain-height lookup.
    #[must_use]
    pub fn chain_timeout(&self) -> Duration {
        self.chain_timeout
    }

    /// Returns the chain-height endpoint.
    #[must_use]
    pub fn chain_height_url(&self) -> &str {
        &self.chain_height_url
    }

    /// Returns the admin credential.
    #[must_use]
    pub fn admin_credential(&self) -> &AdminCredential {
        &self.admin_credential
    }
}

/// A Bobcat miner reachable through transport `P`.
///
/// Use [`Miner::http`] to talk to a real miner, or [`Miner::new`] to plug in
/// another [`Transport`].
#[derive(Debug)]
pub struct Miner<P: Transport> {
    transport: P,
    settings: MinerSettings,
}

impl<P: Transport> Miner<P> {
    /// Creates a miner over an existing transport.
    #[must_use]
    pub fn new(transport: P, settings: MinerSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// Returns the miner settings.
    #[must_use]
    pub fn settings(&self) -> &MinerSettings {
        &self.settings
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &P {
        &self.transport
    }

    /// Checks whether the miner accepts connections.
    pub async fn is_reachable(&self) -> bool {
        self.transport.probe().await
    }

    // ========== Telemetry ==========

    /// Gets the miner status from `miner.json`.
    ///
    /// # Errors
    ///
    /// Returns error if the miner is unreachable, rate limits the request or
    /// does not answer in time.
    pub async fn miner_status(&self) -> Result<Option<MinerStatus>, Error> {
        self.read(endpoint::MINER).await
    }

    /// Gets the temperature detail from `temp.json`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn temperatures(&self) -> Result<Option<TemperatureReport>, Error> {
        self.read(endpoint::TEMPERATURE).await
    }

    /// Gets the LED state from `led.json`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn led(&self) -> Result<Option<LedStatus>, Error> {
        self.read(endpoint::LED).await
    }

    /// Runs the seed-node DNS diagnostic (`dig.json`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn dig(&self) -> Result<Option<DigReport>, Error> {
        self.read(endpoint::DIG).await
    }

    /// Gets the sync status from `status.json`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn sync_status(&self) -> Result<Option<SyncStatus>, Error> {
        self.read(endpoint::SYNC_STATUS).await
    }

    /// Gets the current block height from the public Helium API.
    ///
    /// This call leaves the local network.
    ///
    /// # Errors
    ///
    /// Returns error if the API is unreachable, rate limits the request or
    /// does not answer within the chain timeout.
    pub async fn chain_height(&self) -> Result<Option<u64>, Error> {
        let value = self
            .transport
            .get_url(&self.settings.chain_height_url, self.settings.chain_timeout)
            .await?;

        Ok(value
            .and_then(|v| decode::<ChainHeightResponse>(&self.settings.chain_height_url, v))
            .and_then(|r| r.height()))
    }

    // ========== Administration ==========

    /// Reboots the hotspot.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the credential is rejected.
    pub async fn reboot(&self) -> Result<AdminResponse, Error> {
        self.admin(endpoint::REBOOT).await
    }

    /// Resets the miner, discarding its local blockchain data.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the credential is rejected.
    pub async fn reset(&self) -> Result<AdminResponse, Error> {
        self.admin(endpoint::RESET).await
    }

    /// Asks the miner to fast-sync from a chain snapshot.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the credential is rejected.
    pub async fn fast_sync(&self) -> Result<AdminResponse, Error> {
        self.admin(endpoint::FAST_SYNC).await
    }

    async fn read<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        let value = self.transport.get(path, self.settings.timeout).await?;
        Ok(value.and_then(|v| decode(path, v)))
    }

    async fn admin(&self, path: &str) -> Result<AdminResponse, Error> {
        tracing::info!(path = %path, "Sending admin request");

        let headers = [(
            AdminCredential::HEADER_NAME,
            self.settings.admin_credential.header_value(),
        )];
        let body = self.transport.post(path, &headers).await?;
        Ok(AdminResponse::new(body))
    }
}

/// Decodes a JSON value into a record, treating a shape mismatch as no data.
fn decode<T: DeserializeOwned>(label: &str, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::debug!(path = %label, error = %e, "No data: unexpected JSON shape");
            None
        }
    }
}

#[cfg(feature = "http")]
impl Miner<crate::protocol::HttpClient> {
    /// Creates a builder for an HTTP miner.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the miner
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bobcat_lib::Miner;
    ///
    /// # async fn example() -> bobcat_lib::Result<()> {
    /// let miner = Miner::http("192.168.1.120").build().await?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpMinerBuilder {
        HttpMinerBuilder::new(crate::protocol::HttpConfig::new(host))
    }

    /// Creates a builder for an HTTP miner from an `HttpConfig`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use bobcat_lib::Miner;
    /// use bobcat_lib::protocol::HttpConfig;
    ///
    /// # async fn example() -> bobcat_lib::Result<()> {
    /// let config = HttpConfig::new("192.168.1.120").with_timeout(Duration::from_secs(5));
    /// let miner = Miner::http_config(config).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn http_config(config: crate::protocol::HttpConfig) -> HttpMinerBuilder {
        HttpMinerBuilder::new(config)
    }
}
