// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP miner builder.

use crate::device::{Miner, MinerSettings};
use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};
use crate::types::AdminCredential;

/// Builder for creating HTTP-based miners.
///
/// This builder can be created in two ways:
/// - `Miner::http("host")` - Simple host string
/// - `Miner::http_config(HttpConfig::new("host").with_port(8080))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use bobcat_lib::Miner;
/// use bobcat_lib::types::AdminCredential;
///
/// # async fn example() -> bobcat_lib::Result<()> {
/// // Probes the miner and warns if it is not answering
/// let miner = Miner::http("192.168.1.120").build().await?;
///
/// // Custom admin credential, no probe
/// let miner = Miner::http("192.168.1.120")
///     .with_admin_credential(AdminCredential::from_header_value("Basic b3RoZXI6c2VjcmV0"))
///     .build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpMinerBuilder {
    config: HttpConfig,
    admin_credential: AdminCredential,
}

impl HttpMinerBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            admin_credential: AdminCredential::default(),
        }
    }

    /// Sets the credential sent to admin endpoints.
    #[must_use]
    pub fn with_admin_credential(mut self, credential: AdminCredential) -> Self {
        self.admin_credential = credential;
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the miner after checking that it accepts connections.
    ///
    /// An unreachable miner is logged as a warning but still returned: the
    /// caller decides whether to go on.
    /// Use [`build_without_probe`](Self::build_without_probe) to skip the
    /// check.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub async fn build(self) -> Result<Miner<HttpClient>, Error> {
        let miner = self.build_without_probe()?;

        if !miner.is_reachable().await {
            tracing::warn!(
                url = %miner.transport().base_url(),
                "Miner not responding or not connected to the network"
            );
        }

        Ok(miner)
    }

    /// Builds the miner without any network access.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build_without_probe(self) -> Result<Miner<HttpClient>, Error> {
        let settings = MinerSettings::default()
            .with_timeout(self.config.timeout())
            .with_chain_timeout(self.config.chain_timeout())
            .with_chain_height_url(self.config.chain_height_url())
            .with_admin_credential(self.admin_credential);

        let client = self.config.into_client().map_err(Error::Protocol)?;
        Ok(Miner::new(client, settings))
    }
}

impl Miner<HttpClient> {
    /// Returns the miner's base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport().base_url()
    }
}
