// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-call status summary of a miner.
//!
//! [`Miner::status_summary`] combines three requests into a
//! [`StatusSnapshot`]:
//!
//! 1. `miner.json` and the public chain height, concurrently
//! 2. `led.json`, alone, once both have completed
//!
//! The miner rate limits bursts. Three simultaneous requests reliably get the
//! LED call rejected with HTTP 429, while two do not, so the LED request
//! waits for the others to finish.
//!
//! Failure handling differs per call. Miner status and chain height are both
//! required: if either fails, the summary fails with that error. The LED is
//! optional: if it fails, the snapshot simply has no `led`.
//!
//! ```no_run
//! use bobcat_lib::Miner;
//!
//! # async fn example() -> bobcat_lib::Result<()> {
//! let miner = Miner::http("192.168.1.120").build().await?;
//! let snapshot = miner.status_summary().await?;
//!
//! println!("{} is {}", snapshot.animal().unwrap_or("?"), snapshot.state());
//! if let Some(behind) = snapshot.blocks_behind() {
//!     println!("{behind} blocks behind");
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::device::Miner;
use crate::error::Error;
use crate::protocol::Transport;
use crate::response::{LedStatus, MinerStatus};
use crate::types::parse_temperature;

/// Aggregated status of a miner at one point in time.
///
/// Fields whose source call failed or returned no data are `None` and are
/// left out when serialized. `state` is always present: it is
/// [`StatusSnapshot::UNAVAILABLE`] until the miner reports one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ota_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    animal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temp0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temp1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    led: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    miner_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain_height: Option<u64>,
}

impl StatusSnapshot {
    /// State reported before the miner has told us anything.
    pub const UNAVAILABLE: &'static str = "unavailable";

    fn unavailable() -> Self {
        Self {
            state: Self::UNAVAILABLE.to_string(),
            ota_version: None,
            image: None,
            image_version: None,
            animal: None,
            created: None,
            public_ip: None,
            private_ip: None,
            temp0: None,
            temp1: None,
            led: None,
            error: None,
            miner_height: None,
            chain_height: None,
        }
    }

    /// Merges the results of the individual calls into a snapshot.
    pub(crate) fn from_parts(
        status: Option<&MinerStatus>,
        led: Option<&LedStatus>,
        chain_height: Option<u64>,
    ) -> Self {
        let mut snapshot = Self::unavailable();

        if let Some(status) = status {
            snapshot.apply_miner_status(status);
        }
        snapshot.led = led.and_then(LedStatus::color).map(str::to_string);
        snapshot.chain_height = chain_height;

        snapshot
    }

    fn apply_miner_status(&mut self, status: &MinerStatus) {
        if let Some(state) = status.state() {
            self.state = state.to_string();
        }
        self.ota_version.clone_from(&status.ota_version);
        self.image = status.image().map(str::to_string);
        self.image_version = status.image_version().map(str::to_string);
        self.animal.clone_from(&status.animal);
        self.created = status.created();
        self.public_ip.clone_from(&status.public_ip);
        self.private_ip.clone_from(&status.private_ip);
        self.temp0 = status.temp0.as_deref().and_then(|t| reading("temp0", t));
        self.temp1 = status.temp1.as_deref().and_then(|t| reading("temp1", t));
        self.error = Some(status.has_errors());
        self.miner_height = status.miner_height;
    }

    /// Returns the container state, or [`UNAVAILABLE`](Self::UNAVAILABLE).
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns `true` once the miner has reported a state.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.state != Self::UNAVAILABLE
    }

    /// Returns the OTA firmware version.
    #[must_use]
    pub fn ota_version(&self) -> Option<&str> {
        self.ota_version.as_deref()
    }

    /// Returns the full miner image reference.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the miner image tag.
    #[must_use]
    pub fn image_version(&self) -> Option<&str> {
        self.image_version.as_deref()
    }

    /// Returns the hotspot's animal name.
    #[must_use]
    pub fn animal(&self) -> Option<&str> {
        self.animal.as_deref()
    }

    /// Returns the container creation time as a Unix timestamp.
    #[must_use]
    pub fn created(&self) -> Option<i64> {
        self.created
    }

    /// Returns the container creation time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created?, 0)
    }

    /// Returns the public IP address.
    #[must_use]
    pub fn public_ip(&self) -> Option<&str> {
        self.public_ip.as_deref()
    }

    /// Returns the private IP address.
    #[must_use]
    pub fn private_ip(&self) -> Option<&str> {
        self.private_ip.as_deref()
    }

    /// Returns the first temperature reading, digits only.
    #[must_use]
    pub fn temp0(&self) -> Option<&str> {
        self.temp0.as_deref()
    }

    /// Returns the second temperature reading, digits only.
    #[must_use]
    pub fn temp1(&self) -> Option<&str> {
        self.temp1.as_deref()
    }

    /// Returns the LED color.
    #[must_use]
    pub fn led(&self) -> Option<&str> {
        self.led.as_deref()
    }

    /// Returns whether the miner reported an error.
    #[must_use]
    pub fn error(&self) -> Option<bool> {
        self.error
    }

    /// Returns the height of the miner's local chain.
    #[must_use]
    pub fn miner_height(&self) -> Option<u64> {
        self.miner_height
    }

    /// Returns the public chain height.
    #[must_use]
    pub fn chain_height(&self) -> Option<u64> {
        self.chain_height
    }

    /// Returns how many blocks the miner trails the public chain by.
    #[must_use]
    pub fn blocks_behind(&self) -> Option<u64> {
        Some(self.chain_height?.saturating_sub(self.miner_height?))
    }
}

fn reading(sensor: &str, raw: &str) -> Option<String> {
    match parse_temperature(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(sensor = %sensor, error = %e, "Dropping unreadable temperature");
            None
        }
    }
}

impl<P: Transport> Miner<P> {
    /// Builds a [`StatusSnapshot`] from miner status, chain height and LED.
    ///
    /// Miner status and chain height are fetched concurrently; the LED is
    /// fetched afterwards, on its own, to stay under the miner's rate limit.
    /// Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns the error of the miner-status or chain-height call if either
    /// fails (rate limited, unreachable or timed out). An LED failure is
    /// logged and only drops the `led` field.
    pub async fn status_summary(&self) -> Result<StatusSnapshot, Error> {
        let (status, chain_height) = tokio::join!(self.miner_status(), self.chain_height());
        let status = status?;
        let chain_height = chain_height?;

        let led = match self.led().await {
            Ok(led) => led,
            Err(e) => {
                tracing::warn!(error = %e, "LED state unavailable, leaving it out of the summary");
                None
            }
        };

        let snapshot = StatusSnapshot::from_parts(status.as_ref(), led.as_ref(), chain_height);
        tracing::debug!(state = %snapshot.state(), "Built status summary");
        Ok(snapshot)
    }
}
