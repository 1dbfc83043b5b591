// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sync status (`status.json`) parsing.

use serde::Deserialize;

use crate::response::lenient;

/// Response from `GET status.json`.
///
/// The hotspot's own view of how far it is behind the chain. Heights arrive
/// as strings on most firmware.
///
/// # Examples
///
/// ```
/// use bobcat_lib::response::SyncStatus;
///
/// let json = r#"{"status": "Synced", "gap": "0", "miner_height": "1081937", "blockchain_height": "1081937", "epoch": "28741"}"#;
/// let status: SyncStatus = serde_json::from_str(json).unwrap();
/// assert!(status.is_synced());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncStatus {
    /// Sync state as text (`Synced`, `Syncing`, `Loading`).
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,

    /// Blocks between the hotspot and the chain; `-` while unknown.
    #[serde(default, deserialize_with = "lenient::signed")]
    pub gap: Option<i64>,

    /// Height of the hotspot's local chain.
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub miner_height: Option<u64>,

    /// Chain height as seen by the hotspot.
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub blockchain_height: Option<u64>,

    /// Current epoch.
    #[serde(default, deserialize_with = "lenient::text")]
    pub epoch: Option<String>,
}

impl SyncStatus {
    /// Returns `true` if the hotspot reports itself as synced.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("synced"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_syncing() {
        let status: SyncStatus = serde_json::from_value(serde_json::json!({
            "status": "Syncing",
            "gap": "250",
            "miner_height": "1081687",
            "blockchain_height": "1081937",
            "epoch": "28741"
        }))
        .unwrap();
        assert!(!status.is_synced());
        assert_eq!(status.gap, Some(250));
        assert_eq!(status.miner_height, Some(1_081_687));
        assert_eq!(status.blockchain_height, Some(1_081_937));
    }

    #[test]
    fn unknown_gap_is_absent() {
        let status: SyncStatus =
            serde_json::from_value(serde_json::json!({"status": "Loading", "gap": "-"})).unwrap();
        assert!(status.gap.is_none());
    }
}
