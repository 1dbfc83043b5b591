// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Miner status (`miner.json`) parsing.

use serde::Deserialize;

use crate::response::lenient;

/// Response from `GET miner.json`.
///
/// The hotspot reports its own identity, network addresses, temperatures and
/// the state of the Docker container running the Helium miner.
///
/// # Examples
///
/// ```
/// use bobcat_lib::response::MinerStatus;
///
/// let json = r#"{
///     "ota_version": "1.0.2.66",
///     "animal": "fierce-lemon-owl",
///     "miner": {"State": "running", "Image": "quay.io/team-helium/miner:miner-arm64_2021.10.04.0_GA", "Created": 1633494326},
///     "temp0": "46 °C",
///     "errors": ""
/// }"#;
/// let status: MinerStatus = serde_json::from_str(json).unwrap();
/// assert_eq!(status.state(), Some("running"));
/// assert_eq!(status.image_version(), Some("miner-arm64_2021.10.04.0_GA"));
/// assert!(!status.has_errors());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MinerStatus {
    /// Hotspot OTA firmware version.
    #[serde(default, deserialize_with = "lenient::string")]
    pub ota_version: Option<String>,

    /// LoRa region (e.g. `region_us915`).
    #[serde(default, deserialize_with = "lenient::string")]
    pub region: Option<String>,

    /// LoRa frequency plan.
    #[serde(default, deserialize_with = "lenient::string")]
    pub frequency_plan: Option<String>,

    /// Three-word "animal" name identifying the hotspot.
    #[serde(default, deserialize_with = "lenient::string")]
    pub animal: Option<String>,

    /// Hotspot public key.
    #[serde(default, deserialize_with = "lenient::string")]
    pub pubkey: Option<String>,

    /// Miner container details.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub miner: Option<MinerContainer>,

    /// Block height of the hotspot's local copy of the chain.
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub miner_height: Option<u64>,

    /// Current chain epoch as seen by the hotspot.
    #[serde(default, deserialize_with = "lenient::text")]
    pub epoch: Option<String>,

    /// Address on the local network.
    #[serde(default, deserialize_with = "lenient::string")]
    pub private_ip: Option<String>,

    /// Address seen from the internet.
    #[serde(default, deserialize_with = "lenient::string")]
    pub public_ip: Option<String>,

    /// First temperature sensor, e.g. `"46 °C"`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub temp0: Option<String>,

    /// Second temperature sensor, absent on some units.
    #[serde(default, deserialize_with = "lenient::text")]
    pub temp1: Option<String>,

    /// Time the hotspot produced this report.
    #[serde(default, deserialize_with = "lenient::string")]
    pub timestamp: Option<String>,

    /// Error description; empty when the hotspot is healthy.
    #[serde(default, deserialize_with = "lenient::string")]
    pub errors: Option<String>,
}

impl MinerStatus {
    /// Returns the container state (e.g. `running`).
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.miner.as_ref()?.state.as_deref()
    }

    /// Returns the full container image reference.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.miner.as_ref()?.image.as_deref()
    }

    /// Returns the image tag: everything after the first `:` of the image.
    ///
    /// `None` if there is no image or the image has no `:`.
    #[must_use]
    pub fn image_version(&self) -> Option<&str> {
        self.image()?.split_once(':').map(|(_, version)| version)
    }

    /// Returns the container creation time as a Unix timestamp.
    #[must_use]
    pub fn created(&self) -> Option<i64> {
        self.miner.as_ref()?.created
    }

    /// Returns `true` if the hotspot reports a non-empty error string.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// State of the Docker container running the Helium miner.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MinerContainer {
    /// Container state (`running`, `exited`, ...).
    #[serde(rename = "State", default, deserialize_with = "lenient::string")]
    pub state: Option<String>,

    /// Human readable status (`Up 2 hours`).
    #[serde(rename = "Status", default, deserialize_with = "lenient::string")]
    pub status: Option<String>,

    /// Container names.
    #[serde(rename = "Names", default, deserialize_with = "lenient::optional")]
    pub names: Option<Vec<String>>,

    /// Image reference, `name:tag`.
    #[serde(rename = "Image", default, deserialize_with = "lenient::string")]
    pub image: Option<String>,

    /// Creation time as a Unix timestamp.
    #[serde(rename = "Created", default, deserialize_with = "lenient::signed")]
    pub created: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "ota_version": "1.0.2.66",
            "region": "region_eu868",
            "frequency_plan": "eu868",
            "animal": "fierce-lemon-owl",
            "pubkey": "112abc",
            "miner": {
                "State": "running",
                "Status": "Up 2 hours",
                "Names": ["/miner"],
                "Image": "quay.io/team-helium/miner:miner-arm64_2021.10.04.0_GA",
                "Created": 1_633_494_326
            },
            "miner_height": "1081937\n",
            "epoch": "28741",
            "private_ip": "192.168.1.120",
            "public_ip": "203.0.113.7",
            "temp0": "46 °C",
            "temp1": "47 °C",
            "timestamp": "2021-10-06 08:10:44 +0000 UTC",
            "errors": ""
        })
    }

    #[test]
    fn parse_full_status() {
        let status: MinerStatus = serde_json::from_value(sample()).unwrap();
        assert_eq!(status.ota_version.as_deref(), Some("1.0.2.66"));
        assert_eq!(status.animal.as_deref(), Some("fierce-lemon-owl"));
        assert_eq!(status.state(), Some("running"));
        assert_eq!(status.created(), Some(1_633_494_326));
        assert_eq!(status.miner_height, Some(1_081_937));
        assert_eq!(status.temp1.as_deref(), Some("47 °C"));
        assert_eq!(
            status.miner.as_ref().unwrap().names.as_deref(),
            Some(&["/miner".to_string()][..])
        );
    }

    #[test]
    fn image_version_after_first_colon() {
        let status = MinerStatus {
            miner: Some(MinerContainer {
                image: Some("quay.io/foo/bar:1.2.3".to_string()),
                ..MinerContainer::default()
            }),
            ..MinerStatus::default()
        };
        assert_eq!(status.image(), Some("quay.io/foo/bar:1.2.3"));
        assert_eq!(status.image_version(), Some("1.2.3"));
    }

    #[test]
    fn image_without_colon_has_no_version() {
        let status = MinerStatus {
            miner: Some(MinerContainer {
                image: Some("quay.io/foo/bar".to_string()),
                ..MinerContainer::default()
            }),
            ..MinerStatus::default()
        };
        assert_eq!(status.image(), Some("quay.io/foo/bar"));
        assert!(status.image_version().is_none());
    }

    #[test]
    fn has_errors_only_for_non_empty_string() {
        let mut status = MinerStatus::default();
        assert!(!status.has_errors());

        status.errors = Some(String::new());
        assert!(!status.has_errors());

        status.errors = Some("some fault".to_string());
        assert!(status.has_errors());
    }

    #[test]
    fn non_string_errors_are_not_errors() {
        for errors in [serde_json::json!(false), serde_json::json!(0), serde_json::json!([])] {
            let status: MinerStatus =
                serde_json::from_value(serde_json::json!({"errors": errors})).unwrap();
            assert!(status.errors.is_none());
            assert!(!status.has_errors());
        }
    }

    #[test]
    fn non_string_state_and_image_are_absent() {
        let status: MinerStatus = serde_json::from_value(serde_json::json!({
            "miner": {"State": true, "Image": 42, "Created": 1}
        }))
        .unwrap();
        assert!(status.state().is_none());
        assert!(status.image().is_none());
        assert_eq!(status.created(), Some(1));
    }

    #[test]
    fn numeric_temperatures_become_text() {
        let status: MinerStatus =
            serde_json::from_value(serde_json::json!({"temp0": 46, "epoch": 28741})).unwrap();
        assert_eq!(status.temp0.as_deref(), Some("46"));
        assert_eq!(status.epoch.as_deref(), Some("28741"));
    }

    #[test]
    fn mistyped_container_is_absent() {
        let status: MinerStatus =
            serde_json::from_value(serde_json::json!({"animal": "x", "miner": "down"})).unwrap();
        assert_eq!(status.animal.as_deref(), Some("x"));
        assert!(status.miner.is_none());
        assert!(status.state().is_none());
    }
}
