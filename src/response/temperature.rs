// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature detail (`temp.json`) parsing.

use serde::Deserialize;

use crate::response::lenient;

/// Response from `GET temp.json`.
///
/// Unlike `miner.json`, readings here are usually plain numbers with the
/// unit reported separately.
///
/// # Examples
///
/// ```
/// use bobcat_lib::response::TemperatureReport;
///
/// let json = r#"{"timestamp": "2021-10-06 08:10:44 +0000 UTC", "temp0": 38, "temp1": 37, "unit": "°C"}"#;
/// let report: TemperatureReport = serde_json::from_str(json).unwrap();
/// assert_eq!(report.temp0, Some(38.0));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemperatureReport {
    /// Time of the reading.
    #[serde(default, deserialize_with = "lenient::string")]
    pub timestamp: Option<String>,

    /// First sensor reading.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub temp0: Option<f64>,

    /// Second sensor reading.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub temp1: Option<f64>,

    /// Unit of both readings.
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: Option<String>,
}

impl TemperatureReport {
    /// Returns the hottest of the available readings.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        match (self.temp0, self.temp1) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }
}
