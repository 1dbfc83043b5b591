// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seed-node DNS diagnostic (`dig.json`) parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::response::lenient;

/// Response from `GET dig.json`.
///
/// The hotspot resolves the Helium seed nodes and reports what it found.
/// Record shapes vary across firmware, so they are kept as raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DigReport {
    /// Name that was looked up.
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    /// Which resolver was used.
    #[serde(rename = "DNS", default, deserialize_with = "lenient::string")]
    pub dns: Option<String>,

    /// Resolved records.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub records: Option<Vec<Value>>,
}

impl DigReport {
    /// Returns `true` if at least one record was resolved.
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.records.as_ref().is_some_and(|r| !r.is_empty())
    }
}
