// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED state (`led.json`) parsing.

use serde::Deserialize;

use crate::response::lenient;

/// Response from `GET led.json`: `{"led": "green"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedStatus {
    /// Current LED color.
    #[serde(default, deserialize_with = "lenient::string")]
    pub led: Option<String>,
}

impl LedStatus {
    /// Returns the LED color.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.led.as_deref()
    }
}
