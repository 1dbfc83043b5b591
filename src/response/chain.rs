// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Public chain-height API parsing.

use serde::Deserialize;

use crate::response::lenient;

/// Response from the Helium API `blocks/height` endpoint:
/// `{"data": {"height": 1081937}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainHeightResponse {
    /// Payload wrapper.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub data: Option<ChainHeightData>,
}

/// Inner payload of [`ChainHeightResponse`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainHeightData {
    /// Current block height.
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub height: Option<u64>,
}

impl ChainHeightResponse {
    /// Returns the block height, if present.
    #[must_use]
    pub fn height(&self) -> Option<u64> {
        self.data.as_ref()?.height
    }
}
