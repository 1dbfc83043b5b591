// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed records for Bobcat JSON responses.
//!
//! One record per endpoint. Every field is optional and decoded leniently:
//! a field the firmware left out, or sent with an unexpected type, becomes
//! `None` instead of failing the whole record.

mod chain;
mod dig;
mod led;
pub(crate) mod lenient;
mod miner;
mod sync;
mod temperature;

pub use chain::{ChainHeightData, ChainHeightResponse};
pub use dig::DigReport;
pub use led::LedStatus;
pub use miner::{MinerContainer, MinerStatus};
pub use sync::SyncStatus;
pub use temperature::TemperatureReport;
