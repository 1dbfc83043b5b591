// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types and parsers for Bobcat data.
//!
//! - [`AdminCredential`] - `Authorization` header for admin endpoints
//! - [`parse_temperature`] - digits out of strings like `"46 °C"`

mod credential;
mod temperature;

pub use credential::AdminCredential;
pub use temperature::parse_temperature;
