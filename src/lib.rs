// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bobcat Lib - A Rust library to monitor and control Bobcat Helium miners.
//!
//! Bobcat hotspots expose a small unauthenticated JSON API on the local
//! network, plus a few admin actions behind a fixed, publicly documented
//! credential. This library wraps that API with async, typed calls.
//!
//! # Supported Features
//!
//! - **Telemetry**: miner status, temperatures, LED color, sync status,
//!   seed-node DNS diagnostic
//! - **Status summary**: one snapshot combining miner status, LED and the
//!   public chain height
//! - **Administration**: reboot, reset, fast sync
//!
//! # Living with the miner's API
//!
//! The miner mislabels JSON content types, sometimes sends bodies that do
//! not parse, and answers bursts with HTTP 429. Read calls therefore return
//! `Ok(None)` for unusable bodies, and report rate limiting as its own error
//! ([`Error::is_rate_limited`]).
//!
//! # Quick Start
//!
//! ```no_run
//! use bobcat_lib::Miner;
//!
//! #[tokio::main]
//! async fn main() -> bobcat_lib::Result<()> {
//!     // Probes port 80 and logs a warning if the miner is not answering
//!     let miner = Miner::http("192.168.1.120").build().await?;
//!
//!     let snapshot = miner.status_summary().await?;
//!     println!("{} ({})", snapshot.state(), snapshot.led().unwrap_or("led unknown"));
//!
//!     if let Some(temps) = miner.temperatures().await? {
//!         println!("hottest sensor: {:?}", temps.max());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Administration
//!
//! ```no_run
//! use bobcat_lib::Miner;
//!
//! # async fn example() -> bobcat_lib::Result<()> {
//! let miner = Miner::http("192.168.1.120").build_without_probe()?;
//! let response = miner.reboot().await?;
//! println!("{}", response.body());
//! # Ok(())
//! # }
//! ```

mod device;
pub mod error;
pub mod protocol;
pub mod response;
mod summary;
pub mod types;

#[cfg(feature = "http")]
pub use device::HttpMinerBuilder;
pub use device::{Miner, MinerSettings, endpoint};
pub use error::{Error, ParseError, ProtocolError, Result};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{AdminResponse, Transport};
pub use response::{DigReport, LedStatus, MinerStatus, SyncStatus, TemperatureReport};
pub use summary::StatusSnapshot;
pub use types::{AdminCredential, parse_temperature};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
