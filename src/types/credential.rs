// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Credential for the miner's admin endpoints.

use std::borrow::Cow;

/// `Authorization` header value sent with admin requests.
///
/// Bobcat miners ship with a fixed, publicly documented admin login
/// (`bobcat:miner`), so the default is not a secret. It can be replaced for
/// firmware that changes it.
///
/// # Examples
///
/// ```
/// use bobcat_lib::types::AdminCredential;
///
/// let credential = AdminCredential::default();
/// assert_eq!(credential.header_value(), "Basic Ym9iY2F0Om1pbmVy");
///
/// let custom = AdminCredential::from_header_value("Basic b3RoZXI6c2VjcmV0");
/// assert_eq!(custom.header_value(), "Basic b3RoZXI6c2VjcmV0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential(Cow<'static, str>);

impl AdminCredential {
    /// Name of the header carrying the credential.
    pub const HEADER_NAME: &'static str = "Authorization";

    /// Factory default credential of every Bobcat miner.
    pub const FACTORY_DEFAULT: Self = Self(Cow::Borrowed("Basic Ym9iY2F0Om1pbmVy"));

    /// Creates a credential from a complete `Authorization` header value.
    #[must_use]
    pub fn from_header_value(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.0
    }
}

impl Default for AdminCredential {
    fn default() -> Self {
        Self::FACTORY_DEFAULT
    }
}
