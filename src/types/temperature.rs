// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bobcat temperature string parsing.
//!
//! The miner reports temperatures as free-form strings such as `"46 °C"`.
//! Some firmware versions double-encode the degree sign, producing
//! `"46 Â°C"`, so the unit suffix cannot be trusted; only the digits are.

use crate::error::ParseError;

/// Extracts the first run of ASCII digits from a temperature string.
///
/// Only `0`-`9` count as digits. Everything around the first run, including
/// any non-ASCII unit suffix, is ignored.
///
/// # Examples
///
/// ```
/// use bobcat_lib::types::parse_temperature;
///
/// assert_eq!(parse_temperature("46 °C").unwrap(), "46");
/// assert_eq!(parse_temperature("46 Â°C").unwrap(), "46");
/// assert!(parse_temperature("°C").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ParseError::NoNumericValue`] if the string contains no ASCII
/// digit.
pub fn parse_temperature(s: &str) -> Result<String, ParseError> {
    let start = s
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| ParseError::NoNumericValue(s.to_string()))?;

    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    Ok(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_celsius() {
        assert_eq!(parse_temperature("12 °C").unwrap(), "12");
        assert_eq!(parse_temperature("46 °C").unwrap(), "46");
    }

    #[test]
    fn parse_mis_encoded_degree_sign() {
        assert_eq!(parse_temperature("46 Â°C").unwrap(), "46");
    }

    #[test]
    fn parse_without_space() {
        assert_eq!(parse_temperature("51°C").unwrap(), "51");
    }

    #[test]
    fn parse_takes_first_run_only() {
        assert_eq!(parse_temperature("46.5 °C").unwrap(), "46");
        assert_eq!(parse_temperature("cpu 38 / board 41").unwrap(), "38");
    }

    #[test]
    fn parse_leading_text() {
        assert_eq!(parse_temperature("temp: 39°C").unwrap(), "39");
    }

    #[test]
    fn parse_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not ASCII digits
        assert_eq!(parse_temperature("٤٦ 47 °C").unwrap(), "47");
    }

    #[test]
    fn parse_no_digits_fails() {
        let err = parse_temperature("°C").unwrap_err();
        assert!(matches!(err, ParseError::NoNumericValue(ref s) if s == "°C"));

        assert!(parse_temperature("").is_err());
        assert!(parse_temperature("n/a").is_err());
    }
}
