// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field deserializers that turn bad values into `None`.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so that a missing
//! field is `None` as well.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any type: `None` if the value does not deserialize as `T`.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Strings only. Anything else, booleans and numbers included, is `None`.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Strings, with numbers rendered as text (`46` for a sensor reading).
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Unsigned integers, also accepted as numeric strings (`"1081937\n"`).
pub(crate) fn unsigned<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Signed integers, also accepted as numeric strings.
pub(crate) fn signed<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        label: Option<String>,
        #[serde(default, deserialize_with = "super::text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::unsigned")]
        height: Option<u64>,
        #[serde(default, deserialize_with = "super::signed")]
        gap: Option<i64>,
        #[serde(default, deserialize_with = "super::optional")]
        names: Option<Vec<String>>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_fields_are_none() {
        let p = probe("{}");
        assert!(p.label.is_none());
        assert!(p.text.is_none());
        assert!(p.height.is_none());
        assert!(p.gap.is_none());
        assert!(p.names.is_none());
    }

    #[test]
    fn null_fields_are_none() {
        let p = probe(r#"{"text": null, "height": null, "names": null}"#);
        assert!(p.text.is_none());
        assert!(p.height.is_none());
        assert!(p.names.is_none());
    }

    #[test]
    fn numbers_become_text() {
        assert_eq!(probe(r#"{"text": 46}"#).text.as_deref(), Some("46"));
    }

    #[test]
    fn strings_reject_other_scalars() {
        assert!(probe(r#"{"label": false}"#).label.is_none());
        assert!(probe(r#"{"label": 0}"#).label.is_none());
        assert!(probe(r#"{"text": true}"#).text.is_none());
        assert_eq!(probe(r#"{"label": "ok"}"#).label.as_deref(), Some("ok"));
    }

    #[test]
    fn numeric_strings_become_numbers() {
        let p = probe(r#"{"height": "1081937\n", "gap": "-3"}"#);
        assert_eq!(p.height, Some(1_081_937));
        assert_eq!(p.gap, Some(-3));
    }

    #[test]
    fn mistyped_fields_are_none() {
        let p = probe(
            r#"{"label": [1], "text": {"a": 1}, "height": "syncing", "gap": [], "names": "miner"}"#,
        );
        assert!(p.label.is_none());
        assert!(p.text.is_none());
        assert!(p.height.is_none());
        assert!(p.gap.is_none());
        assert!(p.names.is_none());
    }

    #[test]
    fn negative_height_is_none() {
        assert!(probe(r#"{"height": -1}"#).height.is_none());
    }
}
