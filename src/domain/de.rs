//! Lenient deserializers for fields the inventory server sometimes sends as
//! `null` or empty strings.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Reads `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an optional RFC 3339 timestamp, treating `null` and `""` as absent
pub(crate) fn optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
