//! Serde adapter for the Pix expiration timestamp.
//!
//! Unlike every other timestamp the provider sends, `expiration_date` carries
//! no offset and uses `yyyy-MM-dd HH:mm:ss.SSS`, sometimes padded with
//! whitespace. Use with `#[serde(default, with = "pix_datetime")]` on an
//! `Option<NaiveDateTime>` field.

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub fn parse(raw: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), FORMAT)
}

pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse(&raw).map_err(de::Error::custom))
        .transpose()
}
