use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status token the provider sent that matches no known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown status value: {0}")]
pub struct UnknownStatus(pub String);

/// Charge status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    /// Created, waiting for the Pix payment
    Created,
    /// Paid
    Paid,
}

impl ChargeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeStatus::Created => "CREATED",
            ChargeStatus::Paid => "PAID",
        }
    }

    pub fn is_paid(&self) -> bool {
        *self == ChargeStatus::Paid
    }
}

impl FromStr for ChargeStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("CREATED") {
            Ok(ChargeStatus::Created)
        } else if value.eq_ignore_ascii_case("PAID") {
            Ok(ChargeStatus::Paid)
        } else {
            Err(UnknownStatus(value.to_string()))
        }
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChargeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChargeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Created,
    Paid,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Created => "CREATED",
            TransactionStatus::Paid => "PAID",
        }
    }

    pub fn is_paid(&self) -> bool {
        *self == TransactionStatus::Paid
    }
}

impl FromStr for TransactionStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("CREATED") {
            Ok(TransactionStatus::Created)
        } else if value.eq_ignore_ascii_case("PAID") {
            Ok(TransactionStatus::Paid)
        } else {
            Err(UnknownStatus(value.to_string()))
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Caller-supplied headers forwarded verbatim on a single call.
///
/// Usually carries the `Authorization` bearer token. Header names are
/// case-insensitive and stored lowercased, so inserting `Authorization` after
/// `authorization` replaces the earlier value. Values are never printed: the
/// `Debug` output lists header names only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders {
    entries: BTreeMap<String, String>,
}

impl AuthHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers holding `Authorization: Bearer <token>`
    pub fn bearer(token: impl AsRef<str>) -> Self {
        let mut headers = Self::new();
        headers.insert("Authorization", format!("Bearer {}", token.as_ref()));
        headers
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(normalize(name.into()), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(mut name: String) -> String {
    name.make_ascii_lowercase();
    name
}

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

impl From<HashMap<String, String>> for AuthHeaders {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AuthHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (normalize(k.into()), v.into()))
                .collect(),
        }
    }
}
