//! Record and identifier types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::price::Price;

/// Stable record identifier.
///
/// Catalog endpoints hand out numbers (of any sign or precision) or strings;
/// both are accepted and only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(n.into())
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n.into())
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

/// A product-like catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub popularity: f64,
    pub price: Price,
    pub category: String,
    pub ratings: f64,
}

impl Record {
    /// Creates a record; `price` is parsed immediately
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        popularity: f64,
        price: impl Into<Price>,
        category: impl Into<String>,
        ratings: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            popularity,
            price: price.into(),
            category: category.into(),
            ratings,
        }
    }
}
