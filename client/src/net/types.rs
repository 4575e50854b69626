//! Wire DTOs for the product REST API.
//!
//! DESIGN
//! ======
//! The remote API returns numeric ids and prices while forms and routes carry
//! text, so identifiers and prices accept either JSON shape on the way in and
//! are kept as strings on the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque product identifier assigned by the remote API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_text_from_scalar(deserializer).map(Self)
    }
}

/// A catalog item as returned by the remote API.
///
/// The client trusts whatever the API sends; missing text fields default to
/// empty so a sparse response still renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Price as text, exactly as the API sent it.
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub price: String,
    #[serde(default)]
    pub image: String,
    /// Dropped to `None` when the API sends a shape that does not decode.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_optional_rating")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Price formatted for display, e.g. `$9.99`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Aggregate customer rating attached to a product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = self.rate.round().clamp(0.0, 5.0) as usize;
        for _ in 0..filled {
            f.write_str("\u{2605}")?;
        }
        for _ in filled..5 {
            f.write_str("\u{2606}")?;
        }
        write!(f, " ({}) ({} ratings)", self.rate, self.count)
    }
}

fn deserialize_text_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_optional_rating<'de, D>(deserializer: D) -> Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
