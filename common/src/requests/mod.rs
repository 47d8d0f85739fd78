//! Query-string parameters for the list and search endpoints.
//!
//! Every field is optional at the deserialisation level; defaults (such as the
//! per-collection `limit`) and required-parameter checks are applied by the
//! backend handlers so that a missing `q` can be reported as a validation error.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};

/// `GET /api/practitioners`
#[derive(Debug, Default, Deserialize)]
pub struct PractitionerListQuery {
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub limit: Option<usize>,
}

/// `GET /api/products`
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub query: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub in_stock_only: bool,
    pub limit: Option<usize>,
}

/// `GET /api/practitioners/search` and `GET /api/products/search`.
///
/// `category` and `in_stock_only` only narrow product searches.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub in_stock_only: bool,
    pub limit: Option<usize>,
}

/// Accepts the usual query-string spellings of a boolean: `true`/`false`,
/// `1`/`0`, `yes`/`no`, `on`/`off`, `t`/`f` and `y`/`n`, in any case.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean")),
    }
}
