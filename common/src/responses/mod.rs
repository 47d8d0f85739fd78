//! Envelopes returned by the list and search endpoints.
//!
//! `total` is always the size of the full matching set, counted before the
//! `limit` truncation, so clients can tell when more results exist.

use crate::model::practitioner::Practitioner;
use crate::model::product::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PractitionerResponse {
    pub practitioners: Vec<Practitioner>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

/// Keeps the first `limit` items and reports the count before truncation.
pub fn truncate<T>(mut items: Vec<T>, limit: usize) -> (Vec<T>, usize) {
    let total = items.len();
    items.truncate(limit);
    (items, total)
}

impl PractitionerResponse {
    pub fn limited(practitioners: Vec<Practitioner>, limit: usize) -> Self {
        let (practitioners, total) = truncate(practitioners, limit);
        Self {
            practitioners,
            total,
        }
    }
}

impl ProductResponse {
    pub fn limited(products: Vec<Product>, limit: usize) -> Self {
        let (products, total) = truncate(products, limit);
        Self { products, total }
    }
}
