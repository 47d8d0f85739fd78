//! Wire types shared between the catalog backend and its clients.
//!
//! - `model`: the entities served by the API.
//! - `requests`: query-string parameters accepted by the list and search endpoints.
//! - `responses`: the JSON envelopes wrapping list and search results.

pub mod model;
pub mod requests;
pub mod responses;
