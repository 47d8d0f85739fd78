use serde::{Deserialize, Serialize};

/// A practitioner listed in the catalog.
///
/// Records are created once by the backend seeding step and never modified, so
/// `id` is stable for the lifetime of the database file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    /// Expected between 0.0 and 5.0. Not enforced.
    pub rating: f64,
    pub experience: String,
    pub location: String,
    pub next_available: String,
    pub image: String,
}
