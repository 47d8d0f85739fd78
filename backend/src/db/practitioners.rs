//! # Practitioner Store
//!
//! Owns the `practitioners` table. `initialize` creates the table and inserts the
//! seed rows the first time it finds the table empty; the remaining operations
//! are read-only.

use super::criteria::{provided, Predicate};
use super::{Database, StoreError};
use common::model::practitioner::Practitioner;
use log::info;
use rusqlite::{params, OptionalExtension, Row};

const SELECT_PRACTITIONERS: &str = "SELECT id, name, specialty, rating, experience, location, \
     next_available, image FROM practitioners";

/// (name, specialty, rating, experience, location, next_available, image)
type SeedRow = (
    &'static str,
    &'static str,
    f64,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const SEED: [SeedRow; 5] = [
    (
        "Dr. Priya Sharma",
        "Ayurvedic Medicine",
        4.9,
        "15 years",
        "Downtown Wellness Center",
        "Today 2:00 PM",
        "https://images.pexels.com/photos/5452293/pexels-photo-5452293.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "Dr. Rajesh Patel",
        "Panchakarma Therapy",
        4.8,
        "12 years",
        "Holistic Health Hub",
        "Tomorrow 10:00 AM",
        "https://images.pexels.com/photos/5452201/pexels-photo-5452201.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "Dr. Maya Joshi",
        "Herbal Medicine",
        4.7,
        "18 years",
        "Natural Healing Center",
        "Today 4:30 PM",
        "https://images.pexels.com/photos/5452274/pexels-photo-5452274.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "Dr. Anand Kumar",
        "Pulse Diagnosis",
        4.6,
        "20 years",
        "Traditional Healing Center",
        "Tomorrow 3:00 PM",
        "https://images.pexels.com/photos/5452268/pexels-photo-5452268.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "Dr. Kavitha Nair",
        "Yoga Therapy",
        4.8,
        "10 years",
        "Mind-Body Wellness Studio",
        "Today 6:00 PM",
        "https://images.pexels.com/photos/5452275/pexels-photo-5452275.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
];

/// Optional filters for `PractitionerStore::search`. Absent or empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct PractitionerCriteria {
    pub specialty: Option<String>,
    pub location: Option<String>,
}

impl PractitionerCriteria {
    /// True when no criterion would narrow the result.
    pub fn is_empty(&self) -> bool {
        provided(self.specialty.as_deref()).is_none()
            && provided(self.location.as_deref()).is_none()
    }
}

#[derive(Debug, Clone)]
pub struct PractitionerStore {
    db: Database,
}

impl PractitionerStore {
    pub fn new(db: Database) -> Self {
        PractitionerStore { db }
    }

    /// Creates the table if needed and seeds it when empty. Safe to call on every start.
    pub fn initialize(&self) -> Result<(), StoreError> {
        let mut conn = self.db.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS practitioners (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                specialty TEXT NOT NULL,
                rating REAL NOT NULL,
                experience TEXT NOT NULL,
                location TEXT NOT NULL,
                next_available TEXT NOT NULL,
                image TEXT NOT NULL
            )",
            [],
        )?;

        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM practitioners", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(());
        }

        let tx = conn.transaction()?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO practitioners
                    (name, specialty, rating, experience, location, next_available, image)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (name, specialty, rating, experience, location, next_available, image) in SEED {
                insert.execute(params![
                    name,
                    specialty,
                    rating,
                    experience,
                    location,
                    next_available,
                    image
                ])?;
            }
        }
        tx.commit()?;
        info!("Seeded {} practitioners", SEED.len());
        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<Practitioner>, StoreError> {
        self.query(Predicate::new())
    }

    /// `Ok(None)` when no practitioner has this id.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Practitioner>, StoreError> {
        let conn = self.db.connect()?;
        let practitioner = conn
            .query_row(
                &format!("{SELECT_PRACTITIONERS} WHERE id = ?1"),
                params![id],
                practitioner_from_row,
            )
            .optional()?;
        Ok(practitioner)
    }

    /// Practitioners matching every provided criterion, case-insensitively.
    pub fn search(&self, criteria: &PractitionerCriteria) -> Result<Vec<Practitioner>, StoreError> {
        self.query(
            Predicate::new()
                .contains("specialty", criteria.specialty.as_deref())
                .contains("location", criteria.location.as_deref()),
        )
    }

    /// Practitioners whose name or specialty contains `text`.
    pub fn search_text(&self, text: &str) -> Result<Vec<Practitioner>, StoreError> {
        self.query(Predicate::new().contains_any(&["name", "specialty"], Some(text)))
    }

    fn query(&self, predicate: Predicate) -> Result<Vec<Practitioner>, StoreError> {
        let conn = self.db.connect()?;
        let sql = format!("{SELECT_PRACTITIONERS}{} ORDER BY id", predicate.where_clause());
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(predicate.params().as_slice(), practitioner_from_row)?;
        let practitioners = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(practitioners)
    }
}

fn practitioner_from_row(row: &Row<'_>) -> rusqlite::Result<Practitioner> {
    Ok(Practitioner {
        id: row.get(0)?,
        name: row.get(1)?,
        specialty: row.get(2)?,
        rating: row.get(3)?,
        experience: row.get(4)?,
        location: row.get(5)?,
        next_available: row.get(6)?,
        image: row.get(7)?,
    })
}
