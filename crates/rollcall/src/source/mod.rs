//! # Data Sources
//!
//! The roster core never fetches anything itself. A [`RosterSource`] supplies the
//! raw roster, the log of completed rolls, and accepts new rolls.
//!
//! ## Upstream Documents
//!
//! Sources speak the upstream JSON shapes:
//!
//! ```text
//! students.json    {"students": [{"id", "first_name", "last_name", "photo_url"?}]}
//! activities.json  {"activity": [{"type": "roll", "date", "entity": Roll}]}
//! ```
//!
//! Any `roll_state` the students document carries is accepted and then discarded by
//! the store on ingest.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: JSON files in the data directory.
//! - [`memory::MemSource`]: in-memory, for tests and fixtures.

use crate::error::Result;
use crate::model::Person;
use crate::roll::{Activity, Roll, RollInput};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub trait RosterSource {
    fn fetch_students(&self) -> Result<Vec<Person>>;

    /// Saved rolls in the order the source keeps them.
    fn fetch_activities(&self) -> Result<Vec<Activity>>;

    /// Stores a completed roll. `name` defaults to `"Roll {id}"` when absent.
    fn save_roll(&mut self, input: &RollInput, name: Option<&str>) -> Result<Roll>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentsDocument {
    #[serde(default)]
    pub students: Vec<Person>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityDocument {
    #[serde(default)]
    pub activity: Vec<Activity>,
}

pub(crate) fn next_roll_id(activities: &[Activity]) -> u64 {
    activities
        .iter()
        .map(|a| a.entity.id)
        .max()
        .map_or(1, |max| max + 1)
}

pub(crate) fn roll_name(id: u64, name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => format!("Roll {}", id),
    }
}
