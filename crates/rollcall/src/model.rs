//! # Domain Model: People, Roll States and View Parameters
//!
//! This module defines the data the roster manager works on: [`Person`] records, the
//! [`RollState`] each person is marked with, and the [`ViewParameters`] that decide how
//! the roster is displayed.
//!
//! ## Who Owns What
//!
//! - **Upstream** owns identity and names. `id`, `first_name` and `last_name` arrive
//!   from the data source and the core never rewrites them.
//! - **The core** owns `roll_state`. Whatever the source sends is discarded on ingest;
//!   every person starts the session [`RollState::Unmarked`].
//!
//! ## The Roll Cycle
//!
//! Operators click through states rather than pick them, so the states form a loop:
//!
//! ```text
//! unmarked ──► present ──► late ──► absent
//!                 ▲                   │
//!                 └───────────────────┘
//! ```
//!
//! `unmarked` is only an entry point; once a person is marked there is no way back
//! to it except a bulk reset. See [`RollState::next`].
//!
//! ## Wire Format
//!
//! Roll states travel as lowercase strings. The unmarked state is spelled `"unmark"`
//! upstream; `"unmarked"` is accepted on input too.
//!
//! ## Partial View Updates
//!
//! A search must not wipe an active sort, and a sort must not wipe an active search.
//! [`ViewUpdate`] carries only the fields the caller wants to change and
//! [`ViewParameters::merge`] folds it over the current parameters.

use crate::error::RollcallError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PersonId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollState {
    #[default]
    #[serde(rename = "unmark", alias = "unmarked")]
    Unmarked,
    Present,
    Late,
    Absent,
}

impl RollState {
    pub const ALL: [RollState; 4] = [
        RollState::Unmarked,
        RollState::Present,
        RollState::Late,
        RollState::Absent,
    ];

    /// The state a click moves to: unmarked and absent both advance to present.
    pub fn next(self) -> Self {
        match self {
            RollState::Unmarked | RollState::Absent => RollState::Present,
            RollState::Present => RollState::Late,
            RollState::Late => RollState::Absent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RollState::Unmarked => "unmarked",
            RollState::Present => "present",
            RollState::Late => "late",
            RollState::Absent => "absent",
        }
    }
}

impl fmt::Display for RollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollState {
    type Err = RollcallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unmark" | "unmarked" => Ok(RollState::Unmarked),
            "present" => Ok(RollState::Present),
            "late" => Ok(RollState::Late),
            "absent" => Ok(RollState::Absent),
            other => Err(RollcallError::InvalidInput(format!(
                "unknown roll state \"{}\" (expected unmarked, present, late or absent)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roll_state: RollState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Person {
    pub fn new(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            roll_state: RollState::Unmarked,
            photo_url: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The value a sort on `field` compares. `None` for [`SortField::None`].
    pub fn sort_key(&self, field: SortField) -> Option<&str> {
        match field {
            SortField::None => None,
            SortField::FirstName => Some(&self.first_name),
            SortField::LastName => Some(&self.last_name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    None,
    FirstName,
    LastName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewParameters {
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub search_text: String,
}

impl ViewParameters {
    /// Folds the set fields of `update` over `self`. Unset fields are left alone.
    pub fn merge(&mut self, update: ViewUpdate) {
        if let Some(field) = update.sort_field {
            self.sort_field = field;
        }
        if let Some(order) = update.sort_order {
            self.sort_order = order;
        }
        if let Some(text) = update.search_text {
            self.search_text = text;
        }
    }

    /// True when the transformer would hand back the records untouched.
    pub fn is_identity(&self) -> bool {
        self.sort_field == SortField::None && self.search_text.is_empty()
    }
}

/// A partial [`ViewParameters`]: `None` means "keep the current value".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewUpdate {
    pub sort_field: Option<SortField>,
    pub sort_order: Option<SortOrder>,
    pub search_text: Option<String>,
}

impl ViewUpdate {
    pub fn sort(field: SortField, order: SortOrder) -> Self {
        Self {
            sort_field: Some(field),
            sort_order: Some(order),
            search_text: None,
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }
}

/// The externally visible snapshot of a roster session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RosterState {
    pub records: Vec<Person>,
    pub view: ViewParameters,
}
