//! Completed rolls and the activity log they produce.
//!
//! A roll is a frozen copy of every person's state at the moment the operator
//! completed the session. Once saved it never changes; the activity log replays
//! saved rolls in the order the source returns them.

use crate::model::{Person, PersonId, RollState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEntry {
    pub student_id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub roll_state: RollState,
}

impl RollEntry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&Person> for RollEntry {
    fn from(person: &Person) -> Self {
        Self {
            student_id: person.id,
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            roll_state: person.roll_state,
        }
    }
}

/// What gets handed to the source when a roll is completed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollInput {
    pub student_roll_states: Vec<RollEntry>,
}

impl RollInput {
    /// Snapshot of `records` in roster order, ignoring any view.
    pub fn from_records(records: &[Person]) -> Self {
        Self {
            student_roll_states: records.iter().map(RollEntry::from).collect(),
        }
    }

    pub fn summary(&self) -> RollSummary {
        RollSummary::from_states(self.student_roll_states.iter().map(|e| e.roll_state))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub id: u64,
    pub name: String,
    pub completed_at: DateTime<Utc>,
    pub student_roll_states: Vec<RollEntry>,
}

impl Roll {
    pub fn summary(&self) -> RollSummary {
        RollSummary::from_states(self.student_roll_states.iter().map(|e| e.roll_state))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Roll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub date: DateTime<Utc>,
    pub entity: Roll,
}

impl Activity {
    pub fn roll(entity: Roll) -> Self {
        Self {
            kind: ActivityKind::Roll,
            date: entity.completed_at,
            entity,
        }
    }
}

/// Per-state head counts. `all` is the total, including unmarked people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollSummary {
    pub all: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub unmarked: usize,
}

impl RollSummary {
    pub fn from_states(states: impl IntoIterator<Item = RollState>) -> Self {
        let mut summary = Self::default();
        for state in states {
            summary.all += 1;
            match state {
                RollState::Present => summary.present += 1,
                RollState::Late => summary.late += 1,
                RollState::Absent => summary.absent += 1,
                RollState::Unmarked => summary.unmarked += 1,
            }
        }
        summary
    }

    pub fn from_people(people: &[Person]) -> Self {
        Self::from_states(people.iter().map(|p| p.roll_state))
    }

    pub fn count(&self, state: RollState) -> usize {
        match state {
            RollState::Present => self.present,
            RollState::Late => self.late,
            RollState::Absent => self.absent,
            RollState::Unmarked => self.unmarked,
        }
    }

    pub fn is_untouched(&self) -> bool {
        self.unmarked == self.all
    }
}
