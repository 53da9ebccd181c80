//! # Roster Store
//!
//! The single source of truth for one attendance session: the canonical records in
//! roster order plus the last-applied [`ViewParameters`].
//!
//! The store only holds data. It does not know about sorting or searching beyond
//! remembering the parameters; [`crate::view::transform`] derives the displayed
//! sequence on every read, so there is nothing to invalidate.
//!
//! ## Ingest Is All-or-Nothing
//!
//! A new roster is validated into a fresh state first and swapped in only when it
//! is valid. A rejected ingest leaves the previous records, states and view exactly
//! as they were.
//!
//! ## Lookups
//!
//! An id → position map is rebuilt on every ingest. Positions never move during a
//! session because mutation only touches `roll_state`.

use crate::error::{Result, RollcallError};
use crate::model::{Person, PersonId, RollState, RosterState, ViewParameters, ViewUpdate};
use crate::view;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RosterStore {
    state: RosterState,
    positions: HashMap<PersonId, usize>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the roster. Every record starts unmarked and the view goes back to
    /// defaults. Fails on a duplicate id without touching the current roster.
    pub fn ingest(&mut self, raw: Vec<Person>) -> Result<()> {
        let mut positions = HashMap::with_capacity(raw.len());
        let mut records = Vec::with_capacity(raw.len());

        for (pos, mut person) in raw.into_iter().enumerate() {
            if positions.insert(person.id, pos).is_some() {
                return Err(RollcallError::InvalidInput(format!(
                    "duplicate person id {} in roster",
                    person.id
                )));
            }
            person.roll_state = RollState::Unmarked;
            records.push(person);
        }

        tracing::debug!(count = records.len(), "roster ingested");
        self.state = RosterState {
            records,
            view: ViewParameters::default(),
        };
        self.positions = positions;
        Ok(())
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn records(&self) -> &[Person] {
        &self.state.records
    }

    pub fn view(&self) -> &ViewParameters {
        &self.state.view
    }

    pub fn len(&self) -> usize {
        self.state.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.records.is_empty()
    }

    pub fn merge_view(&mut self, update: ViewUpdate) {
        self.state.view.merge(update);
        tracing::debug!(view = ?self.state.view, "view updated");
    }

    /// The records as the operator currently sees them.
    pub fn displayed(&self) -> Vec<&Person> {
        view::transform(&self.state.records, &self.state.view)
    }

    pub fn get(&self, id: PersonId) -> Result<&Person> {
        let pos = self.position(id)?;
        Ok(&self.state.records[pos])
    }

    /// Sets one record's state and returns the updated record.
    pub fn set_roll_state(&mut self, id: PersonId, state: RollState) -> Result<&Person> {
        let pos = self.position(id)?;
        let person = &mut self.state.records[pos];
        person.roll_state = state;
        tracing::debug!(id, state = %state, "roll state set");
        Ok(person)
    }

    /// Puts every record back to unmarked. Returns how many records changed.
    pub fn reset_roll_states(&mut self) -> usize {
        let mut changed = 0;
        for person in &mut self.state.records {
            if person.roll_state != RollState::Unmarked {
                person.roll_state = RollState::Unmarked;
                changed += 1;
            }
        }
        tracing::debug!(changed, "roll states reset");
        changed
    }

    fn position(&self, id: PersonId) -> Result<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or(RollcallError::NotFound(id))
    }
}
