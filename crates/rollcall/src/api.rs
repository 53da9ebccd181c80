//! # API Facade
//!
//! [`RosterApi`] is the single entry point for every roster operation, whatever the
//! UI. It owns one [`RosterStore`] for the session plus the [`RosterSource`] the
//! roster comes from, and forwards to the command layer.
//!
//! ## Two Ways In
//!
//! - **Typed operations** (`ingest`, `state`, `apply_view`, `mark_attendance`,
//!   `cycle_attendance`, `reset_all`) return plain values, for hosts that drive the
//!   store directly.
//! - **[`RosterApi::dispatch`]** takes a closed [`Action`] and returns a
//!   [`CmdResult`] with messages, for UIs that render whatever comes back.
//!
//! Both paths end in the same command functions, so they cannot drift apart.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: returns data, never strings for a terminal
//! - **Debouncing**: search is cheap enough to run on every keystroke; a UI that
//!   wants a quiet period waits before sending [`Action::Search`] with the full text
//!
//! ## Generic Over RosterSource
//!
//! - Production: `RosterApi<FileSource>`
//! - Testing: `RosterApi<MemSource>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{
    Person, PersonId, RollState, RosterState, SortField, SortOrder, ViewUpdate,
};
use crate::roll::RollSummary;
use crate::source::RosterSource;
use crate::store::RosterStore;

/// Every state-changing request a UI can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Ingest(Vec<Person>),
    Sort { field: SortField, order: SortOrder },
    Search(String),
    Mark { id: PersonId, state: RollState },
    Cycle(PersonId),
    Reset,
}

pub struct RosterApi<S: RosterSource> {
    store: RosterStore,
    source: S,
}

impl<S: RosterSource> RosterApi<S> {
    pub fn new(source: S) -> Self {
        Self {
            store: RosterStore::new(),
            source,
        }
    }

    /// Fetches the roster from the source and ingests it.
    pub fn load(&mut self) -> Result<CmdResult> {
        let raw = self.source.fetch_students()?;
        commands::ingest::run(&mut self.store, raw)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<CmdResult> {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::Ingest(raw) => commands::ingest::run(&mut self.store, raw),
            Action::Sort { field, order } => {
                Ok(commands::view::sort(&mut self.store, field, order))
            }
            Action::Search(text) => Ok(commands::view::search(&mut self.store, text)),
            Action::Mark { id, state } => commands::mark::mark(&mut self.store, id, state),
            Action::Cycle(id) => {
                commands::mark::cycle(&mut self.store, id).map(|(_, result)| result)
            }
            Action::Reset => Ok(commands::mark::reset_all(&mut self.store)),
        }
    }

    pub fn ingest(&mut self, raw: Vec<Person>) -> Result<()> {
        commands::ingest::run(&mut self.store, raw).map(|_| ())
    }

    pub fn state(&self) -> &RosterState {
        self.store.state()
    }

    /// Merges `update` into the view and returns the new displayed sequence.
    pub fn apply_view(&mut self, update: ViewUpdate) -> Vec<Person> {
        self.update_view(update).listed
    }

    /// Like [`RosterApi::apply_view`], keeping the messages (an empty search result).
    pub fn update_view(&mut self, update: ViewUpdate) -> CmdResult {
        commands::view::apply(&mut self.store, update)
    }

    pub fn displayed(&self) -> Vec<&Person> {
        self.store.displayed()
    }

    pub fn list(&self) -> CmdResult {
        commands::view::list(&self.store)
    }

    pub fn mark_attendance(&mut self, id: PersonId, state: RollState) -> Result<()> {
        commands::mark::mark(&mut self.store, id, state).map(|_| ())
    }

    /// Advances `id` along the roll cycle and returns the state it landed on.
    pub fn cycle_attendance(&mut self, id: PersonId) -> Result<RollState> {
        commands::mark::cycle(&mut self.store, id).map(|(state, _)| state)
    }

    pub fn reset_all(&mut self) {
        commands::mark::reset_all(&mut self.store);
    }

    pub fn summary(&self) -> RollSummary {
        RollSummary::from_people(self.store.records())
    }

    pub fn summary_result(&self) -> CmdResult {
        commands::roll::summary(&self.store)
    }

    pub fn complete_roll(&mut self, name: Option<&str>) -> Result<CmdResult> {
        commands::roll::complete(&self.store, &mut self.source, name)
    }

    pub fn activities(&self) -> Result<CmdResult> {
        commands::activity::list(&self.source)
    }

    pub fn activity(&self, roll_id: u64) -> Result<CmdResult> {
        commands::activity::get(&self.source, roll_id)
    }
}
