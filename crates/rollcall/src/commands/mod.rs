//! # Command Layer
//!
//! The roster's business logic. Each command is a plain function over a
//! [`RosterStore`] (and, for rolls and activity, a [`crate::source::RosterSource`])
//! that returns a structured [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Argument parsing**: that is the CLI layer's job
//! - **Re-sorting on mutation**: marking changes one record's state and nothing else
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `listed`: the displayed sequence after the command (sort, search applied)
//! - `affected`: records the command changed, post-change
//! - `summary`: head counts, when the command computes them
//! - `rolls`: completed rolls, saved or replayed
//! - `messages`: leveled messages for the UI to show
//!
//! Records are cloned into the result so it outlives the borrow of the store.
//!
//! ## Command Modules
//!
//! - [`ingest`]: replace the roster
//! - [`view`]: list, sort and search
//! - [`mark`]: mark, cycle and reset attendance
//! - [`roll`]: summary and roll completion
//! - [`activity`]: replay saved rolls

use crate::model::Person;
use crate::roll::{Activity, RollSummary};
use crate::store::RosterStore;
use serde::Serialize;

pub mod activity;
pub mod ingest;
pub mod mark;
pub mod roll;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected: Vec<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RollSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rolls: Vec<Activity>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, people: Vec<Person>) -> Self {
        self.listed = people;
        self
    }

    pub fn with_affected(mut self, people: Vec<Person>) -> Self {
        self.affected = people;
        self
    }

    pub fn with_summary(mut self, summary: RollSummary) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Clones the store's current displayed sequence.
pub(crate) fn displayed(store: &RosterStore) -> Vec<Person> {
    store.displayed().into_iter().cloned().collect()
}
