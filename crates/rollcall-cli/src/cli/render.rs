//! # Rendering Module
//!
//! Styled terminal output through the `outstanding` crate.
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust because they
//! need Unicode-aware width math. Templates handle presentation: which style a piece
//! of text gets, and where lines break.
//!
//! Every public function takes `use_color`: `None` lets outstanding detect the
//! terminal, `Some(false)` forces plain text (`--no-color`, tests).

use super::setup::OutputMode;
use super::styles::{names, roll_state_style, ROLLCALL_THEME};
use super::templates::{
    ACTIVITY_TEMPLATE, MESSAGES_TEMPLATE, ROSTER_TEMPLATE, SUMMARY_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use chrono::{DateTime, Utc};
use outstanding::{render, render_with_color, truncate_to_width, ThemeChoice};
use rollcall::commands::{CmdMessage, MessageLevel};
use rollcall::model::{Person, PersonId, RollState, SortField, SortOrder, ViewParameters};
use rollcall::roll::{Activity, RollSummary};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const ID_WIDTH: usize = 4;
pub const STATE_WIDTH: usize = 8;
pub const MIN_NAME_WIDTH: usize = 10;

/// How results reach the terminal, resolved once from the global flags and config.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub mode: OutputMode,
    pub use_color: Option<bool>,
    pub line_width: usize,
}

impl Output {
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }
}

/// Pretty JSON for one-shot commands, one compact line per result in a session.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> rollcall::error::Result<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    out.push('\n');
    Ok(out)
}

#[derive(Serialize)]
struct PersonLineData {
    id: String,
    name: String,
    padding: String,
    state: String,
    state_style: &'static str,
}

#[derive(Serialize)]
struct RosterData {
    people: Vec<PersonLineData>,
    empty: bool,
    empty_message: String,
    view_line: Option<String>,
}

#[derive(Serialize)]
struct RollBlockData {
    id: String,
    name: String,
    date: String,
    ago: String,
    people: Vec<PersonLineData>,
    summary: String,
}

#[derive(Serialize)]
struct ActivityData {
    rolls: Vec<RollBlockData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    empty_message: &'a str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> Option<String> {
    let theme = ThemeChoice::from(&*ROLLCALL_THEME);
    let rendered = match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    };
    match rendered {
        Ok(out) => Some(out),
        Err(e) => {
            tracing::warn!(error = %e, "template rendering failed");
            None
        }
    }
}

fn person_line(
    id: PersonId,
    full_name: &str,
    state: RollState,
    line_width: usize,
) -> PersonLineData {
    let name_width = line_width
        .saturating_sub(ID_WIDTH + STATE_WIDTH + 4)
        .max(MIN_NAME_WIDTH);
    let name = truncate_to_width(full_name, name_width);
    let padding = " ".repeat(name_width.saturating_sub(name.width()));
    PersonLineData {
        id: format!("{:>width$}", id, width = ID_WIDTH),
        name,
        padding,
        state: state.to_string(),
        state_style: roll_state_style(state),
    }
}

/// One-line description of a non-default view, e.g. `sorted by last name, descending`.
pub fn describe_view(view: &ViewParameters) -> Option<String> {
    let mut parts = Vec::new();
    let field = match view.sort_field {
        SortField::None => None,
        SortField::FirstName => Some("first name"),
        SortField::LastName => Some("last name"),
    };
    if let Some(field) = field {
        let order = match view.sort_order {
            SortOrder::Descending => "descending",
            SortOrder::Ascending | SortOrder::None => "ascending",
        };
        parts.push(format!("sorted by {}, {}", field, order));
    }
    if !view.search_text.is_empty() {
        parts.push(format!("matching \"{}\"", view.search_text));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

pub fn render_roster(
    people: &[Person],
    view: &ViewParameters,
    line_width: usize,
    use_color: Option<bool>,
) -> String {
    let empty_message = if view.search_text.is_empty() {
        "The roster is empty.".to_string()
    } else {
        format!("No one matches \"{}\".", view.search_text)
    };
    let data = RosterData {
        people: people
            .iter()
            .map(|p| person_line(p.id, &p.full_name(), p.roll_state, line_width))
            .collect(),
        empty: people.is_empty(),
        empty_message: empty_message.clone(),
        view_line: describe_view(view),
    };
    render_template(ROSTER_TEMPLATE, &data, use_color).unwrap_or_else(|| {
        if people.is_empty() {
            format!("{}\n", empty_message)
        } else {
            people
                .iter()
                .map(|p| format!("{} {} {}\n", p.id, p.full_name(), p.roll_state))
                .collect()
        }
    })
}

pub fn render_summary(summary: &RollSummary, use_color: Option<bool>) -> String {
    render_template(SUMMARY_TEMPLATE, summary, use_color).unwrap_or_else(|| {
        format!(
            "present {}  late {}  absent {}  unmarked {}  total {}\n",
            summary.present, summary.late, summary.absent, summary.unmarked, summary.all
        )
    })
}

const SUMMARY_ORDER: [RollState; 4] = [
    RollState::Present,
    RollState::Late,
    RollState::Absent,
    RollState::Unmarked,
];

fn summary_line(summary: &RollSummary) -> String {
    let counts: Vec<String> = SUMMARY_ORDER
        .iter()
        .map(|&state| format!("{} {}", summary.count(state), state))
        .collect();
    format!("{} people: {}", summary.all, counts.join(", "))
}

pub fn render_activities(rolls: &[Activity], line_width: usize, use_color: Option<bool>) -> String {
    let empty_message = "No rolls have been saved yet.";
    let data = ActivityData {
        rolls: rolls
            .iter()
            .map(|activity| {
                let roll = &activity.entity;
                RollBlockData {
                    id: format!("#{}", roll.id),
                    name: roll.name.clone(),
                    date: activity.date.format("%Y-%m-%d %H:%M").to_string(),
                    ago: format!("({})", format_time_ago(activity.date)),
                    people: roll
                        .student_roll_states
                        .iter()
                        .map(|e| person_line(e.student_id, &e.full_name(), e.roll_state, line_width))
                        .collect(),
                    summary: summary_line(&roll.summary()),
                }
            })
            .collect(),
        empty: rolls.is_empty(),
        empty_message: empty_message.to_string(),
    };
    render_template(ACTIVITY_TEMPLATE, &data, use_color).unwrap_or_else(|| {
        if rolls.is_empty() {
            format!("{}\n", empty_message)
        } else {
            rolls
                .iter()
                .map(|a| format!("#{} {}\n", a.entity.id, a.entity.name))
                .collect()
        }
    })
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: Option<bool>) -> String {
    let data = TextListData {
        lines,
        empty_message,
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color).unwrap_or_else(|| {
        if lines.is_empty() {
            format!("{}\n", empty_message)
        } else {
            lines.iter().map(|l| format!("{}\n", l)).collect()
        }
    })
}

pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
