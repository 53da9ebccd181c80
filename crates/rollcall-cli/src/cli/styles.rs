//! Styles for the rollcall terminal client.
//!
//! Templates only ever name semantic styles (`present`, `time`, `id`); the colors
//! behind them are defined once here. Roll states get one style each so a marked
//! roster reads at a glance.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};
use rollcall::model::RollState;

pub mod names {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const MUTED: &str = "muted";
    pub const TIME: &str = "time";
    pub const ROLL_NAME: &str = "roll_name";

    pub const PRESENT: &str = "present";
    pub const LATE: &str = "late";
    pub const ABSENT: &str = "absent";
    pub const UNMARKED: &str = "unmarked";

    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static ROLLCALL_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    Theme::new()
        .add(names::ID, Style::new().yellow())
        .add(names::NAME, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::TIME, muted.italic())
        .add(names::ROLL_NAME, Style::new().bold())
        .add(names::PRESENT, Style::new().green())
        .add(names::LATE, Style::new().color256(rgb_to_ansi256((230, 160, 40))))
        .add(names::ABSENT, Style::new().red())
        .add(names::UNMARKED, Style::new().dim())
        .add(names::INFO, Style::new())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
});

pub fn roll_state_style(state: RollState) -> &'static str {
    match state {
        RollState::Present => names::PRESENT,
        RollState::Late => names::LATE,
        RollState::Absent => names::ABSENT,
        RollState::Unmarked => names::UNMARKED,
    }
}
