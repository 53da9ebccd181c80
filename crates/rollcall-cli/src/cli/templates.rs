//! # CLI Templates
//!
//! Template sources live as standalone files in `templates/` and are embedded here
//! as string constants.
//!
//! Templates are minijinja. Line breaks are literal: every line a template emits is
//! written out in the file, and the final newline of each file is dropped by the
//! engine. Styles are chosen in Rust and passed in as names (`p.state_style`), so
//! templates stay free of style conditionals.

pub const ROSTER_TEMPLATE: &str = include_str!("templates/roster.tmp");
pub const SUMMARY_TEMPLATE: &str = include_str!("templates/summary.tmp");
pub const ACTIVITY_TEMPLATE: &str = include_str!("templates/activity.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
