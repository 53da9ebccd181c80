//! # CLI Behavior
//!
//! This is **one possible UI client** for rollcall. It is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`rollcall`)
//!
//! Running `rollcall` with no arguments lists the roster, same as `rollcall list`.
//!
//! ## One-Shot vs Session
//!
//! - `rollcall list` loads the roster, applies the requested view and prints it.
//!   Nothing is kept: the live roster is never persisted.
//! - `rollcall roll` opens a line-oriented session on stdin. Each line is one action
//!   (sort, search, mark, cycle, reset) or a read (list, summary). `save` completes
//!   the roll and hands it to the data directory. Errors are printed and the session
//!   keeps going.
//!
//! ## Module Structure
//!
//! - `commands`: `run()` and per-command handlers
//! - `session`: the roll session line parser and loop
//! - `render`: output formatting through templates
//! - `setup`: argument parsing via clap
//! - `styles`: the terminal theme
//! - `templates`: embedded template sources
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
mod session;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
