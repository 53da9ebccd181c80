//! # Rollcall CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file only
//! invokes `cli::run()` and turns an error into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/rollcall/`: UI-agnostic roster library (store, view, commands, API)
//! - `crates/rollcall-cli/`: this terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/rollcall-cli/src/cli/)                   │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command handlers + context wiring (commands.rs)          │
//! │  - Line-oriented roll session (session.rs)                  │
//! │  - Terminal rendering via Outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/rollcall/src/api.rs)                     │
//! │  - RosterApi: typed operations and dispatch(Action)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/rollcall/src/commands/*)             │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering with Outstanding
//!
//! Templates live in `src/cli/templates/` and are embedded with `include_str!()`.
//! Layout math (column widths, truncation) stays in `render.rs`; templates only pick
//! styles. `--output json` bypasses templates and prints the structured results.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
