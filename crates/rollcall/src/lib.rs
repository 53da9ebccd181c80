//! # Rollcall Architecture
//!
//! Rollcall is a **UI-agnostic roster library** for taking daily attendance. It holds
//! one session's roster, lets an operator sort, search and mark people, and saves
//! completed rolls for later replay. The terminal client in `rollcall-cli` is one
//! consumer; nothing in this crate assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (rollcall-cli)                                         │
//! │  - Parses arguments and session lines, renders output       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - RosterApi: typed operations + dispatch(Action)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Ingest, view, mark, roll, activity; return CmdResult     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs) + View Transformer (view.rs)              │
//! │  - Canonical records, current view, pure transform          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sources ([`source`]) sit beside the stack: they feed the roster in and take
//! completed rolls out.
//!
//! ## Session Flow
//!
//! 1. A source supplies the raw roster; [`api::RosterApi::load`] ingests it. Every
//!    person starts unmarked and the view starts at defaults.
//! 2. The operator sorts, searches and marks. Each action changes the store; the
//!    displayed sequence is recomputed from scratch on every read.
//! 3. Completing the roll snapshots every record to the source. The live roster is
//!    never persisted.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade and the [`api::Action`] enum
//! - [`commands`]: business logic
//! - [`store`]: the roster store
//! - [`view`]: the view transformer
//! - [`model`]: people, roll states, view parameters
//! - [`roll`]: completed rolls, activities and summaries
//! - [`source`]: where rosters come from and rolls go
//! - [`config`]: configuration
//! - [`init`]: data directory resolution and session setup
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod roll;
pub mod source;
pub mod store;
pub mod view;
