//! # Configuration
//!
//! Rollcall configuration is a [`confique`] struct, resolved in priority order:
//!
//! 1. **Environment variables**: `ROLLCALL_STUDENTS_FILE`, `ROLLCALL_ACTIVITIES_FILE`,
//!    `ROLLCALL_LINE_WIDTH`.
//! 2. **Data directory file**: `<data dir>/rollcall.toml`.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `students_file` | `students.json` | Roster document, relative to the data directory |
//! | `activities_file` | `activities.json` | Saved rolls, relative to the data directory |
//! | `line_width` | `80` | Width used when laying out the roster in a terminal |
//!
//! ## CLI Usage
//!
//! - `rollcall config`: show the resolved values.
//! - `rollcall config gen`: print a commented `rollcall.toml` template.

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "rollcall.toml";

/// Configuration for rollcall, stored in `rollcall.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RollcallConfig {
    /// Roster document, relative to the data directory.
    #[config(default = "students.json", env = "ROLLCALL_STUDENTS_FILE")]
    pub students_file: String,

    /// Saved rolls, relative to the data directory.
    #[config(default = "activities.json", env = "ROLLCALL_ACTIVITIES_FILE")]
    pub activities_file: String,

    /// Width used when laying out the roster in a terminal.
    #[config(default = 80, env = "ROLLCALL_LINE_WIDTH")]
    pub line_width: usize,
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            students_file: "students.json".to_string(),
            activities_file: "activities.json".to_string(),
            line_width: 80,
        }
    }
}

impl RollcallConfig {
    /// Environment first, then `<data_dir>/rollcall.toml`, then defaults. A missing
    /// file is fine; a malformed one is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = Self::builder()
            .env()
            .file(data_dir.join(CONFIG_FILE_NAME))
            .load()?;
        Ok(config)
    }

    /// A commented TOML template listing every key with its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
