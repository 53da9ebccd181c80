//! # Data Directory and Session Setup
//!
//! Everything rollcall reads or writes lives in one data directory: the roster
//! document, the saved rolls, and an optional `rollcall.toml`.
//!
//! ## Resolution Order
//!
//! [`resolve_data_dir`] picks the first that applies:
//!
//! 1. An explicit override (the CLI's `--data`).
//! 2. The `ROLLCALL_DATA` environment variable.
//! 3. `<cwd>/.rollcall`, when it exists.
//! 4. The OS data directory (via the `directories` crate).
//!
//! The directory does not have to exist yet: reads treat missing documents as
//! empty and the first write creates it.

use crate::api::RosterApi;
use crate::config::RollcallConfig;
use crate::error::{Result, RollcallError};
use crate::source::fs::FileSource;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "ROLLCALL_DATA";
pub const LOCAL_DIR_NAME: &str = ".rollcall";

pub struct RollcallContext {
    pub api: RosterApi<FileSource>,
    pub config: RollcallConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(cwd: &Path, data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let local = cwd.join(LOCAL_DIR_NAME);
    if local.is_dir() {
        return Ok(local);
    }
    ProjectDirs::from("com", "rollcall", "rollcall")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RollcallError::Source(
                "could not determine a data directory; pass --data or set ROLLCALL_DATA"
                    .to_string(),
            )
        })
}

/// Resolves the data directory, loads configuration and builds a file-backed API.
/// The roster is not fetched; call [`RosterApi::load`] for that.
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> Result<RollcallContext> {
    let data_dir = resolve_data_dir(cwd, data_override)?;
    let config = RollcallConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), ?config, "initialized");

    let source = FileSource::new(data_dir.clone())
        .with_students_file(&config.students_file)
        .with_activities_file(&config.activities_file);

    Ok(RollcallContext {
        api: RosterApi::new(source),
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn override_wins() {
        let cwd = tempdir().unwrap();
        fs::create_dir(cwd.path().join(LOCAL_DIR_NAME)).unwrap();
        let explicit = cwd.path().join("elsewhere");

        let resolved = resolve_data_dir(cwd.path(), Some(explicit.clone())).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn initialize_uses_configured_file_names() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("rollcall.toml"),
            "students_file = \"homeroom.json\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("homeroom.json"),
            r#"{"students": [{"id": 1, "first_name": "Ida", "last_name": "Moe"}]}"#,
        )
        .unwrap();

        let mut ctx = initialize(dir.path(), Some(dir.path().to_path_buf())).unwrap();
        ctx.api.load().unwrap();
        assert_eq!(ctx.config.students_file, "homeroom.json");
        assert_eq!(ctx.api.state().records[0].first_name, "Ida");
        assert_eq!(ctx.data_dir, dir.path());
    }
}
