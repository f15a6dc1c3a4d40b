//! Recursive discovery of candidate configuration files.
//!
//! Walks the project tree collecting files whose name exactly matches one of
//! the recognized configuration filenames. Hidden directories and the
//! dependency installation directory are skipped. Directory entries are
//! visited in sorted name order so discovery order is stable across runs.

use crate::errors::{AuditError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filenames treated as candidate configurations.
pub const RECOGNIZED_CONFIGS: &[&str] = &[
    "tsconfig.json",
    "tsconfig.base.json",
    "tsconfig.build.json",
    "jsconfig.json",
];

/// Name of the dependency installation directory, excluded from discovery
/// and structure scanning.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Discover recognized configuration files under `root`.
///
/// A read error on any visited directory aborts the whole discovery;
/// partial results are discarded.
pub fn discover_configs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, &mut found)?;
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| AuditError::filesystem(dir, e))?;
    let mut entries: Vec<_> = entries
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| AuditError::filesystem(dir, e))?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        let path = entry.path();
        if path.is_dir() {
            if name.starts_with('.') || name == DEPENDENCY_DIR {
                continue;
            }
            walk(&path, found)?;
        } else if RECOGNIZED_CONFIGS.contains(&name.as_str()) {
            found.push(path);
        }
    }
    Ok(())
}
