//! Project structure scanning and cross-checks against the configuration.
//!
//! The scanner produces a flat enumeration of project-relative paths,
//! independent of the configuration. The analyzer cross-references the
//! configuration's `files`/`include`/`exclude` lists against it, emitting
//! advisory messages only — it never fails.
//!
//! Pattern matching is a deliberately simplified wildcard matcher (`*` and
//! `?` only, no directory-boundary or brace semantics). That approximation,
//! false positives included, is the contract; do not upgrade it to real
//! glob matching.

use crate::discovery::DEPENDENCY_DIR;
use crate::errors::{AuditError, Result};
use crate::models::config::EffectiveConfig;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
/// Flat enumeration of the project tree, project-relative with `/`
/// separators. Built once per analysis run, read-only thereafter.
pub struct ProjectStructure {
    pub files: BTreeSet<String>,
    pub directories: BTreeSet<String>,
}

/// Walk the project tree into a `ProjectStructure`. Hidden directories and
/// the dependency installation directory are skipped, as in discovery.
pub fn scan_project(root: &Path) -> Result<ProjectStructure> {
    let mut structure = ProjectStructure::default();
    walk(root, root, &mut structure)?;
    Ok(structure)
}

fn walk(root: &Path, dir: &Path, out: &mut ProjectStructure) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| AuditError::filesystem(dir, e))?;
    let mut entries: Vec<_> = entries
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| AuditError::filesystem(dir, e))?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        let path = entry.path();
        let rel = pathdiff::diff_paths(&path, root)
            .unwrap_or_else(|| path.clone())
            .to_string_lossy()
            .replace('\\', "/");
        if path.is_dir() {
            if name.starts_with('.') || name == DEPENDENCY_DIR {
                continue;
            }
            out.directories.insert(rel);
            walk(root, &path, out)?;
        } else {
            out.files.insert(rel);
        }
    }
    Ok(())
}

/// Compile a simplified wildcard pattern: `*` matches any run of characters,
/// `?` matches one; everything else is literal. Anchored on both ends.
pub fn wildcard_regex(pattern: &str) -> Option<Regex> {
    let mut source = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(&ch.to_string())),
        }
    }
    source.push('$');
    Regex::new(&source).ok()
}

fn count_matches(patterns: &[String], structure: &ProjectStructure) -> usize {
    let compiled: Vec<Regex> = patterns.iter().filter_map(|p| wildcard_regex(p)).collect();
    structure
        .files
        .iter()
        .filter(|f| compiled.iter().any(|re| re.is_match(f)))
        .count()
}

/// Cross-reference the configuration's file-selection fields against the
/// actual structure. Returns advisory messages in a fixed order: missing
/// declared files, include match count, exclude match warning.
pub fn analyze_structure(config: &EffectiveConfig, structure: &ProjectStructure) -> Vec<String> {
    let mut messages = Vec::new();
    if let Some(files) = config.string_list("files") {
        for declared in &files {
            let normalized = declared.replace('\\', "/");
            if !structure.files.contains(&normalized) {
                messages.push(format!(
                    "Declared file missing from project: {}",
                    declared
                ));
            }
        }
    }
    if let Some(include) = config.string_list("include") {
        let n = count_matches(&include, structure);
        messages.push(format!("Include patterns match {} files", n));
    }
    if let Some(exclude) = config.string_list("exclude") {
        let n = count_matches(&exclude, structure);
        if n > 0 {
            messages.push(format!("Warning: exclude patterns match {} files", n));
        }
    }
    messages
}
