//! Tool settings discovery and effective resolution.
//!
//! tsaudit reads `tsaudit.toml|yaml|yml` from the project root (or closest
//! ancestor) and merges it with CLI flags. Defaults:
//! - `output`: `text`
//! - `analyze.{ignoreErrors,autoFix,verbose,debug}`: false
//! - `export`: none
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Analysis-related configuration section under `[analyze]`.
pub struct AnalyzeCfg {
    #[serde(rename = "ignoreErrors")]
    pub ignore_errors: Option<bool>,
    #[serde(rename = "autoFix")]
    pub auto_fix: Option<bool>,
    pub verbose: Option<bool>,
    pub debug: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `tsaudit.toml|yaml`.
pub struct ToolConfig {
    pub output: Option<String>,
    pub export: Option<String>,
    #[serde(default)]
    pub analyze: Option<AnalyzeCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the binary after applying precedence.
pub struct Settings {
    pub root: PathBuf,
    pub output: String,
    pub export: Option<PathBuf>,
    pub verbose: bool,
    pub debug: bool,
    pub ignore_errors: bool,
    pub auto_fix: bool,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `tsaudit.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_project_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("tsaudit.toml").exists()
            || cur.join("tsaudit.yaml").exists()
            || cur.join("tsaudit.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ToolConfig` from `tsaudit.toml` or `tsaudit.yaml|yml` if present.
pub fn load_tool_config(root: &Path) -> Option<ToolConfig> {
    let toml_path = root.join("tsaudit.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: ToolConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["tsaudit.yaml", "tsaudit.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: ToolConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Settings` by merging CLI flags, discovered config, and defaults.
pub fn resolve_settings(
    cli_path: Option<&str>,
    cli_output: Option<&str>,
    cli_verbose: Option<bool>,
    cli_debug: Option<bool>,
    cli_ignore_errors: Option<bool>,
    cli_auto_fix: Option<bool>,
    cli_export: Option<&str>,
) -> Settings {
    let start = PathBuf::from(cli_path.unwrap_or("."));
    let root = detect_project_root(&start);
    let cfg = load_tool_config(&root).unwrap_or_default();
    let analyze = cfg.analyze.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "text".to_string());
    let export = cli_export
        .map(|s| s.to_string())
        .or(cfg.export)
        .map(PathBuf::from);
    let verbose = cli_verbose.or(analyze.verbose).unwrap_or(false);
    let debug = cli_debug.or(analyze.debug).unwrap_or(false);
    let ignore_errors = cli_ignore_errors.or(analyze.ignore_errors).unwrap_or(false);
    let auto_fix = cli_auto_fix.or(analyze.auto_fix).unwrap_or(false);

    Settings {
        root,
        output,
        export,
        verbose,
        debug,
        ignore_errors,
        auto_fix,
    }
}
