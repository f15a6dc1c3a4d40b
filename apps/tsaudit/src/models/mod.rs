//! Shared data models for analysis results and validation output.

pub mod config;

use serde::Serialize;

use crate::models::config::EffectiveConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A single schema violation with the exact field path that failed.
pub struct ValidationError {
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: &[&str], message: impl Into<String>) -> Self {
        ValidationError {
            path: path.iter().map(|s| s.to_string()).collect(),
            message: message.into(),
        }
    }

    /// Dotted rendering of the field path, e.g. `compilerOptions.target`.
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }
}

#[derive(Debug, Clone, Serialize)]
/// An advisory fix suggestion surfaced in the report.
pub struct Suggestion {
    pub description: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize)]
/// Terminal output of one analysis run.
pub struct AnalysisResult {
    pub config_path: String,
    pub valid: bool,
    pub messages: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    /// The effective configuration at completion; absent when no
    /// configuration could be loaded.
    pub effective: Option<EffectiveConfig>,
}
