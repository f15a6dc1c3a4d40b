//! End-to-end analysis orchestration.
//!
//! One sequential pipeline per project root: discover → order → load →
//! merge → scan structure → resolve and fold dependency configurations →
//! validate → (optionally) correct interactively → structure analysis →
//! issue detection → (optionally) auto-fix → one `AnalysisResult`.
//!
//! The effective configuration is exclusively owned here for the run's
//! duration; every transform rebinds it copy-on-write.

use crate::correct::{self, Prompter};
use crate::deps;
use crate::discovery;
use crate::errors::Result;
use crate::issues::{self, ISSUE_CATALOG};
use crate::loader;
use crate::logging::Logger;
use crate::merge;
use crate::models::config::ConfigSource;
use crate::models::{AnalysisResult, Suggestion};
use crate::schema;
use crate::structure;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    /// Swallow discovery/load/parse failures and report absent data
    /// instead of aborting.
    pub ignore_errors: bool,
    /// Apply every detected fix in catalog order at the end of the run.
    pub auto_fix: bool,
}

pub struct Analyzer<'a> {
    pub options: AnalyzeOptions,
    pub logger: &'a dyn Logger,
}

impl<'a> Analyzer<'a> {
    pub fn new(options: AnalyzeOptions, logger: &'a dyn Logger) -> Self {
        Analyzer { options, logger }
    }

    /// Analyze the project rooted at `root`. Returns one result per run;
    /// callers may collect results across several roots for one report.
    pub fn analyze_project(
        &self,
        root: &Path,
        prompter: &mut dyn Prompter,
    ) -> Result<Vec<AnalysisResult>> {
        match self.run_pipeline(root, prompter) {
            Ok(result) => Ok(vec![result]),
            Err(e) if self.options.ignore_errors => {
                self.logger.warn(&format!("ignored: {}", e));
                Ok(vec![absent_result(root)])
            }
            Err(e) => Err(e),
        }
    }

    fn run_pipeline(&self, root: &Path, prompter: &mut dyn Prompter) -> Result<AnalysisResult> {
        let discovered = discovery::discover_configs(root)?;
        if discovered.is_empty() {
            self.logger.info("no configuration files discovered");
            return Ok(absent_result(root));
        }
        let ordered = merge::select_priority_order(&discovered);
        self.logger.info(&format!(
            "analyzing {} configuration file(s), primary: {}",
            ordered.len(),
            ordered[0].display()
        ));

        // Sources load sequentially in priority-selection order.
        let mut sources: Vec<ConfigSource> = Vec::with_capacity(ordered.len());
        for path in &ordered {
            sources.push(loader::load_config(path)?);
        }
        let mut config = merge::merge_sources(&sources);

        let project = structure::scan_project(root)?;
        let dep_configs = deps::resolve_dependency_configs(root, self.logger);
        if !dep_configs.is_empty() {
            self.logger.info(&format!(
                "folding {} dependency configuration(s)",
                dep_configs.len()
            ));
        }
        config = deps::incorporate_dependency_configs(&config, &dep_configs);

        let (mut valid, validation_errors) = schema::validate(&config);
        let mut messages = Vec::new();
        if valid || self.options.ignore_errors {
            for e in &validation_errors {
                messages.push(format!("{}: {}", e.dotted(), e.message));
            }
        } else {
            let (corrected, remaining) =
                correct::correct_interactively(&config, validation_errors, prompter, self.logger);
            config = corrected;
            // Validity reflects the corrected configuration plus anything
            // the operator declined to fix.
            let (revalid, _) = schema::validate(&config);
            valid = revalid && remaining.is_empty();
            messages.extend(remaining.into_iter().map(|e| e.message));
        }

        messages.extend(structure::analyze_structure(&config, &project));

        let detected = issues::detect_issues(&config);
        let suggestions: Vec<Suggestion> = detected
            .iter()
            .map(|i| Suggestion {
                description: i.description.clone(),
                rationale: i.rationale.clone(),
            })
            .collect();

        if self.options.auto_fix && !detected.is_empty() {
            let mut applied = 0usize;
            for index in 0..ISSUE_CATALOG.len() {
                let fixed = issues::apply_fix(&config, index);
                if fixed != config {
                    applied += 1;
                }
                config = fixed;
            }
            messages.push(format!("Auto-fix applied {} fix(es)", applied));
        }

        Ok(AnalysisResult {
            config_path: relative_display(&ordered[0], root),
            valid,
            messages,
            suggestions,
            effective: Some(config),
        })
    }
}

fn relative_display(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .replace('\\', "/")
}

fn absent_result(root: &Path) -> AnalysisResult {
    AnalysisResult {
        config_path: root.to_string_lossy().to_string(),
        valid: false,
        messages: vec!["No configuration found.".to_string()],
        suggestions: Vec::new(),
        effective: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correct::ScriptedPrompter;
    use crate::logging::NullLogger;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn analyze(root: &Path, options: AnalyzeOptions, answers: Vec<&str>) -> Vec<AnalysisResult> {
        let analyzer = Analyzer::new(options, &NullLogger);
        let mut prompter = ScriptedPrompter::new(answers);
        analyzer.analyze_project(root, &mut prompter).unwrap()
    }

    #[test]
    fn test_end_to_end_legacy_tsconfig() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("tsconfig.json"),
            json!({"compilerOptions": {"target": "es5", "module": "commonjs", "strict": false}})
                .to_string(),
        )
        .unwrap();

        let results = analyze(root, AnalyzeOptions::default(), vec![]);
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.config_path, "tsconfig.json");
        // es5/commonjs are schema-valid; the catalog flags them instead.
        assert!(r.valid);
        let described: Vec<&str> = r.suggestions.iter().map(|s| s.description.as_str()).collect();
        assert!(described.contains(&"Strict mode is not enabled"));
        assert!(described.contains(&"Compilation target is outdated"));
        assert!(described.contains(&"Module system is not ESNext"));
    }

    #[test]
    fn test_empty_directory_reports_no_configuration() {
        let dir = tempdir().unwrap();
        let results = analyze(dir.path(), AnalyzeOptions::default(), vec![]);
        assert!(!results[0].valid);
        assert_eq!(results[0].messages, vec!["No configuration found."]);
        assert!(results[0].effective.is_none());
    }

    #[test]
    fn test_parse_failure_aborts_unless_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tsconfig.json"), "{ broken").unwrap();

        let analyzer = Analyzer::new(AnalyzeOptions::default(), &NullLogger);
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        assert!(analyzer.analyze_project(root, &mut prompter).is_err());

        let results = analyze(
            root,
            AnalyzeOptions {
                ignore_errors: true,
                ..Default::default()
            },
            vec![],
        );
        assert_eq!(results[0].messages, vec!["No configuration found."]);
    }

    #[test]
    fn test_interactive_correction_restores_validity() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("tsconfig.json"),
            json!({"compilerOptions": {"target": "invalid"}}).to_string(),
        )
        .unwrap();

        let results = analyze(root, AnalyzeOptions::default(), vec!["y", "es2022"]);
        let r = &results[0];
        assert!(r.valid);
        let effective = r.effective.as_ref().unwrap();
        assert_eq!(effective.option("target"), Some(&json!("es2022")));
    }

    #[test]
    fn test_declined_correction_degrades_validity_not_exit() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("tsconfig.json"),
            json!({"compilerOptions": {"target": "invalid"}}).to_string(),
        )
        .unwrap();

        let results = analyze(root, AnalyzeOptions::default(), vec!["n"]);
        let r = &results[0];
        assert!(!r.valid);
        assert!(r
            .messages
            .iter()
            .any(|m| m.starts_with("compilerOptions.target:")));
    }

    #[test]
    fn test_auto_fix_applies_catalog_in_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("tsconfig.json"),
            json!({"compilerOptions": {"target": "es5", "strict": false}}).to_string(),
        )
        .unwrap();

        let results = analyze(
            root,
            AnalyzeOptions {
                auto_fix: true,
                ..Default::default()
            },
            vec![],
        );
        let effective = results[0].effective.as_ref().unwrap();
        assert_eq!(effective.option("strict"), Some(&json!(true)));
        assert_eq!(effective.option("target"), Some(&json!("es2022")));
        assert_eq!(effective.option("module"), Some(&json!("esnext")));
        assert_eq!(effective.option("sourceMap"), Some(&json!(true)));
        // Fully fixed: a second detection pass is clean, and the reported
        // count reflects the fixes that actually changed the configuration.
        assert!(crate::issues::detect_issues(effective).is_empty());
        assert!(results[0]
            .messages
            .iter()
            .any(|m| m == "Auto-fix applied 6 fix(es)"));
    }

    #[test]
    fn test_priority_merge_across_discovered_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("jsconfig.json"),
            json!({"compilerOptions": {"target": "es5", "allowJs": true}}).to_string(),
        )
        .unwrap();
        fs::write(
            root.join("tsconfig.json"),
            json!({"compilerOptions": {"target": "esnext"}}).to_string(),
        )
        .unwrap();

        let results = analyze(root, AnalyzeOptions::default(), vec![]);
        let r = &results[0];
        assert_eq!(r.config_path, "tsconfig.json");
        let effective = r.effective.as_ref().unwrap();
        // tsconfig.json outranks jsconfig.json; non-conflicting keys survive.
        assert_eq!(effective.option("target"), Some(&json!("esnext")));
        assert_eq!(effective.option("allowJs"), Some(&json!(true)));
    }
}
