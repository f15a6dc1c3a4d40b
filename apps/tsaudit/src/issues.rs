//! Advisory lint catalog over the effective configuration.
//!
//! A static, ordered list of rules; each carries a predicate, a rationale,
//! and a fix producing a corrected copy of the configuration. Detection
//! order is catalog order, not severity order.

use crate::models::config::EffectiveConfig;
use serde_json::{json, Value as Json};

/// Targets considered current; anything else (or an absent target) is
/// flagged as outdated.
pub const MODERN_TARGETS: &[&str] = &[
    "es2017", "es2018", "es2019", "es2020", "es2021", "es2022", "esnext",
];

/// One catalog rule: when `predicate` holds, the rule contributes an issue
/// whose fix is a copy of the input with only this rule's setting corrected.
pub struct IssueRule {
    pub id: &'static str,
    pub description: &'static str,
    pub rationale: &'static str,
    pub predicate: fn(&EffectiveConfig) -> bool,
    pub fix: fn(&EffectiveConfig) -> EffectiveConfig,
}

/// An issue detected against a concrete configuration.
#[derive(Debug, Clone)]
pub struct DetectedIssue {
    /// Index of the originating rule in the catalog.
    pub rule_index: usize,
    pub description: String,
    pub rationale: String,
    /// The configuration this rule's fix would produce.
    pub fixed: EffectiveConfig,
}

fn option_is_true(config: &EffectiveConfig, key: &str) -> bool {
    config.option(key) == Some(&Json::Bool(true))
}

fn option_str(config: &EffectiveConfig, key: &str) -> Option<String> {
    config.option(key)?.as_str().map(str::to_ascii_lowercase)
}

/// The static issue catalog. Fixed, process-wide, immutable.
pub const ISSUE_CATALOG: &[IssueRule] = &[
    IssueRule {
        id: "strict-mode",
        description: "Strict mode is not enabled",
        rationale: "strict enables the full set of type-safety checks and is the recommended baseline",
        predicate: |c| !option_is_true(c, "strict"),
        fix: |c| c.with_option("strict", json!(true)),
    },
    IssueRule {
        id: "outdated-target",
        description: "Compilation target is outdated",
        rationale: "older targets emit more transpilation boilerplate and miss modern runtime features",
        predicate: |c| match option_str(c, "target") {
            Some(t) => !MODERN_TARGETS.contains(&t.as_str()),
            None => true,
        },
        fix: |c| c.with_option("target", json!("es2022")),
    },
    IssueRule {
        id: "legacy-module",
        description: "Module system is not ESNext",
        rationale: "esnext modules keep output closest to source and enable bundler tree-shaking",
        predicate: |c| option_str(c, "module").as_deref() != Some("esnext"),
        fix: |c| c.with_option("module", json!("esnext")),
    },
    IssueRule {
        id: "source-maps",
        description: "Source map generation is disabled",
        rationale: "source maps make stack traces and debugging point at the original sources",
        predicate: |c| !option_is_true(c, "sourceMap"),
        fix: |c| c.with_option("sourceMap", json!(true)),
    },
    IssueRule {
        id: "es-module-interop",
        description: "esModuleInterop is not enabled",
        rationale: "interop avoids namespace-import pitfalls with CommonJS dependencies",
        predicate: |c| !option_is_true(c, "esModuleInterop"),
        fix: |c| c.with_option("esModuleInterop", json!(true)),
    },
    IssueRule {
        id: "skip-lib-check",
        description: "skipLibCheck is not enabled",
        rationale: "checking every declaration file slows builds without catching project errors",
        predicate: |c| !option_is_true(c, "skipLibCheck"),
        fix: |c| c.with_option("skipLibCheck", json!(true)),
    },
];

/// Run every catalog rule against `config`, in catalog order.
pub fn detect_issues(config: &EffectiveConfig) -> Vec<DetectedIssue> {
    ISSUE_CATALOG
        .iter()
        .enumerate()
        .filter(|(_, rule)| (rule.predicate)(config))
        .map(|(rule_index, rule)| DetectedIssue {
            rule_index,
            description: rule.description.to_string(),
            rationale: rule.rationale.to_string(),
            fixed: (rule.fix)(config),
        })
        .collect()
}

/// Apply the fix for catalog rule `index` against the *current* config.
///
/// Detection is re-run fresh; if the rule no longer fires (or the index is
/// out of range) the input is returned unchanged, making stale indices an
/// idempotent no-op.
pub fn apply_fix(config: &EffectiveConfig, index: usize) -> EffectiveConfig {
    detect_issues(config)
        .into_iter()
        .find(|issue| issue.rule_index == index)
        .map(|issue| issue.fixed)
        .unwrap_or_else(|| config.clone())
}
