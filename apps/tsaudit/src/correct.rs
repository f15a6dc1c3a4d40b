//! Interactive correction of schema validation errors.
//!
//! Each error walks a small state machine: `Pending` (not yet asked) →
//! `Asked` (operator answered the yes/no question) → `Resolved` (replacement
//! written) or `Rejected` (error kept for the final report). Prompting is a
//! blocking exchange through the injected `Prompter` capability; errors are
//! processed strictly sequentially.

use crate::logging::Logger;
use crate::models::config::EffectiveConfig;
use crate::models::ValidationError;
use serde_json::Value as Json;

/// Blocking operator interaction. `id` keys the question for callers that
/// memoize answers (see `prompt::CachedPrompter`).
pub trait Prompter {
    fn prompt(&mut self, question: &str, id: &str) -> String;
}

enum PromptState {
    Pending,
    Asked(String),
    Resolved,
    Rejected,
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Parse an operator-supplied replacement: JSON when it parses, a plain
/// string otherwise.
fn parse_replacement(raw: &str) -> Json {
    let trimmed = raw.trim();
    serde_json::from_str(trimmed).unwrap_or_else(|_| Json::String(trimmed.to_string()))
}

/// Offer a correction for each validation error, in order.
///
/// Accepted corrections are written copy-on-write at the exact field path;
/// intermediate containers are not created, so a write through an absent
/// intermediate silently no-ops while the error is still dropped. Rejected
/// errors survive with their message rewritten `"<path>: <message>"`.
pub fn correct_interactively(
    config: &EffectiveConfig,
    errors: Vec<ValidationError>,
    prompter: &mut dyn Prompter,
    logger: &dyn Logger,
) -> (EffectiveConfig, Vec<ValidationError>) {
    let mut current = config.clone();
    let mut remaining = Vec::new();

    for error in errors {
        let dotted = error.dotted();
        let mut state = PromptState::Pending;
        loop {
            state = match state {
                PromptState::Pending => {
                    let question = format!("Correct '{}'? {} [y/N]", dotted, error.message);
                    PromptState::Asked(prompter.prompt(&question, &dotted))
                }
                PromptState::Asked(answer) => {
                    if is_affirmative(&answer) {
                        let raw = prompter.prompt(
                            &format!("New value for '{}':", dotted),
                            &format!("{}#value", dotted),
                        );
                        current = current.with_value(&error.path, parse_replacement(&raw));
                        PromptState::Resolved
                    } else {
                        PromptState::Rejected
                    }
                }
                PromptState::Resolved => {
                    logger.debug(&format!("corrected '{}'", dotted));
                    break;
                }
                PromptState::Rejected => {
                    remaining.push(ValidationError {
                        path: error.path.clone(),
                        message: format!("{}: {}", dotted, error.message),
                    });
                    break;
                }
            };
        }
    }
    (current, remaining)
}

/// Deterministic prompter driven by a prepared list of answers; used by
/// tests and non-interactive callers. Runs out of answers → empty string
/// (treated as a negative reply).
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(answers: I) -> Self {
        ScriptedPrompter {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, _question: &str, _id: &str) -> String {
        self.answers.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NullLogger;
    use serde_json::json;

    fn cfg(v: serde_json::Value) -> EffectiveConfig {
        EffectiveConfig::new(v.as_object().unwrap().clone())
    }

    #[test]
    fn test_accepted_correction_is_applied_and_dropped() {
        let config = cfg(json!({"compilerOptions": {"target": "invalid"}}));
        let errors = vec![ValidationError::new(
            &["compilerOptions", "target"],
            "expected one of [...]",
        )];
        let mut prompter = ScriptedPrompter::new(["y", "es2022"]);
        let (next, remaining) =
            correct_interactively(&config, errors, &mut prompter, &NullLogger);
        assert!(remaining.is_empty());
        assert_eq!(next.option("target"), Some(&json!("es2022")));
        // Copy-on-write: original untouched.
        assert_eq!(config.option("target"), Some(&json!("invalid")));
    }

    #[test]
    fn test_rejected_error_survives_with_path_prefix() {
        let config = cfg(json!({"compilerOptions": {"strict": "nope"}}));
        let errors = vec![ValidationError::new(
            &["compilerOptions", "strict"],
            "expected a boolean",
        )];
        let mut prompter = ScriptedPrompter::new(["n"]);
        let (_, remaining) = correct_interactively(&config, errors, &mut prompter, &NullLogger);
        assert_eq!(remaining.len(), 1);
        assert_eq!(
            remaining[0].message,
            "compilerOptions.strict: expected a boolean"
        );
    }

    #[test]
    fn test_write_through_absent_intermediate_noops_but_drops_error() {
        let config = cfg(json!({}));
        let errors = vec![ValidationError::new(
            &["compilerOptions", "target"],
            "expected one of [...]",
        )];
        let mut prompter = ScriptedPrompter::new(["yes", "es2022"]);
        let (next, remaining) =
            correct_interactively(&config, errors, &mut prompter, &NullLogger);
        assert!(remaining.is_empty());
        assert_eq!(next, config);
    }

    #[test]
    fn test_replacement_parses_json_values() {
        let config = cfg(json!({"compilerOptions": {"strict": "nope"}}));
        let errors = vec![ValidationError::new(
            &["compilerOptions", "strict"],
            "expected a boolean",
        )];
        let mut prompter = ScriptedPrompter::new(["y", "true"]);
        let (next, _) = correct_interactively(&config, errors, &mut prompter, &NullLogger);
        assert_eq!(next.option("strict"), Some(&json!(true)));
    }
}
