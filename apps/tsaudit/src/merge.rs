//! Priority selection and layered merge of configuration sources.
//!
//! Selection keeps the historical front-insert-or-append behavior: the
//! front of the selected list is always the single highest-ranked filename
//! present, while the remainder keeps insertion order among ties. With three
//! or more distinct ranks the tail is NOT fully sorted; that behavior is
//! part of the contract and is deliberately not upgraded to a stable sort.
//!
//! The merge walks the selected list in reverse so that values from the
//! front (highest-priority) source land last and win.

use crate::models::config::{ConfigSource, EffectiveConfig};
use serde_json::{Map, Value as Json};
use std::path::{Path, PathBuf};

/// Precedence ranking for recognized filenames; lower index = higher
/// priority. Names absent from this list rank lowest.
pub const RANKED_CONFIGS: &[&str] = &["tsconfig.json", "tsconfig.base.json", "jsconfig.json"];

/// Top-level keys whose arrays are concatenated across sources with
/// multiplicities preserved.
pub const ARRAY_UNION_KEYS: &[&str] = &["files", "include", "exclude"];

/// Keys with dedicated merge handling; `extends` is an inheritance pointer
/// the merger does not chase and does not propagate.
const RESERVED_KEYS: &[&str] = &["compilerOptions", "files", "include", "exclude", "extends"];

/// Rank of a path's filename in the precedence list.
pub fn priority_rank(path: &Path) -> usize {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    RANKED_CONFIGS
        .iter()
        .position(|r| *r == name)
        .unwrap_or(RANKED_CONFIGS.len())
}

/// Order discovered paths so the front entry is the single highest-priority
/// file. For each path: insert at the front when the list is empty or its
/// rank beats the current front, otherwise append. Ties keep discovery
/// order.
pub fn select_priority_order(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut ordered: Vec<PathBuf> = Vec::with_capacity(paths.len());
    for path in paths {
        if ordered.is_empty() || priority_rank(path) < priority_rank(&ordered[0]) {
            ordered.insert(0, path.clone());
        } else {
            ordered.push(path.clone());
        }
    }
    ordered
}

/// Merge an ordered list of sources into one effective configuration.
///
/// Processing runs in reverse of the given order: `compilerOptions` is
/// shallow-merged (later-applied key wins, so the front source nets out on
/// top); the three array-union keys concatenate with duplicates retained;
/// every other non-reserved top-level key is assigned directly.
pub fn merge_sources(sources: &[ConfigSource]) -> EffectiveConfig {
    let mut acc: Map<String, Json> = Map::new();
    for source in sources.iter().rev() {
        match source.settings.get("compilerOptions") {
            Some(Json::Object(options)) => {
                let entry = acc
                    .entry("compilerOptions".to_string())
                    .or_insert_with(|| Json::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Json::Object(Map::new());
                }
                if let Json::Object(dst) = entry {
                    for (k, v) in options {
                        dst.insert(k.clone(), v.clone());
                    }
                }
            }
            // Non-object values pass through for the validator to flag.
            Some(other) => {
                acc.insert("compilerOptions".to_string(), other.clone());
            }
            None => {}
        }
        for key in ARRAY_UNION_KEYS {
            if let Some(Json::Array(items)) = source.settings.get(*key) {
                let entry = acc
                    .entry(key.to_string())
                    .or_insert_with(|| Json::Array(Vec::new()));
                if let Json::Array(dst) = entry {
                    dst.extend(items.iter().cloned());
                }
            }
        }
        for (k, v) in &source.settings {
            if !RESERVED_KEYS.contains(&k.as_str()) {
                acc.insert(k.clone(), v.clone());
            }
        }
    }
    EffectiveConfig::new(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn src(path: &str, v: Json) -> ConfigSource {
        match v {
            Json::Object(settings) => ConfigSource {
                path: PathBuf::from(path),
                settings,
            },
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_front_is_highest_ranked_regardless_of_discovery_order() {
        let discovered = vec![
            PathBuf::from("a/jsconfig.json"),
            PathBuf::from("b/tsconfig.base.json"),
            PathBuf::from("c/tsconfig.json"),
            PathBuf::from("d/tsconfig.json"),
        ];
        let ordered = select_priority_order(&discovered);
        assert_eq!(ordered[0], PathBuf::from("c/tsconfig.json"));
        // Ties among equally ranked files keep discovery order in the tail.
        assert_eq!(ordered.last(), Some(&PathBuf::from("d/tsconfig.json")));
    }

    #[test]
    fn test_unranked_names_are_lowest_priority() {
        let discovered = vec![
            PathBuf::from("tsconfig.build.json"),
            PathBuf::from("jsconfig.json"),
        ];
        let ordered = select_priority_order(&discovered);
        assert_eq!(ordered[0], PathBuf::from("jsconfig.json"));
    }

    #[test]
    fn test_front_source_wins_on_scalar_conflicts() {
        let merged = merge_sources(&[
            src(
                "tsconfig.json",
                json!({"compilerOptions": {"target": "es2022"}, "compileOnSave": true}),
            ),
            src(
                "tsconfig.base.json",
                json!({"compilerOptions": {"target": "es5", "strict": true}, "compileOnSave": false}),
            ),
        ]);
        assert_eq!(merged.option("target"), Some(&json!("es2022")));
        assert_eq!(merged.option("strict"), Some(&json!(true)));
        assert_eq!(merged.settings.get("compileOnSave"), Some(&json!(true)));
    }

    #[test]
    fn test_array_union_keeps_duplicates() {
        let merged = merge_sources(&[
            src("a", json!({"include": ["src/**", "lib/**"]})),
            src("b", json!({"include": ["src/**"]})),
        ]);
        let include = merged.string_list("include").unwrap();
        assert_eq!(include.len(), 3);
        assert_eq!(include.iter().filter(|p| *p == "src/**").count(), 2);
    }

    #[test]
    fn test_non_object_compiler_options_pass_through() {
        let merged = merge_sources(&[src(
            "tsconfig.json",
            json!({"compilerOptions": "broken"}),
        )]);
        assert_eq!(merged.settings.get("compilerOptions"), Some(&json!("broken")));

        // A higher-priority object still replaces a lower-priority bad value.
        let merged = merge_sources(&[
            src("tsconfig.json", json!({"compilerOptions": {"strict": true}})),
            src("jsconfig.json", json!({"compilerOptions": "broken"})),
        ]);
        assert_eq!(merged.option("strict"), Some(&json!(true)));
    }

    #[test]
    fn test_extends_is_not_propagated() {
        let merged = merge_sources(&[src("a", json!({"extends": "./base.json"}))]);
        assert!(merged.settings.get("extends").is_none());
    }

    #[test]
    fn test_merge_is_deterministic() {
        let sources = vec![
            src(
                "tsconfig.json",
                json!({"compilerOptions": {"b": 1, "a": 2}, "files": ["x.ts"]}),
            ),
            src(
                "jsconfig.json",
                json!({"compilerOptions": {"c": 3}, "files": ["y.ts"], "extra": "v"}),
            ),
        ];
        let first = serde_json::to_string(&merge_sources(&sources)).unwrap();
        for _ in 0..10 {
            let again = serde_json::to_string(&merge_sources(&sources)).unwrap();
            assert_eq!(first, again);
        }
    }
}
