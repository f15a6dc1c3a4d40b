//! Configuration value types.
//!
//! `ConfigSource` is one parsed configuration file; `EffectiveConfig` is the
//! merged settings object the pipeline operates on. All transforms over
//! `EffectiveConfig` are copy-on-write: they return a new value and never
//! mutate a shared reference.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};
use std::path::PathBuf;

#[derive(Debug, Clone)]
/// One configuration file plus its parsed settings. Immutable once loaded.
pub struct ConfigSource {
    pub path: PathBuf,
    pub settings: Map<String, Json>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// The single merged settings object produced by the merge step.
///
/// Backed by `serde_json::Map` with `preserve_order`, so key order is
/// insertion order and merges are deterministic.
pub struct EffectiveConfig {
    pub settings: Map<String, Json>,
}

impl EffectiveConfig {
    pub fn new(settings: Map<String, Json>) -> Self {
        EffectiveConfig { settings }
    }

    /// Look up a nested value by path segments.
    pub fn get_path(&self, path: &[&str]) -> Option<&Json> {
        let (head, rest) = path.split_first()?;
        let mut cur = self.settings.get(*head)?;
        for seg in rest {
            cur = cur.as_object()?.get(*seg)?;
        }
        Some(cur)
    }

    /// The `compilerOptions` sub-object, when present and an object.
    pub fn compiler_options(&self) -> Option<&Map<String, Json>> {
        self.settings.get("compilerOptions")?.as_object()
    }

    /// One entry of `compilerOptions`.
    pub fn option(&self, key: &str) -> Option<&Json> {
        self.compiler_options()?.get(key)
    }

    /// A top-level array of strings (e.g. `files`, `include`, `exclude`).
    /// Non-string elements are dropped.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.settings.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        )
    }

    /// Copy-on-write write at an exact field path.
    ///
    /// Intermediate containers are NOT created: if any intermediate segment
    /// is absent or not an object, the write silently no-ops and an
    /// unchanged copy is returned. The leaf key itself may be created.
    pub fn with_value(&self, path: &[String], value: Json) -> Self {
        match set_in(&self.settings, path, value) {
            Some(next) => EffectiveConfig { settings: next },
            None => self.clone(),
        }
    }

    /// Copy-on-write write of one `compilerOptions` entry, creating the
    /// `compilerOptions` object when absent. Used by fixes and the
    /// dependency fold, which are allowed to create the containers they
    /// write into.
    pub fn with_option(&self, key: &str, value: Json) -> Self {
        let mut next = self.settings.clone();
        let entry = next
            .entry("compilerOptions".to_string())
            .or_insert_with(|| Json::Object(Map::new()));
        if let Json::Object(co) = entry {
            co.insert(key.to_string(), value);
        }
        EffectiveConfig { settings: next }
    }
}

fn set_in(map: &Map<String, Json>, path: &[String], value: Json) -> Option<Map<String, Json>> {
    let (head, rest) = path.split_first()?;
    let mut out = map.clone();
    if rest.is_empty() {
        out.insert(head.clone(), value);
        return Some(out);
    }
    match map.get(head.as_str()) {
        Some(Json::Object(inner)) => {
            let inner = set_in(inner, rest, value)?;
            out.insert(head.clone(), Json::Object(inner));
            Some(out)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cfg(v: Json) -> EffectiveConfig {
        match v {
            Json::Object(m) => EffectiveConfig::new(m),
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_get_path_and_option() {
        let c = cfg(json!({"compilerOptions": {"target": "es5"}, "files": ["a.ts", 1]}));
        assert_eq!(
            c.get_path(&["compilerOptions", "target"]),
            Some(&json!("es5"))
        );
        assert_eq!(c.option("target"), Some(&json!("es5")));
        assert_eq!(c.string_list("files"), Some(vec!["a.ts".to_string()]));
        assert!(c.get_path(&["compilerOptions", "missing"]).is_none());
    }

    #[test]
    fn test_with_value_is_copy_on_write() {
        let c = cfg(json!({"compilerOptions": {"strict": false}}));
        let path = vec!["compilerOptions".to_string(), "strict".to_string()];
        let next = c.with_value(&path, json!(true));
        assert_eq!(c.option("strict"), Some(&json!(false)));
        assert_eq!(next.option("strict"), Some(&json!(true)));
    }

    #[test]
    fn test_with_value_creates_leaf_but_not_intermediates() {
        let c = cfg(json!({"compilerOptions": {}}));
        let leaf = vec!["compilerOptions".to_string(), "target".to_string()];
        let next = c.with_value(&leaf, json!("es2022"));
        assert_eq!(next.option("target"), Some(&json!("es2022")));

        // Missing intermediate: silent no-op, unchanged copy.
        let deep = vec![
            "compilerOptions".to_string(),
            "paths".to_string(),
            "lib/*".to_string(),
        ];
        let unchanged = c.with_value(&deep, json!(["src/lib/*"]));
        assert_eq!(unchanged, c);
    }

    #[test]
    fn test_with_option_creates_compiler_options() {
        let c = cfg(json!({}));
        let next = c.with_option("strict", json!(true));
        assert_eq!(next.option("strict"), Some(&json!(true)));
        assert!(c.compiler_options().is_none());
    }
}
