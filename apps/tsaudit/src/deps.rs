//! Dependency configuration resolution and folding.
//!
//! Scans the dependency installation directory for per-dependency
//! configuration fragments and folds their path mappings and extra type
//! declarations into the effective configuration. Most dependencies carry
//! no configuration; those are skipped silently.

use crate::discovery::DEPENDENCY_DIR;
use crate::loader;
use crate::logging::Logger;
use crate::models::config::{ConfigSource, EffectiveConfig};
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Dependency name (scoped names use `@scope/name` form) to its resolved
/// configuration. `BTreeMap` keeps the fold order deterministic.
pub type DependencyConfigMap = BTreeMap<String, ConfigSource>;

/// Scan `<root>/node_modules` and resolve each dependency's configuration.
///
/// Scoped entries are expanded one level deeper. Missing manifests and
/// configurations are not errors.
pub fn resolve_dependency_configs(root: &Path, logger: &dyn Logger) -> DependencyConfigMap {
    let mut map = DependencyConfigMap::new();
    let deps_dir = root.join(DEPENDENCY_DIR);
    for (name, dir) in list_packages(&deps_dir) {
        if let Some(source) = resolve_package_config(&dir) {
            logger.debug(&format!(
                "dependency '{}' provides configuration {}",
                name,
                source.path.display()
            ));
            map.insert(name, source);
        }
    }
    map
}

fn list_packages(deps_dir: &Path) -> Vec<(String, std::path::PathBuf)> {
    let mut out = Vec::new();
    let Ok(entries) = fs::read_dir(deps_dir) else {
        return out;
    };
    let mut entries: Vec<_> = entries.flatten().collect();
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        if !entry.path().is_dir() || name.starts_with('.') {
            continue;
        }
        if name.starts_with('@') {
            // Scope directory: one level deeper, keyed as @scope/name.
            let Ok(inner) = fs::read_dir(entry.path()) else {
                continue;
            };
            let mut inner: Vec<_> = inner.flatten().collect();
            inner.sort_by_key(|e| e.file_name());
            for pkg in inner {
                if pkg.path().is_dir() {
                    let pkg_name = pkg.file_name().to_string_lossy().to_string();
                    out.push((format!("{}/{}", name, pkg_name), pkg.path()));
                }
            }
        } else {
            out.push((name, entry.path()));
        }
    }
    out
}

/// Resolve one dependency's configuration, trying candidates in order:
/// an explicit `tsconfig.json` in the package root, then a `tsconfig.json`
/// next to the manifest's declared type declarations. First parseable
/// candidate wins; anything else means the dependency has none.
fn resolve_package_config(pkg_dir: &Path) -> Option<ConfigSource> {
    let mut candidates = vec![pkg_dir.join("tsconfig.json")];
    if let Ok(manifest) = fs::read_to_string(pkg_dir.join("package.json")) {
        if let Ok(Json::Object(pkg)) = json5::from_str::<Json>(&manifest) {
            let declared = pkg
                .get("types")
                .or_else(|| pkg.get("typings"))
                .and_then(Json::as_str);
            if let Some(types_path) = declared {
                let types_dir = Path::new(types_path).parent().unwrap_or(Path::new(""));
                candidates.push(pkg_dir.join(types_dir).join("tsconfig.json"));
            }
        }
    }
    candidates
        .into_iter()
        .filter(|c| c.is_file())
        .find_map(|c| loader::load_config(&c).ok())
}

/// Fold dependency-declared settings into the effective configuration.
///
/// Pure transform: returns a new configuration. Path mappings are
/// namespaced `<dep>/<key>` with each target rewritten under the
/// dependency's installation path; extra type declarations are appended
/// with duplicates retained.
pub fn incorporate_dependency_configs(
    config: &EffectiveConfig,
    deps: &DependencyConfigMap,
) -> EffectiveConfig {
    let mut next = config.clone();
    for (name, source) in deps {
        let dep_source = EffectiveConfig::new(source.settings.clone());
        if let Some(Json::Object(paths)) = dep_source.option("paths") {
            for (key, targets) in paths {
                // Mappings with non-array targets are skipped.
                let Some(items) = targets.as_array() else {
                    continue;
                };
                let rewritten: Vec<Json> = items
                    .iter()
                    .filter_map(Json::as_str)
                    .map(|t| Json::String(format!("{}/{}/{}", DEPENDENCY_DIR, name, t)))
                    .collect();
                next = insert_path_mapping(&next, &format!("{}/{}", name, key), rewritten);
            }
        }
        if let Some(Json::Array(types)) = dep_source.option("types") {
            for t in types.iter().filter_map(Json::as_str) {
                next = append_type(&next, t);
            }
        }
    }
    next
}

fn insert_path_mapping(config: &EffectiveConfig, key: &str, targets: Vec<Json>) -> EffectiveConfig {
    let mut paths = match config.option("paths") {
        Some(Json::Object(m)) => m.clone(),
        _ => Map::new(),
    };
    paths.insert(key.to_string(), Json::Array(targets));
    config.with_option("paths", Json::Object(paths))
}

fn append_type(config: &EffectiveConfig, name: &str) -> EffectiveConfig {
    let mut types = match config.option("types") {
        Some(Json::Array(items)) => items.clone(),
        _ => Vec::new(),
    };
    types.push(Json::String(name.to_string()));
    config.with_option("types", Json::Array(types))
}
