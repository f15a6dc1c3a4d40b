//! Schema validation of the effective configuration.
//!
//! The schema is a fixed table of recognized option names and their allowed
//! value shapes. It is intentionally open: unrecognized keys pass through
//! untouched for forward compatibility, and every option is optional — an
//! empty settings object is valid.

use crate::models::config::EffectiveConfig;
use crate::models::ValidationError;
use serde_json::Value as Json;

#[derive(Debug, Clone, Copy)]
/// Allowed value shape for a recognized option.
pub enum Shape {
    /// One of a fixed set of identifiers, compared case-insensitively.
    Choice(&'static [&'static str]),
    Bool,
    Str,
    StrList,
}

pub const TARGETS: &[&str] = &[
    "es3", "es5", "es6", "es2015", "es2016", "es2017", "es2018", "es2019", "es2020", "es2021",
    "es2022", "esnext",
];

pub const MODULES: &[&str] = &[
    "none", "commonjs", "amd", "umd", "system", "es6", "es2015", "es2020", "es2022", "esnext",
    "node16", "nodenext",
];

pub const MODULE_RESOLUTIONS: &[&str] = &["classic", "node", "node16", "nodenext", "bundler"];

pub const JSX_MODES: &[&str] = &[
    "preserve",
    "react",
    "react-jsx",
    "react-jsxdev",
    "react-native",
];

/// Recognized `compilerOptions` entries.
pub const COMPILER_OPTION_SCHEMA: &[(&str, Shape)] = &[
    ("target", Shape::Choice(TARGETS)),
    ("module", Shape::Choice(MODULES)),
    ("moduleResolution", Shape::Choice(MODULE_RESOLUTIONS)),
    ("jsx", Shape::Choice(JSX_MODES)),
    ("strict", Shape::Bool),
    ("sourceMap", Shape::Bool),
    ("declaration", Shape::Bool),
    ("allowJs", Shape::Bool),
    ("esModuleInterop", Shape::Bool),
    ("skipLibCheck", Shape::Bool),
    ("noImplicitAny", Shape::Bool),
    ("resolveJsonModule", Shape::Bool),
    ("incremental", Shape::Bool),
    ("outDir", Shape::Str),
    ("rootDir", Shape::Str),
    ("baseUrl", Shape::Str),
    ("lib", Shape::StrList),
    ("types", Shape::StrList),
    ("typeRoots", Shape::StrList),
];

/// Recognized top-level entries.
pub const TOP_LEVEL_SCHEMA: &[(&str, Shape)] = &[
    ("files", Shape::StrList),
    ("include", Shape::StrList),
    ("exclude", Shape::StrList),
    ("extends", Shape::Str),
    ("compileOnSave", Shape::Bool),
];

/// Validate a configuration against the fixed schema tables.
///
/// Returns the validity verdict and one error per offending field, in
/// schema-table order. Does not mutate the input.
pub fn validate(config: &EffectiveConfig) -> (bool, Vec<ValidationError>) {
    let mut errors = Vec::new();
    for &(name, shape) in TOP_LEVEL_SCHEMA {
        if let Some(value) = config.settings.get(name) {
            if let Some(expected) = shape_mismatch(value, shape) {
                errors.push(ValidationError::new(&[name], expected));
            }
        }
    }
    match config.settings.get("compilerOptions") {
        Some(Json::Object(options)) => {
            for &(name, shape) in COMPILER_OPTION_SCHEMA {
                if let Some(value) = options.get(name) {
                    if let Some(expected) = shape_mismatch(value, shape) {
                        errors.push(ValidationError::new(&["compilerOptions", name], expected));
                    }
                }
            }
        }
        Some(_) => errors.push(ValidationError::new(&["compilerOptions"], "expected an object")),
        None => {}
    }
    (errors.is_empty(), errors)
}

fn shape_mismatch(value: &Json, shape: Shape) -> Option<String> {
    let ok = match shape {
        Shape::Choice(choices) => value
            .as_str()
            .map(|s| choices.iter().any(|c| c.eq_ignore_ascii_case(s)))
            .unwrap_or(false),
        Shape::Bool => value.is_boolean(),
        Shape::Str => value.is_string(),
        Shape::StrList => value
            .as_array()
            .map(|items| items.iter().all(Json::is_string))
            .unwrap_or(false),
    };
    if ok {
        return None;
    }
    Some(match shape {
        Shape::Choice(choices) => format!("expected one of [{}]", choices.join(", ")),
        Shape::Bool => "expected a boolean".to_string(),
        Shape::Str => "expected a string".to_string(),
        Shape::StrList => "expected an array of strings".to_string(),
    })
}
