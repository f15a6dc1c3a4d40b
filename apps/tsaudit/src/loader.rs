//! Loading and parsing of one configuration file.
//!
//! Configuration files are JSON with comments and trailing commas; `json5`
//! accepts that dialect and deserializes into `serde_json` values. The
//! loader never substitutes defaults: a missing file is `NotFound`, bad
//! content is `Parse`, and both propagate unmodified.

use crate::errors::{AuditError, Result};
use crate::models::config::ConfigSource;
use serde_json::Value as Json;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse one configuration file into a `ConfigSource`.
pub fn load_config(path: &Path) -> Result<ConfigSource> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AuditError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(AuditError::filesystem(path, e)),
    };
    let value: Json = json5::from_str(&text).map_err(|e| AuditError::parse(path, e.to_string()))?;
    match value {
        Json::Object(settings) => Ok(ConfigSource {
            path: path.to_path_buf(),
            settings,
        }),
        _ => Err(AuditError::parse(path, "top level is not an object")),
    }
}
