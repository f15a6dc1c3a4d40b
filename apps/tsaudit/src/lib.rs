//! tsaudit core library.
//!
//! Programmatic API for analyzing tsconfig-style compiler configurations:
//! discovery, priority merge, schema validation, project cross-checks, and
//! report rendering.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `settings`: Tool settings discovery and effective resolution.
//! - `discovery`: Recursive configuration file discovery.
//! - `loader`: JSONC parsing of one configuration file.
//! - `merge`: Priority selection and layered merge.
//! - `deps`: Dependency configuration resolution and folding.
//! - `schema`: Validation against the recognized option schema.
//! - `structure`: Project scanning and file-selection cross-checks.
//! - `issues`: Static advisory rule catalog with fixes.
//! - `correct`: Interactive correction of validation errors.
//! - `prompt`: Operator prompt implementations (stdin, cached).
//! - `analyzer`: End-to-end orchestration.
//! - `output`: Text/JSON/HTML/Markdown report rendering.
//! - `logging`: Injected logging capability.
//! - `errors`: Error taxonomy.
//! - `models`: Shared data models.

pub mod analyzer;
pub mod cli;
pub mod correct;
pub mod deps;
pub mod discovery;
pub mod errors;
pub mod issues;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod models;
pub mod output;
pub mod prompt;
pub mod schema;
pub mod settings;
pub mod structure;
