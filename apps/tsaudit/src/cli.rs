//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tsaudit",
    version,
    about = "Audit TypeScript/JavaScript compiler configurations",
    long_about = "tsaudit — discover tsconfig-style files, merge layered settings, validate them against the known option schema, cross-check them with the project layout and installed dependencies, and report suggested fixes.\n\nSettings precedence: CLI > tsaudit.toml > defaults.",
    after_help = "Examples:\n  tsaudit analyze\n  tsaudit analyze --path ./app --output json\n  tsaudit analyze --auto-fix --output markdown --export report.md\n  tsaudit analyze --ignore-errors",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current tsaudit version.")]
    Version,
    /// Analyze a project's compiler configuration
    #[command(
        about = "Run configuration analysis",
        long_about = "Discover configuration files under the project root, merge them by priority, validate the effective configuration, and emit a report. A schema-invalid configuration still exits 0; only pipeline failures exit 1.",
        after_help = "Examples:\n  tsaudit analyze --path . --output text\n  tsaudit analyze --output json --export report.json"
    )]
    Analyze {
        #[arg(long, help = "Project root (default: current dir)")]
        path: Option<String>,
        #[arg(long, help = "Output mode: text|json|html|markdown (default: text)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Log informational messages")]
        verbose: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Log debug details")]
        debug: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Continue with absent data when discovery/parsing fails")]
        ignore_errors: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Apply every suggested fix to the effective configuration")]
        auto_fix: bool,
        #[arg(long, help = "Write the rendered report to a file")]
        export: Option<String>,
    },
}
