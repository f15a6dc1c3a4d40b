//! tsaudit CLI binary entry point.
//! Wires settings, logging, and prompting together and prints the report.

use clap::Parser;
use tsaudit::analyzer::{AnalyzeOptions, Analyzer};
use tsaudit::cli::{Cli, Commands};
use tsaudit::logging::{ConsoleLogger, Logger};
use tsaudit::output;
use tsaudit::prompt::{CachedPrompter, StdinPrompter};
use tsaudit::settings;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Analyze {
            path,
            output,
            verbose,
            debug,
            ignore_errors,
            auto_fix,
            export,
        } => {
            let flag = |set: bool| if set { Some(true) } else { None };
            let settings = settings::resolve_settings(
                path.as_deref(),
                output.as_deref(),
                flag(verbose),
                flag(debug),
                flag(ignore_errors),
                flag(auto_fix),
                export.as_deref(),
            );
            let logger = ConsoleLogger {
                verbose: settings.verbose,
                debug: settings.debug,
            };
            let analyzer = Analyzer::new(
                AnalyzeOptions {
                    ignore_errors: settings.ignore_errors,
                    auto_fix: settings.auto_fix,
                },
                &logger,
            );
            let mut prompter = CachedPrompter::new(&settings.root, StdinPrompter);
            let results = match analyzer.analyze_project(&settings.root, &mut prompter) {
                Ok(results) => results,
                Err(e) => {
                    logger.error(&e.to_string());
                    std::process::exit(1);
                }
            };
            output::print_report(&results, &settings.output);
            if let Some(export_path) = &settings.export {
                let rendered = output::render(&results, &settings.output, false);
                if let Err(e) = std::fs::write(export_path, rendered) {
                    logger.error(&format!(
                        "failed to export report to {}: {}",
                        export_path.display(),
                        e
                    ));
                    std::process::exit(1);
                }
                logger.info(&format!("report exported to {}", export_path.display()));
            }
        }
    }
}
