// Rust guideline compliant 2026-10-19

//! Canary CLI Application
//!
//! Command-line interface for resolving canary config names to config IDs.

use canary_app::AppError;
use canary_cli::commands::resolve::{self, ResolveSource};
use canary_cli::{create_formatter, logging, OutputFormatter};
use canary_core::{Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "canary-resolve",
    version,
    about = "Resolve canary config names to config IDs",
    long_about = "Looks up a canary config by name within an application and prints its config ID. Exactly one config must match; zero or several matches are errors.",
    after_help = "Examples:\n  canary-resolve resolve --name latency --application checkout\n  canary-resolve --json resolve --stage stage.json --catalog configs.json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Directory containing canary.toml
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum FormatArg {
    Json,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve a canary config name to its config ID
    Resolve {
        /// Canary config name
        #[arg(long, requires = "application", conflicts_with = "stage")]
        name: Option<String>,

        /// Application the config belongs to
        #[arg(long, requires = "name")]
        application: Option<String>,

        /// Stage execution JSON file ({"application": ..., "context": {...}})
        #[arg(long, required_unless_present = "name")]
        stage: Option<PathBuf>,

        /// Catalog snapshot file (JSON array or JSON Lines)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let flag_format = match cli.format {
        Some(FormatArg::Json) => Some(OutputFormat::Json),
        Some(FormatArg::Plain) => Some(OutputFormat::Plain),
        None if cli.json => Some(OutputFormat::Json),
        None => None,
    };

    let config = match Config::load(&cli.config_dir) {
        Ok(config) => config,
        Err(error) => {
            let formatter = create_formatter(flag_format.unwrap_or_default());
            return Ok(report_failure(formatter.as_ref(), &AppError::from(error)));
        }
    };
    let formatter = create_formatter(flag_format.unwrap_or(config.output_format));

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let _guard = match logging::init_tracing(log_level, config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(error) => return Ok(report_failure(formatter.as_ref(), &error)),
    };

    match cli.command {
        Some(Commands::Resolve {
            name,
            application,
            stage,
            catalog,
        }) => {
            let source = match (name, application, stage) {
                (Some(name), Some(application), _) => ResolveSource::Flags { name, application },
                (_, _, Some(path)) => ResolveSource::Stage(path),
                _ => {
                    let error = AppError::InvalidInput(
                        "Either --name and --application or --stage is required".to_string(),
                    );
                    return Ok(report_failure(formatter.as_ref(), &error));
                }
            };
            let catalog_path = catalog.unwrap_or_else(|| config.catalog_path.clone());

            match resolve::execute(&source, &catalog_path) {
                Ok(config_id) => println!("{}", formatter.format_resolved(&config_id)),
                Err(error) => {
                    tracing::error!(code = ?error.code(), error = %error, "resolve failed");
                    return Ok(report_failure(formatter.as_ref(), &error));
                }
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn report_failure(formatter: &dyn OutputFormatter, error: &AppError) -> ExitCode {
    eprintln!("{}", formatter.format_error(error));
    ExitCode::FAILURE
}
