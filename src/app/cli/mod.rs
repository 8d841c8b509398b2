//! CLI Adapter.

mod check;
mod env;
mod export;
mod init;
mod plan;
mod resolve;
mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::config::{CONFIG_ENV, DEFAULT_CONFIG_PATH, LOG_FORMAT_ENV, LogFormat, Settings};
use crate::app::logging;
use crate::domain::{AppError, ExportFormat, ExportScope};

#[derive(Parser)]
#[command(name = "trigctl")]
#[command(version)]
#[command(
    about = "Validate, resolve, and export serverless function trigger configuration",
    long_about = None
)]
struct Cli {
    /// Trigger configuration file
    #[arg(short, long, global = true, env = CONFIG_ENV, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Log output format (text or json)
    #[arg(long, global = true, env = LOG_FORMAT_ENV, default_value = "text")]
    log_format: LogFormat,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and report issues
    #[clap(visible_alias = "c")]
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Print the enabled triggers of each function
    #[clap(visible_alias = "r")]
    Resolve {
        /// Only resolve this function key
        #[arg(short, long)]
        function: Option<String>,
        /// Resolve even when validation reports errors
        #[arg(long)]
        allow_invalid: bool,
    },
    /// Summarize all declared triggers of one function
    Show {
        /// Function key
        function: String,
    },
    /// Export the configuration to another format
    #[clap(visible_alias = "x")]
    Export {
        /// What to export: document or resolved
        #[arg(short, long, default_value = "document")]
        scope: ExportScope,
        /// Output format: json, yaml, or toml
        #[arg(short = 'F', long, default_value = "json")]
        format: ExportFormat,
        /// Output path, or '-' for stdout
        #[arg(short, long, default_value = crate::app::config::DEFAULT_EXPORT_PATH)]
        output: String,
        /// Export the resolved view even when validation reports errors
        #[arg(long)]
        allow_invalid: bool,
    },
    /// List the infrastructure resources implied by enabled triggers
    Plan {
        /// Plan even when validation reports errors
        #[arg(long)]
        allow_invalid: bool,
    },
    /// Print the settings of one environment
    Env {
        /// Environment name
        name: String,
    },
    /// Create a starter configuration file
    #[clap(visible_alias = "i")]
    Init {
        /// Function key for the starter function
        #[arg(short, long, default_value = "ray_converter")]
        function: String,
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let settings =
        Settings { config_path: cli.config, log_format: cli.log_format, verbosity: cli.verbose };
    logging::init(&settings);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Check { strict } => check::run_check(&settings, strict),
        Commands::Resolve { function, allow_invalid } => {
            resolve::run_resolve(&settings, function, allow_invalid).map(|_| 0)
        }
        Commands::Show { function } => show::run_show(&settings, &function).map(|_| 0),
        Commands::Export { scope, format, output, allow_invalid } => {
            export::run_export(&settings, scope, format, &output, allow_invalid).map(|_| 0)
        }
        Commands::Plan { allow_invalid } => plan::run_plan(&settings, allow_invalid).map(|_| 0),
        Commands::Env { name } => env::run_env(&settings, &name).map(|_| 0),
        Commands::Init { function, force } => {
            init::run_init(&settings, function, force).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
