//! Export command implementation.

use std::io::Write;
use std::path::PathBuf;

use crate::app::api::{self, ExportOptions, ExportTarget};
use crate::app::config::Settings;
use crate::domain::{AppError, ExportFormat, ExportScope};

const STDOUT_TARGET: &str = "-";

pub fn run_export(
    settings: &Settings,
    scope: ExportScope,
    format: ExportFormat,
    output: &str,
    allow_invalid: bool,
) -> Result<(), AppError> {
    let target = if output == STDOUT_TARGET {
        ExportTarget::Stdout
    } else {
        ExportTarget::File(PathBuf::from(output))
    };

    let outcome = api::export(
        &settings.config_path,
        ExportOptions { scope, format, target, allow_invalid },
    )?;

    match outcome.destination {
        Some(path) => println!("✅ Configuration exported to {}", path.display()),
        None => std::io::stdout().write_all(outcome.content.as_bytes())?,
    }
    Ok(())
}
