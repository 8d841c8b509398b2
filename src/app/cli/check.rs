//! Check command implementation.

use crate::app::api::{self, CheckOptions};
use crate::app::commands::check::emit;
use crate::app::config::Settings;
use crate::domain::AppError;

pub fn run_check(settings: &Settings, strict: bool) -> Result<i32, AppError> {
    let outcome = api::check(&settings.config_path, CheckOptions { strict })?;
    emit(&outcome.report);

    let (errors, warnings) = (outcome.errors(), outcome.warnings());
    if errors == 0 && warnings == 0 {
        println!("✅ Configuration is valid");
    } else if errors == 0 && !strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(outcome.exit_code)
}
