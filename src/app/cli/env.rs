//! Env command implementation.

use crate::app::api;
use crate::app::config::Settings;
use crate::domain::{AppError, ExportFormat, export};

pub fn run_env(settings: &Settings, name: &str) -> Result<(), AppError> {
    let environment = api::environment(&settings.config_path, name)?;
    print!("{}", export(&environment, ExportFormat::Yaml)?);
    Ok(())
}
