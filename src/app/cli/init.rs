//! Init command implementation.

use crate::app::api::{self, InitOptions};
use crate::app::config::Settings;
use crate::domain::AppError;

pub fn run_init(settings: &Settings, function: String, force: bool) -> Result<(), AppError> {
    let outcome = api::init(&settings.config_path, InitOptions { function, force })?;

    for path in &outcome.written {
        println!("✅ Created {}", path.display());
    }
    println!("Next: edit the triggers of '{}' and run `trigctl check`.", outcome.function);
    Ok(())
}
