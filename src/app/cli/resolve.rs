//! Resolve command implementation.

use crate::app::api::{self, ResolveOptions};
use crate::app::config::Settings;
use crate::domain::AppError;
use crate::domain::config::value::render_value;

pub fn run_resolve(
    settings: &Settings,
    function: Option<String>,
    allow_invalid: bool,
) -> Result<(), AppError> {
    let outcome = api::resolve(&settings.config_path, ResolveOptions { function, allow_invalid })?;

    for (key, triggers) in outcome.resolved.functions() {
        println!("{} ({})", key, outcome.display_name(key));
        if triggers.is_empty() {
            println!("  (no enabled triggers)");
        }
        for (trigger, config) in triggers {
            let fields: Vec<String> = config
                .settings
                .iter()
                .map(|(field, value)| format!("{}={}", field, render_value(value)))
                .collect();
            println!("  {}: {}", trigger, fields.join(", "));
        }
    }
    Ok(())
}
