//! Plan command implementation.

use crate::app::api;
use crate::app::config::Settings;
use crate::domain::AppError;

pub fn run_plan(settings: &Settings, allow_invalid: bool) -> Result<(), AppError> {
    let outcome = api::plan(&settings.config_path, allow_invalid)?;

    if outcome.plan.is_empty() {
        println!("No enabled triggers; no trigger resources will be declared.");
    } else {
        println!("The infrastructure layer will declare these resources:");
        for entry in &outcome.plan.entries {
            let resources = if entry.resources.is_empty() {
                "(unrecognized trigger type)".to_string()
            } else {
                entry.resources.join(" + ")
            };
            println!("  ✅ {} [{}]: {}", entry.deployable_name, entry.trigger, resources);
        }
    }

    for function in &outcome.unwired {
        println!("  ⚠️  {}: no invocation path wired", function);
    }
    Ok(())
}
