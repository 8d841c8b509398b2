//! Show command implementation.

use crate::app::api;
use crate::app::config::Settings;
use crate::domain::AppError;

const RULE_WIDTH: usize = 60;

pub fn run_show(settings: &Settings, function: &str) -> Result<(), AppError> {
    let summary = api::show(&settings.config_path, function)?;
    let rule = "=".repeat(RULE_WIDTH);

    println!("{rule}");
    println!("Function: {}", summary.display_name);
    println!("Description: {}", summary.description.as_deref().unwrap_or("N/A"));
    println!("{rule}");

    let enabled: Vec<_> = summary.enabled().collect();
    if enabled.is_empty() {
        println!("\n⚠️  No triggers enabled");
    } else {
        println!("\n✅ Enabled Triggers:");
        for status in enabled {
            println!("\n  • {}", status.heading());
            println!("    Description: {}", status.description.as_deref().unwrap_or("N/A"));
            for (label, value) in &status.details {
                println!("    {}: {}", label, value);
            }
        }
    }

    let disabled: Vec<&str> = summary
        .triggers
        .iter()
        .filter(|status| !status.enabled)
        .map(|status| status.trigger.as_str())
        .collect();
    if !disabled.is_empty() {
        println!("\n❌ Disabled: {}", disabled.join(", "));
    }

    println!("\n{rule}");
    Ok(())
}
