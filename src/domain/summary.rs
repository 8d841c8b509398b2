//! Human-oriented summary of a function's declared triggers.

use serde_yaml::Value;

use crate::domain::config::value::render_value;
use crate::domain::config::{FunctionConfig, TriggerConfig, TriggerKind};
use crate::domain::resolve::MalformedTriggerError;

const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_QUEUE_BATCH_SIZE: &str = "1";

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSummary {
    pub key: String,
    pub display_name: String,
    pub description: Option<String>,
    pub triggers: Vec<TriggerStatus>,
}

impl FunctionSummary {
    pub fn enabled(&self) -> impl Iterator<Item = &TriggerStatus> {
        self.triggers.iter().filter(|status| status.enabled)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerStatus {
    pub trigger: String,
    pub kind: Option<TriggerKind>,
    pub enabled: bool,
    pub description: Option<String>,
    /// Kind-specific highlights as `(label, value)` pairs.
    pub details: Vec<(&'static str, String)>,
}

impl TriggerStatus {
    /// Upper-case heading, e.g. `API GATEWAY` for `api_gateway`.
    pub fn heading(&self) -> String {
        self.trigger.to_uppercase().replace(['_', '-'], " ")
    }
}

/// Summarize every declared trigger of `function`, enabled or not.
pub fn summarize(
    key: &str,
    function: &FunctionConfig,
) -> Result<FunctionSummary, MalformedTriggerError> {
    let mut triggers = Vec::new();
    for (trigger_type, raw) in &function.triggers {
        let config = TriggerConfig::from_value(raw).map_err(|reason| MalformedTriggerError {
            function: key.to_string(),
            trigger: trigger_type.clone(),
            reason,
        })?;
        let kind = TriggerKind::from_key(trigger_type);
        triggers.push(TriggerStatus {
            trigger: trigger_type.clone(),
            kind,
            enabled: config.enabled,
            description: config.description().map(str::to_string),
            details: kind.map(|kind| details(kind, &config)).unwrap_or_default(),
        });
    }

    Ok(FunctionSummary {
        key: key.to_string(),
        display_name: function.display_name(key),
        description: function.description().map(str::to_string),
        triggers,
    })
}

fn details(kind: TriggerKind, config: &TriggerConfig) -> Vec<(&'static str, String)> {
    let field = |name: &str| config.setting(name).map(render_value);
    let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());

    match kind {
        TriggerKind::HttpGateway => vec![("Route", or_na(field("route")))],
        TriggerKind::Queue => vec![
            ("Queue", or_na(field("queue_name"))),
            ("Batch Size", field("batch_size").unwrap_or_else(|| DEFAULT_QUEUE_BATCH_SIZE.into())),
        ],
        TriggerKind::ObjectStore => vec![
            ("Bucket", or_na(field("bucket_name"))),
            ("Events", field("events").unwrap_or_else(|| render_value(&Value::Sequence(vec![])))),
        ],
        TriggerKind::Schedule => vec![("Schedule", or_na(field("schedule")))],
        TriggerKind::Stream => vec![
            ("Table", or_na(field("table_name"))),
            ("Batch Size", or_na(field("batch_size"))),
        ],
        TriggerKind::Topic => vec![("Topic", or_na(field("topic_name")))],
    }
}
