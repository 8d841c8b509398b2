//! Structural and per-trigger validation of a loaded document.
//!
//! Validation never fails; it collects [`ValidationIssue`]s and leaves the
//! decision of whether they are fatal to the caller.

use std::fmt;

use serde::Serialize;
use serde_yaml::Value;

use super::model::{ConfigurationDocument, FunctionConfig, TriggerConfig};
use super::trigger_kind::TriggerKind;
use super::value::{is_blank, value_kind};

const HTTP_METHODS: [&str; 8] = ["ANY", "DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT"];
const DEFAULT_ROUTE: &str = "$default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    pub message: String,
}

impl ValidationIssue {
    fn error(function: Option<&str>, trigger: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            function: function.map(str::to_string),
            trigger: trigger.map(str::to_string),
            message: message.into(),
        }
    }

    fn warning(function: &str, trigger: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            function: Some(function.to_string()),
            trigger: Some(trigger.to_string()),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `function.trigger`, `function`, or `document`.
    pub fn location(&self) -> String {
        match (&self.function, &self.trigger) {
            (Some(function), Some(trigger)) => format!("{function}.{trigger}"),
            (Some(function), None) => function.clone(),
            _ => "document".to_string(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "[{}] {}: {}", tag, self.location(), self.message)
    }
}

/// Issues grouped for reporting, with the exit code policy of `check`.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// 1 on errors, 2 on warnings when strict, 0 otherwise.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if self.has_errors() {
            1
        } else if strict && self.warning_count() > 0 {
            2
        } else {
            0
        }
    }
}

/// Check a document for missing names and incomplete enabled triggers.
pub fn validate(doc: &ConfigurationDocument) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if doc.functions.is_empty() {
        issues.push(ValidationIssue::error(None, None, "no functions defined in configuration"));
    }

    for (key, function) in &doc.functions {
        validate_function(key, function, &mut issues);
    }

    issues
}

fn validate_function(key: &str, function: &FunctionConfig, issues: &mut Vec<ValidationIssue>) {
    if function.name().is_none_or(|name| name.trim().is_empty()) {
        issues.push(ValidationIssue::error(Some(key), None, "missing deployable 'name'"));
    }

    for (trigger_type, raw) in &function.triggers {
        let trigger = match TriggerConfig::from_value(raw) {
            Ok(trigger) => trigger,
            Err(err) => {
                issues.push(ValidationIssue::error(
                    Some(key),
                    Some(trigger_type.as_str()),
                    format!("malformed trigger entry: {err}"),
                ));
                continue;
            }
        };

        let Some(kind) = TriggerKind::from_key(trigger_type) else {
            issues.push(ValidationIssue::warning(
                key,
                trigger_type,
                format!("unrecognized trigger type '{trigger_type}'"),
            ));
            continue;
        };

        if trigger.enabled
            && let Some(message) = check_enabled_trigger(kind, &trigger)
        {
            issues.push(ValidationIssue::error(Some(key), Some(trigger_type.as_str()), message));
        }
    }
}

/// First problem with an enabled trigger, if any. Missing fields are reported
/// together so that each trigger yields at most one issue.
fn check_enabled_trigger(kind: TriggerKind, trigger: &TriggerConfig) -> Option<String> {
    let missing: Vec<&str> = kind
        .required_fields()
        .iter()
        .copied()
        .filter(|field| trigger.setting(field).is_none_or(is_blank))
        .collect();
    if !missing.is_empty() {
        return Some(format!("enabled but missing required field(s): {}", missing.join(", ")));
    }

    if let Some(batch_size) = trigger.setting("batch_size")
        && !batch_size.as_u64().is_some_and(|n| n > 0)
    {
        return Some(format!(
            "'batch_size' must be a positive integer, found {}",
            describe(batch_size)
        ));
    }

    match kind {
        TriggerKind::HttpGateway => check_route(trigger.setting("route")?),
        TriggerKind::Schedule => check_schedule(trigger.setting("schedule")?),
        TriggerKind::ObjectStore => check_string(trigger, "bucket_name")
            .or_else(|| check_events(trigger.setting("events")?)),
        TriggerKind::Queue => check_string(trigger, "queue_name"),
        TriggerKind::Stream => check_string(trigger, "table_name"),
        TriggerKind::Topic => check_string(trigger, "topic_name"),
    }
}

fn check_route(route: &Value) -> Option<String> {
    let Some(route) = route.as_str() else {
        return Some(format!("'route' must be a string, found {}", value_kind(route)));
    };
    if route.trim() == DEFAULT_ROUTE {
        return None;
    }

    let mut parts = route.split_whitespace();
    let well_formed = match (parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(path), None) => {
            HTTP_METHODS.contains(&method) && path.starts_with('/')
        }
        _ => false,
    };
    if well_formed {
        None
    } else {
        Some(format!("'route' must look like 'METHOD /path', found '{route}'"))
    }
}

fn check_schedule(expression: &Value) -> Option<String> {
    let Some(expression) = expression.as_str() else {
        return Some(format!("'schedule' must be a string, found {}", value_kind(expression)));
    };
    let expression = expression.trim();
    let well_formed = (expression.starts_with("rate(") || expression.starts_with("cron("))
        && expression.ends_with(')')
        && expression.len() > "rate()".len();
    if well_formed {
        None
    } else {
        Some(format!("'schedule' must be a rate(...) or cron(...) expression, found '{expression}'"))
    }
}

fn check_events(events: &Value) -> Option<String> {
    match events {
        Value::Sequence(items) if items.is_empty() => {
            Some("'events' must list at least one event filter".to_string())
        }
        Value::Sequence(items) if items.iter().all(Value::is_string) => None,
        Value::Sequence(_) => Some("'events' entries must be strings".to_string()),
        other => Some(format!("'events' must be a list, found {}", value_kind(other))),
    }
}

fn check_string(trigger: &TriggerConfig, field: &str) -> Option<String> {
    let value = trigger.setting(field)?;
    if value.is_string() {
        None
    } else {
        Some(format!("'{field}' must be a string, found {}", value_kind(value)))
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        other => value_kind(other).to_string(),
    }
}
