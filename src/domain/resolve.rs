//! Enabled-trigger resolution.
//!
//! Resolution walks only the typed `triggers` map of each function, so
//! deployment metadata can never surface as a trigger.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::config::{
    ConfigurationDocument, FunctionConfig, TriggerConfig, TriggerShapeError,
};

/// Enabled triggers of one function, keyed by trigger type.
pub type FunctionTriggers = BTreeMap<String, TriggerConfig>;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Malformed trigger '{trigger}' in function '{function}': {reason}")]
pub struct MalformedTriggerError {
    pub function: String,
    pub trigger: String,
    pub reason: TriggerShapeError,
}

/// Enabled triggers for every function in a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ResolvedTriggers {
    functions: BTreeMap<String, FunctionTriggers>,
}

impl ResolvedTriggers {
    pub fn get(&self, function: &str) -> Option<&FunctionTriggers> {
        self.functions.get(function)
    }

    pub fn functions(&self) -> impl Iterator<Item = (&str, &FunctionTriggers)> {
        self.functions.iter().map(|(key, triggers)| (key.as_str(), triggers))
    }

    /// Every enabled `(function, trigger type, config)` triple in key order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, &TriggerConfig)> {
        self.functions.iter().flat_map(|(function, triggers)| {
            triggers
                .iter()
                .map(move |(trigger, config)| (function.as_str(), trigger.as_str(), config))
        })
    }

    pub fn pair_count(&self) -> usize {
        self.functions.values().map(BTreeMap::len).sum()
    }

    /// Keep only the named function.
    pub fn retain_function(&mut self, function: &str) {
        self.functions.retain(|key, _| key == function);
    }
}

/// Compute the enabled trigger set of every function.
pub fn resolve(doc: &ConfigurationDocument) -> Result<ResolvedTriggers, MalformedTriggerError> {
    let mut functions = BTreeMap::new();
    for (key, function) in &doc.functions {
        functions.insert(key.clone(), resolve_function(key, function)?);
    }
    Ok(ResolvedTriggers { functions })
}

/// Enabled triggers of a single function. Absent and `enabled: false` are equivalent.
pub fn resolve_function(
    key: &str,
    function: &FunctionConfig,
) -> Result<FunctionTriggers, MalformedTriggerError> {
    let mut enabled = BTreeMap::new();
    for (trigger_type, raw) in &function.triggers {
        let trigger = TriggerConfig::from_value(raw).map_err(|reason| MalformedTriggerError {
            function: key.to_string(),
            trigger: trigger_type.clone(),
            reason,
        })?;
        if trigger.enabled {
            enabled.insert(trigger_type.clone(), trigger);
        }
    }
    Ok(enabled)
}
