//! Materialization plan handed to the infrastructure layer.
//!
//! Lists which resource types each enabled trigger implies. Nothing here
//! talks to the cloud; Terraform owns creation and reconciliation.

use serde::Serialize;

use crate::domain::config::{ConfigurationDocument, TriggerKind};
use crate::domain::resolve::ResolvedTriggers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedTrigger {
    pub function: String,
    pub deployable_name: String,
    pub trigger: String,
    /// Empty for trigger types trigctl does not recognize.
    pub resources: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MaterializationPlan {
    pub entries: Vec<PlannedTrigger>,
}

impl MaterializationPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Functions that have no invocation path wired.
    pub fn unwired_functions<'a>(&self, doc: &'a ConfigurationDocument) -> Vec<&'a str> {
        doc.functions
            .keys()
            .filter(|key| !self.entries.iter().any(|entry| &entry.function == *key))
            .map(String::as_str)
            .collect()
    }
}

/// One entry per enabled `(function, trigger)` pair.
pub fn plan(doc: &ConfigurationDocument, resolved: &ResolvedTriggers) -> MaterializationPlan {
    let entries = resolved
        .pairs()
        .map(|(function, trigger, _)| PlannedTrigger {
            function: function.to_string(),
            deployable_name: doc
                .function(function)
                .map(|config| config.display_name(function))
                .unwrap_or_else(|| function.to_string()),
            trigger: trigger.to_string(),
            resources: TriggerKind::from_key(trigger)
                .map(|kind| kind.resource_types().to_vec())
                .unwrap_or_default(),
        })
        .collect();
    MaterializationPlan { entries }
}
