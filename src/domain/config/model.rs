use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use super::function_key::deployable_name;
use super::value::value_kind;

/// Field interpreted by the resolver inside every trigger entry.
pub const ENABLED_FIELD: &str = "enabled";

/// Parsed trigger configuration document.
///
/// Functions are kept in key order so every derived view is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConfigurationDocument {
    pub functions: BTreeMap<String, FunctionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<BTreeMap<String, Value>>,
    /// Top-level keys with no meaning to trigctl, kept for lossless export.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ConfigurationDocument {
    pub fn function(&self, key: &str) -> Option<&FunctionConfig> {
        self.functions.get(key)
    }

    pub fn environment(&self, name: &str) -> Option<&Value> {
        self.environments.as_ref().and_then(|envs| envs.get(name))
    }
}

/// One deployable function.
///
/// Deployment metadata lives in named fields; every other key of the function
/// entry is a trigger type and lands in `triggers`. Trigger entries stay raw
/// until resolution so that malformed ones can be reported precisely.
///
/// Metadata fields are `None` when absent and `Some(None)` when written as an
/// explicit null, so the document exports exactly as it was read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionConfig {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub memory: Option<Option<u32>>,
    /// Older configurations spell the memory size this way.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<Option<u32>>,
    #[serde(flatten)]
    pub triggers: BTreeMap<String, Value>,
}

/// Marks a key as present even when its value is null.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl FunctionConfig {
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Option::as_deref)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().and_then(Option::as_deref)
    }

    pub fn runtime(&self) -> Option<&str> {
        self.runtime.as_ref().and_then(Option::as_deref)
    }

    pub fn timeout(&self) -> Option<u32> {
        self.timeout.flatten()
    }

    /// Memory in MB, from `memory` or else `memory_size`.
    pub fn memory(&self) -> Option<u32> {
        self.memory.flatten().or(self.memory_size.flatten())
    }

    /// Deployable name, falling back to the hyphenated function key when unset.
    pub fn display_name(&self, key: &str) -> String {
        match self.name().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => deployable_name(key),
        }
    }
}

/// Why a raw trigger entry could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerShapeError {
    #[error("expected a mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("'enabled' must be a boolean, found {found}")]
    EnabledNotBoolean { found: &'static str },

    #[error("setting keys must be strings, found {found}")]
    NonStringKey { found: &'static str },
}

/// A trigger entry with its `enabled` flag separated from its settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub settings: BTreeMap<String, Value>,
}

impl TriggerConfig {
    /// Interpret a raw trigger entry. A missing `enabled` field means disabled.
    pub fn from_value(value: &Value) -> Result<Self, TriggerShapeError> {
        let Value::Mapping(mapping) = value else {
            return Err(TriggerShapeError::NotAMapping { found: value_kind(value) });
        };

        let mut enabled = false;
        let mut settings = BTreeMap::new();
        for (key, value) in mapping {
            let Value::String(key) = key else {
                return Err(TriggerShapeError::NonStringKey { found: value_kind(key) });
            };
            if key == ENABLED_FIELD {
                enabled = match value {
                    Value::Bool(flag) => *flag,
                    other => {
                        return Err(TriggerShapeError::EnabledNotBoolean {
                            found: value_kind(other),
                        });
                    }
                };
            } else {
                settings.insert(key.clone(), value.clone());
            }
        }

        Ok(Self { enabled, settings })
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn str_setting(&self, key: &str) -> Option<&str> {
        self.setting(key).and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.str_setting("description")
    }
}
