//! Parse the trigger configuration source into a [`ConfigurationDocument`].

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use super::error::ConfigFormatError;
use super::model::{ConfigurationDocument, FunctionConfig};
use super::value::value_kind;

const ENVIRONMENTS_FIELD: &str = "environments";

/// Top-level shape before the function entries are checked one by one.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    functions: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    environments: Option<Option<Value>>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Marks `environments` as present even when it is null.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(Some)
}

/// Parse configuration text. JSON input is accepted as well.
pub fn load(source: &str) -> Result<ConfigurationDocument, ConfigFormatError> {
    let root: Value =
        serde_yaml::from_str(source).map_err(|e| ConfigFormatError::Syntax(e.to_string()))?;
    if !root.is_mapping() {
        return Err(ConfigFormatError::NotAMapping { found: value_kind(&root) });
    }

    let raw: RawDocument =
        serde_yaml::from_value(root).map_err(|e| ConfigFormatError::Syntax(e.to_string()))?;

    let functions = match raw.functions {
        None => return Err(ConfigFormatError::MissingFunctions),
        Some(Value::Mapping(entries)) => parse_functions(entries)?,
        Some(other) => {
            return Err(ConfigFormatError::FunctionsNotAMapping { found: value_kind(&other) });
        }
    };

    let mut extra = raw.extra;
    let environments = match raw.environments {
        None => None,
        // An explicit null has no settings but still round-trips through `extra`.
        Some(None) => {
            extra.insert(ENVIRONMENTS_FIELD.to_string(), Value::Null);
            None
        }
        Some(Some(Value::Mapping(entries))) => Some(parse_environments(entries)?),
        Some(Some(other)) => {
            return Err(ConfigFormatError::EnvironmentsNotAMapping { found: value_kind(&other) });
        }
    };

    Ok(ConfigurationDocument { functions, environments, extra })
}

fn parse_functions(
    entries: Mapping,
) -> Result<BTreeMap<String, FunctionConfig>, ConfigFormatError> {
    let mut functions = BTreeMap::new();
    for (key, entry) in entries {
        let Value::String(key) = key else {
            return Err(ConfigFormatError::NonStringFunctionKey { found: value_kind(&key) });
        };
        if !entry.is_mapping() {
            return Err(ConfigFormatError::FunctionNotAMapping {
                function: key,
                found: value_kind(&entry),
            });
        }
        let function: FunctionConfig = serde_yaml::from_value(entry).map_err(|e| {
            ConfigFormatError::InvalidFunction { function: key.clone(), reason: e.to_string() }
        })?;
        functions.insert(key, function);
    }
    Ok(functions)
}

fn parse_environments(entries: Mapping) -> Result<BTreeMap<String, Value>, ConfigFormatError> {
    let mut environments = BTreeMap::new();
    for (name, settings) in entries {
        let Value::String(name) = name else {
            return Err(ConfigFormatError::NonStringEnvironmentName { found: value_kind(&name) });
        };
        environments.insert(name, settings);
    }
    Ok(environments)
}
