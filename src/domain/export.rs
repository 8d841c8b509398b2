//! Lossless transcoding of the document or the resolved set into other formats.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::config::value::render_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl ExportFormat {
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Toml => "toml",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "toml" => Ok(ExportFormat::Toml),
            other => {
                Err(format!("unsupported export format '{other}' (expected json, yaml, or toml)"))
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which view of the configuration to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    /// The whole document, disabled triggers included.
    #[default]
    Document,
    /// Only the enabled triggers of each function.
    Resolved,
}

impl FromStr for ExportScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "document" => Ok(ExportScope::Document),
            "resolved" => Ok(ExportScope::Resolved),
            other => {
                Err(format!("unsupported export scope '{other}' (expected document or resolved)"))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML export failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML export failed: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("TOML cannot represent the null value at '{path}'")]
    NullInToml { path: String },

    #[error("{format} cannot represent the non-finite number at '{path}'")]
    NonFiniteNumber { format: &'static str, path: String },
}

/// Serialize `view` into `format`. Output always ends with a newline.
pub fn export<T: Serialize + ?Sized>(
    view: &T,
    format: ExportFormat,
) -> Result<String, ExportError> {
    let mut rendered = match format {
        ExportFormat::Json => {
            reject_non_finite(view, "JSON")?;
            serde_json::to_string_pretty(view)?
        }
        ExportFormat::Yaml => serde_yaml::to_string(view)?,
        ExportFormat::Toml => {
            reject_non_finite(view, "TOML")?;
            let tree = serde_json::to_value(view)?;
            if let Some(path) = find_null(&tree, "") {
                return Err(ExportError::NullInToml { path });
            }
            toml::to_string(&tree)?
        }
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// JSON has no NaN or infinities and serde_json would write them as null.
fn reject_non_finite<T: Serialize + ?Sized>(
    view: &T,
    format: &'static str,
) -> Result<(), ExportError> {
    let tree = serde_yaml::to_value(view)?;
    match find_non_finite(&tree, "") {
        Some(path) => Err(ExportError::NonFiniteNumber { format, path }),
        None => Ok(()),
    }
}

fn child_path(path: &str, segment: &str) -> String {
    if path.is_empty() { segment.to_string() } else { format!("{path}.{segment}") }
}

/// Dotted path of the first null in `value`, if any.
fn find_null(value: &serde_json::Value, path: &str) -> Option<String> {
    match value {
        serde_json::Value::Null => Some(path.to_string()),
        serde_json::Value::Object(map) => {
            map.iter().find_map(|(key, child)| find_null(child, &child_path(path, key)))
        }
        serde_json::Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(index, child)| find_null(child, &child_path(path, &index.to_string()))),
        _ => None,
    }
}

/// Dotted path of the first NaN or infinity in `value`, if any.
fn find_non_finite(value: &serde_yaml::Value, path: &str) -> Option<String> {
    match value {
        serde_yaml::Value::Number(number) => {
            number.as_f64().is_some_and(|n| !n.is_finite()).then(|| path.to_string())
        }
        serde_yaml::Value::Mapping(map) => map.iter().find_map(|(key, child)| {
            find_non_finite(child, &child_path(path, &render_value(key)))
        }),
        serde_yaml::Value::Sequence(items) => {
            items.iter().enumerate().find_map(|(index, child)| {
                find_non_finite(child, &child_path(path, &index.to_string()))
            })
        }
        serde_yaml::Value::Tagged(tagged) => find_non_finite(&tagged.value, path),
        _ => None,
    }
}
