//! Runtime settings resolved from CLI flags and environment variables.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default location of the configuration source.
pub const DEFAULT_CONFIG_PATH: &str = "config/triggers.yaml";
/// Default location of the JSON export.
pub const DEFAULT_EXPORT_PATH: &str = "config/triggers.json";

pub const CONFIG_ENV: &str = "TRIGCTL_CONFIG";
pub const LOG_FORMAT_ENV: &str = "TRIGCTL_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    /// One JSON object per line, for CloudWatch and other log collectors.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unsupported log format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_path: PathBuf,
    pub log_format: LogFormat,
    pub verbosity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_format: LogFormat::default(),
            verbosity: 0,
        }
    }
}

impl Settings {
    /// Log level used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
