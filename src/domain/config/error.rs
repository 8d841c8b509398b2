/// The configuration document's shape is invalid.
///
/// Raised by the loader before any resolution happens. Variants carry the
/// offending function key whenever the failure is local to one function.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFormatError {
    #[error("Failed to parse configuration: {0}")]
    Syntax(String),

    #[error("Configuration must be a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Configuration is missing the required 'functions' mapping")]
    MissingFunctions,

    #[error("'functions' must be a mapping of function keys, found {found}")]
    FunctionsNotAMapping { found: &'static str },

    #[error("Function keys must be strings, found {found}")]
    NonStringFunctionKey { found: &'static str },

    #[error("Function '{function}' must be a mapping, found {found}")]
    FunctionNotAMapping { function: String, found: &'static str },

    #[error("Function '{function}' is invalid: {reason}")]
    InvalidFunction { function: String, reason: String },

    #[error("'environments' must be a mapping of environment names, found {found}")]
    EnvironmentsNotAMapping { found: &'static str },

    #[error("Environment names must be strings, found {found}")]
    NonStringEnvironmentName { found: &'static str },
}
