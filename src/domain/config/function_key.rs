use std::fmt;

use crate::domain::AppError;

/// A validated internal function key (`ray_converter`).
///
/// Guarantees:
/// - Starts with a lowercase ASCII letter
/// - Contains only lowercase ASCII letters, digits, or `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionKey(String);

impl FunctionKey {
    pub fn new(key: &str) -> Result<Self, AppError> {
        let mut chars = key.chars();
        let valid_start = chars.next().is_some_and(|c| c.is_ascii_lowercase());
        let valid_rest = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid_start && valid_rest {
            Ok(Self(key.to_string()))
        } else {
            Err(AppError::InvalidFunctionKey(key.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hyphenated deployable name paired with this key.
    pub fn deployable_name(&self) -> String {
        deployable_name(&self.0)
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map a word-separated function key to its hyphenated deployable name.
pub fn deployable_name(key: &str) -> String {
    key.replace('_', "-")
}
