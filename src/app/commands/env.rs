use serde_yaml::Value;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::ConfigStore;

/// Settings of one named environment.
pub fn execute<S: ConfigStore>(ctx: &AppContext<S>, name: &str) -> Result<Value, AppError> {
    let doc = ctx.load_document()?;
    doc.environment(name).cloned().ok_or_else(|| AppError::EnvironmentNotFound(name.to_string()))
}
