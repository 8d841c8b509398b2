use crate::app::AppContext;
use crate::domain::{AppError, FunctionSummary, summarize};
use crate::ports::ConfigStore;

pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    function: &str,
) -> Result<FunctionSummary, AppError> {
    let doc = ctx.load_document()?;
    let config =
        doc.function(function).ok_or_else(|| AppError::FunctionNotFound(function.to_string()))?;
    Ok(summarize(function, config)?)
}
