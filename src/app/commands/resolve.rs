use crate::app::AppContext;
use crate::app::commands::validation_gate;
use crate::domain::{AppError, ConfigurationDocument, ResolvedTriggers, resolve};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Restrict the output to one function key.
    pub function: Option<String>,
    /// Resolve even when validation reports errors.
    pub allow_invalid: bool,
}

#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub document: ConfigurationDocument,
    pub resolved: ResolvedTriggers,
}

impl ResolveOutcome {
    /// Deployable name for a function key in this document.
    pub fn display_name(&self, key: &str) -> String {
        self.document
            .function(key)
            .map(|function| function.display_name(key))
            .unwrap_or_else(|| key.to_string())
    }
}

pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    options: ResolveOptions,
) -> Result<ResolveOutcome, AppError> {
    let document = ctx.load_document()?;

    if let Some(function) = options.function.as_deref()
        && document.function(function).is_none()
    {
        return Err(AppError::FunctionNotFound(function.to_string()));
    }

    validation_gate(&document, options.allow_invalid)?;
    let mut resolved = resolve(&document)?;
    if let Some(function) = options.function.as_deref() {
        resolved.retain_function(function);
    }

    tracing::info!(
        functions = resolved.functions().count(),
        enabled_triggers = resolved.pair_count(),
        "resolved enabled triggers"
    );

    Ok(ResolveOutcome { document, resolved })
}
