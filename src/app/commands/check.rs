use crate::app::AppContext;
use crate::domain::{AppError, ValidationReport, validate};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat warnings as failures.
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub report: ValidationReport,
    pub exit_code: i32,
}

impl CheckOutcome {
    pub fn errors(&self) -> usize {
        self.report.error_count()
    }

    pub fn warnings(&self) -> usize {
        self.report.warning_count()
    }
}

pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    options: CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let doc = ctx.load_document()?;
    let report = ValidationReport::new(validate(&doc));
    let exit_code = report.exit_code(options.strict);

    tracing::info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated trigger configuration"
    );

    Ok(CheckOutcome { report, exit_code })
}

/// Write every issue to stderr, errors first.
pub fn emit(report: &ValidationReport) {
    let (errors, warnings): (Vec<_>, Vec<_>) =
        report.issues().iter().partition(|issue| issue.is_error());
    for issue in errors.into_iter().chain(warnings) {
        eprintln!("{issue}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryConfigStore, TWO_FUNCTION_CONFIG};

    fn context(source: &str) -> AppContext<MemoryConfigStore> {
        let store = MemoryConfigStore::new().with_file("config/triggers.yaml", source);
        AppContext::new(store, "config/triggers.yaml")
    }

    #[test]
    fn clean_configuration_exits_zero() {
        let outcome = execute(&context(TWO_FUNCTION_CONFIG), CheckOptions::default()).unwrap();
        assert_eq!(outcome.exit_code, 0);
        assert!(outcome.report.is_clean());
    }

    #[test]
    fn missing_schedule_expression_fails() {
        let source = "functions:\n  alpha:\n    name: alpha\n    schedule:\n      enabled: true\n";
        let outcome = execute(&context(source), CheckOptions::default()).unwrap();
        assert_eq!(outcome.errors(), 1);
        assert_eq!(outcome.exit_code, 1);
    }

    #[test]
    fn strict_mode_fails_on_warnings() {
        let source = "functions:\n  alpha:\n    name: alpha\n    kinesis: {}\n";
        let lenient = execute(&context(source), CheckOptions { strict: false }).unwrap();
        let strict = execute(&context(source), CheckOptions { strict: true }).unwrap();
        assert_eq!(lenient.exit_code, 0);
        assert_eq!(strict.exit_code, 2);
    }

    #[test]
    fn missing_source_is_reported() {
        let ctx = AppContext::new(MemoryConfigStore::new(), "config/triggers.yaml");
        let err = execute(&ctx, CheckOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::ConfigNotFound(_)));
    }

    #[test]
    fn format_errors_abort_before_validation() {
        let err = execute(&context("functions: 3\n"), CheckOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::ConfigFormat(_)));
    }
}
