pub mod check;
pub mod env;
pub mod export;
pub mod init;
pub mod plan;
pub mod resolve;
pub mod show;

use crate::domain::{AppError, ConfigurationDocument, ValidationReport, validate};

/// Validate `doc` and refuse to continue on errors unless `allow_invalid` is set.
///
/// Blocking issues are written to stderr before the error is returned.
pub(crate) fn validation_gate(
    doc: &ConfigurationDocument,
    allow_invalid: bool,
) -> Result<(), AppError> {
    let report = ValidationReport::new(validate(doc));
    if report.has_errors() {
        if !allow_invalid {
            check::emit(&report);
            return Err(AppError::ValidationFailed { errors: report.error_count() });
        }
        tracing::warn!(errors = report.error_count(), "continuing despite validation errors");
    }
    Ok(())
}
