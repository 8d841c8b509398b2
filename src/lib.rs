//! trigctl: Validate, resolve, and export serverless function trigger configuration.
//!
//! The configuration document is the single source of truth for which
//! invocation triggers each function has. The pipeline is
//! load → validate → resolve → export, each step a pure function of its input.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckOptions, CheckOutcome, ExportOptions, ExportOutcome, ExportTarget, InitOptions,
    InitOutcome, PlanOutcome, ResolveOptions, ResolveOutcome, environment, export_at, init_at,
};
pub use domain::{
    AppError, ConfigFormatError, ConfigurationDocument, ExportError, ExportFormat, ExportScope,
    FunctionConfig, FunctionKey, FunctionSummary, MalformedTriggerError, MaterializationPlan,
    ResolvedTriggers, Severity, TriggerConfig, TriggerKind, ValidationIssue, ValidationReport,
    export, load, plan, resolve, summarize, validate,
};
