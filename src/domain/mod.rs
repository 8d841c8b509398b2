pub mod config;
pub mod error;
pub mod export;
pub mod plan;
pub mod resolve;
pub mod summary;

pub use config::{
    ConfigFormatError, ConfigurationDocument, FunctionConfig, FunctionKey, Severity,
    TriggerConfig, TriggerKind, ValidationIssue, ValidationReport, load, validate,
};
pub use error::AppError;
pub use export::{ExportError, ExportFormat, ExportScope, export};
pub use plan::{MaterializationPlan, PlannedTrigger, plan};
pub use resolve::{FunctionTriggers, MalformedTriggerError, ResolvedTriggers, resolve};
pub use summary::{FunctionSummary, TriggerStatus, summarize};
