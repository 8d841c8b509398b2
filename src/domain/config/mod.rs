pub mod error;
pub mod function_key;
pub mod loader;
pub mod model;
pub mod trigger_kind;
pub mod validate;
pub mod value;

pub use error::ConfigFormatError;
pub use function_key::{FunctionKey, deployable_name};
pub use loader::load;
pub use model::{
    ConfigurationDocument, ENABLED_FIELD, FunctionConfig, TriggerConfig, TriggerShapeError,
};
pub use trigger_kind::TriggerKind;
pub use validate::{Severity, ValidationIssue, ValidationReport, validate};
