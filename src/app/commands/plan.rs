use crate::app::AppContext;
use crate::app::commands::validation_gate;
use crate::domain::{AppError, MaterializationPlan, plan, resolve};
use crate::ports::ConfigStore;

#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub plan: MaterializationPlan,
    /// Functions with no enabled trigger.
    pub unwired: Vec<String>,
}

pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    allow_invalid: bool,
) -> Result<PlanOutcome, AppError> {
    let doc = ctx.load_document()?;
    validation_gate(&doc, allow_invalid)?;
    let resolved = resolve(&doc)?;

    let plan = plan(&doc, &resolved);
    let unwired = plan.unwired_functions(&doc).into_iter().map(str::to_string).collect();
    Ok(PlanOutcome { plan, unwired })
}
