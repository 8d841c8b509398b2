use crate::harness::TestContext;
use crate::harness::fixtures::TWO_BY_TWO;
use predicates::prelude::*;

#[test]
fn show_summarizes_enabled_triggers() {
    let ctx = TestContext::new();
    ctx.write_config(TWO_BY_TWO);

    ctx.cli()
        .args(["show", "ray_converter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Function: ray-converter"))
        .stdout(predicate::str::contains("API GATEWAY"))
        .stdout(predicate::str::contains("Route: POST /convert"))
        .stdout(predicate::str::contains("Disabled: sqs"));
}

#[test]
fn show_unknown_function_fails() {
    let ctx = TestContext::new();
    ctx.write_config(TWO_BY_TWO);

    ctx.cli()
        .args(["show", "missing_fn"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Function 'missing_fn' not found in configuration"));
}
