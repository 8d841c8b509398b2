use crate::harness::TestContext;
use crate::harness::fixtures::{ALPHA_BETA, TWO_BY_TWO};
use predicates::prelude::*;

#[test]
fn plan_lists_resources_for_enabled_triggers() {
    let ctx = TestContext::new();
    ctx.write_config(TWO_BY_TWO);

    ctx.cli()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("ray-converter [api_gateway]: aws_apigatewayv2_api"))
        .stdout(predicate::str::contains(
            "report-builder [eventbridge]: aws_cloudwatch_event_rule + aws_cloudwatch_event_target",
        ))
        .stdout(predicate::str::contains("aws_sqs_queue").not());
}

#[test]
fn plan_flags_functions_without_triggers() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    ctx.cli()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("beta: no invocation path wired"));
}
