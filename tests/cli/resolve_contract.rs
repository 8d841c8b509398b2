use crate::harness::TestContext;
use crate::harness::fixtures::{ALPHA_BETA, MISSING_SCHEDULE};
use predicates::prelude::*;

#[test]
fn resolve_prints_enabled_triggers_per_function() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    ctx.cli()
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha (alpha)"))
        .stdout(predicate::str::contains("  http-gateway: route=POST /x"))
        .stdout(predicate::str::contains("queue").not())
        .stdout(predicate::str::contains("beta (beta)\n  (no enabled triggers)"));
}

#[test]
fn resolve_output_is_identical_across_runs() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    let first = ctx.cli().arg("resolve").output().unwrap();
    let second = ctx.cli().arg("resolve").output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn resolve_blocks_on_validation_errors() {
    let ctx = TestContext::new();
    ctx.write_config(MISSING_SCHEDULE);

    ctx.cli()
        .arg("resolve")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] alpha.schedule"))
        .stderr(predicate::str::contains("validation failed with 1 error(s)"));

    ctx.cli()
        .args(["resolve", "--allow-invalid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  schedule: "));
}

#[test]
fn resolve_names_malformed_trigger() {
    let ctx = TestContext::new();
    ctx.write_config("functions:\n  alpha:\n    name: alpha\n    queue: true\n");

    ctx.cli()
        .args(["resolve", "--allow-invalid"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed trigger 'queue' in function 'alpha'"));
}

#[test]
fn resolve_single_function() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    ctx.cli()
        .args(["resolve", "--function", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("beta (beta)"))
        .stdout(predicate::str::contains("alpha").not());
}
