use crate::harness::TestContext;
use crate::harness::fixtures::{ALPHA_BETA, LEGACY_MEMORY_SIZE, MISSING_SCHEDULE};
use predicates::prelude::*;

#[test]
fn check_passes_on_valid_configuration() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn check_names_function_and_trigger_of_missing_field() {
    let ctx = TestContext::new();
    ctx.write_config(MISSING_SCHEDULE);

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] alpha.schedule"))
        .stderr(predicate::str::contains("schedule"))
        .stderr(predicate::str::contains("1 error(s)"));
}

#[test]
fn check_strict_fails_on_warnings() {
    let ctx = TestContext::new();
    ctx.write_config("functions:\n  alpha:\n    name: alpha\n    kinesis: {}\n");

    ctx.cli().arg("check").assert().success();
    ctx.cli()
        .args(["check", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("[WARN] alpha.kinesis"));
}

#[test]
fn check_reports_missing_configuration_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found: config/triggers.yaml"));
}

#[test]
fn check_rejects_document_without_functions() {
    let ctx = TestContext::new();
    ctx.write_config("environments:\n  dev: {}\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing the required 'functions' mapping"));
}

#[test]
fn config_path_can_come_from_environment() {
    let ctx = TestContext::new();
    std::fs::write(ctx.work_dir().join("custom.yaml"), ALPHA_BETA).unwrap();

    ctx.cli().env("TRIGCTL_CONFIG", "custom.yaml").arg("check").assert().success();
}

#[test]
fn legacy_memory_size_configuration_is_valid() {
    let ctx = TestContext::new();
    ctx.write_config(LEGACY_MEMORY_SIZE);

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
    ctx.cli()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("ray-converter [api_gateway]: aws_apigatewayv2_api"));
}
