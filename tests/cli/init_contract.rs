use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_creates_valid_starter_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--function", "order_intake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config/triggers.yaml"));

    assert!(ctx.read("config/triggers.yaml").contains("name: order-intake"));
    ctx.cli().arg("check").assert().success();
    ctx.cli()
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("  http-gateway: description=Public HTTP endpoint"));
}

#[test]
fn init_rejects_existing_configuration() {
    let ctx = TestContext::new();
    ctx.write_config("functions: {}\n");

    ctx.cli()
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    ctx.cli().args(["init", "--force"]).assert().success();
    assert!(ctx.read("config/triggers.yaml").contains("ray_converter"));
}
