use crate::harness::TestContext;
use crate::harness::fixtures::ALPHA_BETA;
use predicates::prelude::*;

#[test]
fn env_prints_environment_settings() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    ctx.cli()
        .args(["env", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log_level: INFO"));
}

#[test]
fn env_unknown_environment_fails() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    ctx.cli()
        .args(["env", "staging"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Environment 'staging' not found"));
}
