use crate::harness::TestContext;
use crate::harness::fixtures::{ALPHA_BETA, TWO_BY_TWO};
use predicates::prelude::*;

#[test]
fn export_writes_json_to_default_path() {
    let ctx = TestContext::new();
    ctx.write_config(TWO_BY_TWO);

    ctx.cli()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration exported to config/triggers.json"));

    let json: serde_json::Value = serde_json::from_str(&ctx.read("config/triggers.json")).unwrap();
    let function = &json["functions"]["ray_converter"];
    assert_eq!(function["memory"], 256);
    assert_eq!(function["sqs"]["enabled"], false);
    assert_eq!(function["sqs"]["batch_size"], 10);
}

#[test]
fn resolved_export_contains_only_enabled_pairs() {
    let ctx = TestContext::new();
    ctx.write_config(TWO_BY_TWO);

    let output = ctx
        .cli()
        .args(["export", "--scope", "resolved", "--output", "-"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pairs: Vec<(String, String)> = json
        .as_object()
        .unwrap()
        .iter()
        .flat_map(|(function, triggers)| {
            triggers.as_object().unwrap().keys().map(move |t| (function.clone(), t.clone()))
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("ray_converter".to_string(), "api_gateway".to_string()),
            ("report_builder".to_string(), "eventbridge".to_string()),
        ]
    );
    assert_eq!(json["ray_converter"]["api_gateway"]["route"], "POST /convert");
    assert_eq!(json["ray_converter"]["api_gateway"]["description"], "Public HTTP endpoint");
    assert_eq!(json["report_builder"]["eventbridge"]["schedule"], "cron(0 6 * * ? *)");
}

#[test]
fn export_toml_to_custom_path() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    ctx.cli().args(["export", "-F", "toml", "-o", "out/triggers.toml"]).assert().success();

    let value: toml::Value = toml::from_str(&ctx.read("out/triggers.toml")).unwrap();
    assert_eq!(value["functions"]["alpha"]["http-gateway"]["route"].as_str(), Some("POST /x"));
}

#[test]
fn export_rejects_unknown_format() {
    let ctx = TestContext::new();
    ctx.write_config(ALPHA_BETA);

    ctx.cli()
        .args(["export", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported export format 'xml'"));
}
