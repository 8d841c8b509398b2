//! Configuration sources shared across contract tests.

/// `alpha` has one enabled and one disabled trigger; `beta` declares none.
pub(crate) const ALPHA_BETA: &str = r#"
functions:
  alpha:
    name: alpha
    runtime: provided.al2023
    timeout: 30
    memory: 128
    http-gateway:
      enabled: true
      route: "POST /x"
    queue:
      enabled: false
      queue_name: alpha-jobs
  beta:
    name: beta
environments:
  dev:
    log_level: DEBUG
  prod:
    log_level: INFO
"#;

/// Two functions, each with one enabled and one disabled trigger.
pub(crate) const TWO_BY_TWO: &str = r#"
functions:
  ray_converter:
    name: ray-converter
    description: Convert Ray format data to standard format
    runtime: provided.al2023
    timeout: 30
    memory: 256
    api_gateway:
      enabled: true
      description: Public HTTP endpoint
      route: "POST /convert"
    sqs:
      enabled: false
      queue_name: ray-converter-queue
      batch_size: 10
  report_builder:
    name: report-builder
    eventbridge:
      enabled: true
      schedule: "cron(0 6 * * ? *)"
    sns:
      enabled: false
      topic_name: reports
"#;

/// Enabled schedule trigger without an expression.
pub(crate) const MISSING_SCHEDULE: &str = r#"
functions:
  alpha:
    name: alpha
    schedule:
      enabled: true
"#;

/// Function metadata in the older `memory_size` spelling.
pub(crate) const LEGACY_MEMORY_SIZE: &str = r#"
functions:
  ray_converter:
    name: ray-converter
    description: Convert Ray format data to standard format
    runtime: python3.11
    timeout: 30
    memory_size: 256
    api_gateway:
      enabled: true
      route: "POST /convert"
    sqs:
      enabled: false
      queue_name: ray-converter-queue
      batch_size: 10
"#;
