pub mod memory_config_store;

pub use memory_config_store::MemoryConfigStore;

/// Two functions, each with one enabled and one disabled trigger.
pub const TWO_FUNCTION_CONFIG: &str = r#"
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
    schedule:
      enabled: true
      schedule: "rate(1 hour)"
    topic:
      enabled: false
      topic_name: beta-news
environments:
  dev:
    log_level: DEBUG
"#;
