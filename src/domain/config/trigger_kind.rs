use std::fmt;

/// Trigger types trigctl knows how to validate and plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    HttpGateway,
    Queue,
    ObjectStore,
    Schedule,
    Stream,
    Topic,
}

impl TriggerKind {
    pub const ALL: [TriggerKind; 6] = [
        TriggerKind::HttpGateway,
        TriggerKind::Queue,
        TriggerKind::ObjectStore,
        TriggerKind::Schedule,
        TriggerKind::Stream,
        TriggerKind::Topic,
    ];

    /// Recognize a trigger type key. Accepts the canonical key and the AWS
    /// service name used by older configuration files.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "http-gateway" | "api_gateway" => Some(TriggerKind::HttpGateway),
            "queue" | "sqs" => Some(TriggerKind::Queue),
            "object-store" | "s3" => Some(TriggerKind::ObjectStore),
            "schedule" | "eventbridge" => Some(TriggerKind::Schedule),
            "stream" | "dynamodb" => Some(TriggerKind::Stream),
            "topic" | "sns" => Some(TriggerKind::Topic),
            _ => None,
        }
    }

    pub fn canonical_key(self) -> &'static str {
        match self {
            TriggerKind::HttpGateway => "http-gateway",
            TriggerKind::Queue => "queue",
            TriggerKind::ObjectStore => "object-store",
            TriggerKind::Schedule => "schedule",
            TriggerKind::Stream => "stream",
            TriggerKind::Topic => "topic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TriggerKind::HttpGateway => "HTTP GATEWAY",
            TriggerKind::Queue => "QUEUE",
            TriggerKind::ObjectStore => "OBJECT STORE",
            TriggerKind::Schedule => "SCHEDULE",
            TriggerKind::Stream => "STREAM",
            TriggerKind::Topic => "TOPIC",
        }
    }

    /// Settings that must be present when the trigger is enabled.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            TriggerKind::HttpGateway => &["route"],
            TriggerKind::Queue => &["queue_name"],
            TriggerKind::ObjectStore => &["bucket_name", "events"],
            TriggerKind::Schedule => &["schedule"],
            TriggerKind::Stream => &["table_name", "batch_size"],
            TriggerKind::Topic => &["topic_name"],
        }
    }

    /// Terraform resource types the infrastructure layer declares for this trigger.
    pub fn resource_types(self) -> &'static [&'static str] {
        match self {
            TriggerKind::HttpGateway => &["aws_apigatewayv2_api"],
            TriggerKind::Queue => &["aws_sqs_queue", "aws_lambda_event_source_mapping"],
            TriggerKind::ObjectStore => &["aws_s3_bucket", "aws_s3_bucket_notification"],
            TriggerKind::Schedule => &["aws_cloudwatch_event_rule", "aws_cloudwatch_event_target"],
            TriggerKind::Stream => &["aws_lambda_event_source_mapping"],
            TriggerKind::Topic => &["aws_sns_topic", "aws_lambda_permission"],
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_key())
    }
}
