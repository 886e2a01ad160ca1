//! Structured logging setup for services built on the business layer

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::io::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

/// One log event rendered as a JSON object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredLogEntry {
    /// ISO 8601 timestamp
    pub timestamp: String,
    pub level: String,
    /// Module that emitted the event
    pub target: String,
    pub message: String,
    /// Remaining event fields
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ExecutionContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceMetrics>,
}

/// Process the event was emitted from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionContext {
    pub app_version: String,
    pub pid: u32,
    pub thread_id: String,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            pid: std::process::id(),
            thread_id: format!("{:?}", std::thread::current().id()),
        }
    }
}

/// Timing reported by long-running operations such as the salary batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub duration_ms: u64,
}

/// Layer writing one JSON object per event to `make_writer`
pub struct JsonLayer<W> {
    make_writer: W,
}

impl JsonLayer<fn() -> io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            make_writer: io::stdout,
        }
    }
}

impl<W> JsonLayer<W>
where
    W: for<'w> MakeWriter<'w> + 'static,
{
    pub fn new(make_writer: W) -> Self {
        Self { make_writer }
    }
}

impl<S, W> Layer<S> for JsonLayer<W>
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let level = match *event.metadata().level() {
            Level::ERROR => "ERROR",
            Level::WARN => "WARN",
            Level::INFO => "INFO",
            Level::DEBUG => "DEBUG",
            Level::TRACE => "TRACE",
        };

        let performance = visitor.extract_performance_metrics();

        let entry = StructuredLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            level: level.to_string(),
            target: event.metadata().target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
            context: Some(ExecutionContext::default()),
            performance,
        };

        if let Ok(json) = serde_json::to_string(&entry) {
            let mut writer = self.make_writer.make_writer();
            let _ = writeln!(writer, "{json}");
        }
    }
}

#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: HashMap<String, Value>,
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.insert(
                field.name().to_string(),
                Value::String(format!("{value:?}")),
            );
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .insert(field.name().to_string(), Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), Value::Number(value.into()));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.fields.insert(field.name().to_string(), Value::Number(n));
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), Value::Bool(value));
    }
}

impl JsonVisitor {
    /// Lift `duration_ms` out of the plain fields
    fn extract_performance_metrics(&mut self) -> Option<PerformanceMetrics> {
        let duration_ms = self.fields.get("duration_ms").and_then(Value::as_u64)?;
        self.fields.remove("duration_ms");
        Some(PerformanceMetrics { duration_ms })
    }
}

/// Subscriber settings derived from the business configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set
    pub filter: String,
    pub json_output: bool,
    /// Only for non-JSON output
    pub color_output: bool,
    pub include_line_numbers: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json_output: false,
            color_output: true,
            include_line_numbers: cfg!(debug_assertions),
        }
    }
}

impl From<&domain::LoggingConfig> for LoggingConfig {
    fn from(config: &domain::LoggingConfig) -> Self {
        Self {
            filter: config.level.clone(),
            json_output: config.json_output,
            color_output: !config.json_output,
            ..Self::default()
        }
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `config.filter`. Fails if a global
/// subscriber is already set or the filter does not parse.
pub fn init_structured_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)?,
    };

    if config.json_output {
        let subscriber = Registry::default()
            .with(env_filter)
            .with(JsonLayer::stdout());

        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(config.include_line_numbers)
            .with_ansi(config.color_output);

        let subscriber = Registry::default().with(env_filter).with(fmt_layer);

        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_log_entry_serialization() {
        let mut fields = HashMap::new();
        fields.insert("worker_id".to_string(), Value::String("w-1".to_string()));

        let entry = StructuredLogEntry {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            level: "INFO".to_string(),
            target: "domain::services::salary_service".to_string(),
            message: "Monthly salary calculation finished".to_string(),
            fields,
            context: Some(ExecutionContext::default()),
            performance: Some(PerformanceMetrics { duration_ms: 100 }),
        };

        let json = serde_json::to_string_pretty(&entry).unwrap();
        assert!(json.contains("timestamp"));
        assert!(json.contains("\"worker_id\": \"w-1\""));
        assert!(json.contains("duration_ms"));
    }

    #[test]
    fn test_logging_config_from_business_config() {
        let business = domain::LoggingConfig {
            level: "domain=debug".to_string(),
            json_output: true,
        };
        let config = LoggingConfig::from(&business);
        assert_eq!(config.filter, "domain=debug");
        assert!(config.json_output);
        assert!(!config.color_output);
    }
}
