use common::{JsonLayer, LoggingConfig, StructuredLogEntry};
use serde_json::Value;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn capture(emit: impl FnOnce()) -> Vec<StructuredLogEntry> {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = Registry::default().with(JsonLayer::new(move || writer.clone()));

    tracing::subscriber::with_default(subscriber, emit);

    buffer
        .lines()
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_json_layer_writes_one_object_per_event() {
    let entries = capture(|| {
        tracing::info!(id = "3f1c", "get_by_key");
        tracing::warn!(error = "Field Id is empty", "Operation rejected");
    });

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].level, "INFO");
    assert_eq!(entries[0].message, "get_by_key");
    assert_eq!(entries[0].fields["id"], Value::String("3f1c".to_string()));
    assert_eq!(entries[1].level, "WARN");
    assert!(entries[1].context.is_some());
}

#[test]
fn test_json_layer_lifts_duration_into_performance() {
    let entries = capture(|| {
        tracing::info!(duration_ms = 42u64, created = 3u64, "Monthly salary calculation finished");
    });

    let performance = entries[0].performance.as_ref().unwrap();
    assert_eq!(performance.duration_ms, 42);
    assert!(!entries[0].fields.contains_key("duration_ms"));
    assert_eq!(entries[0].fields["created"], Value::from(3u64));
}

#[test]
fn test_json_layer_without_timing_has_no_performance() {
    let entries = capture(|| {
        tracing::debug!(flag = true, ratio = 0.5, "plain event");
    });

    assert!(entries[0].performance.is_none());
    assert_eq!(entries[0].fields["flag"], Value::Bool(true));
    assert_eq!(entries[0].fields["ratio"], Value::from(0.5));
}

#[test]
fn test_logging_config_defaults() {
    let config = LoggingConfig::default();
    assert_eq!(config.filter, "info");
    assert!(!config.json_output);
    assert!(config.color_output);
}
