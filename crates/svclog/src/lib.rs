//! Shared structured-logging wrapper for the monorepo services.
//!
//! One JSON record per call, written as a single line to the configured
//! sink. There is no ambient global state: construct a [`Logger`] once at
//! process start and hand it to whatever needs it.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Static field identifying the owning service, stamped on every record.
    pub service: String,
    pub min_severity: Severity,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            service: "monorepo".to_string(),
            min_severity: Severity::Info,
        }
    }
}

pub struct Logger {
    config: LoggerConfig,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, Box::new(std::io::stdout()))
    }

    /// Same logger, custom sink. The seam tests use to capture records.
    pub fn with_sink(config: LoggerConfig, sink: Box<dyn Write + Send>) -> Self {
        Self {
            config,
            sink: Mutex::new(sink),
        }
    }

    pub fn info(&self, message: &str, data: Option<&Value>) {
        self.emit(Severity::Info, message, data);
    }

    pub fn warn(&self, message: &str, data: Option<&Value>) {
        self.emit(Severity::Warn, message, data);
    }

    pub fn error(&self, message: &str, err: Option<&dyn std::error::Error>) {
        let data = err.map(|err| json!({ "err": { "message": err.to_string() } }));
        self.emit(Severity::Error, message, data.as_ref());
    }

    fn emit(&self, severity: Severity, message: &str, data: Option<&Value>) {
        if severity < self.config.min_severity {
            return;
        }

        let mut record = Map::new();
        if let Some(Value::Object(fields)) = data {
            for (key, value) in fields {
                record.insert(key.clone(), value.clone());
            }
        }
        // Reserved fields win over colliding payload keys; the severity
        // label is uppercased at emission.
        record.insert(
            "severity".to_string(),
            Value::String(severity.label().to_uppercase()),
        );
        record.insert(
            "time".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        record.insert(
            "service".to_string(),
            Value::String(self.config.service.clone()),
        );
        record.insert("msg".to_string(), Value::String(message.to_string()));

        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", Value::Object(record));
            let _ = sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .expect("poisoned mutex")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedSink {
        fn records(&self) -> Vec<Value> {
            let bytes = self.0.lock().expect("poisoned mutex").clone();
            String::from_utf8(bytes)
                .expect("log output should be UTF-8")
                .lines()
                .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
                .collect()
        }
    }

    fn capturing_logger(config: LoggerConfig) -> (Logger, SharedSink) {
        let sink = SharedSink::default();
        let logger = Logger::with_sink(config, Box::new(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn info_record_carries_the_core_fields() {
        let (logger, sink) = capturing_logger(LoggerConfig::default());

        logger.info("hello world", None);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["severity"], "INFO");
        assert_eq!(records[0]["service"], "monorepo");
        assert_eq!(records[0]["msg"], "hello world");
        let time = records[0]["time"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }

    #[test]
    fn payload_fields_merge_into_the_record() {
        let (logger, sink) = capturing_logger(LoggerConfig::default());

        logger.info(
            "hello world",
            Some(&json!({ "structuredData": true, "evidence_count": 5 })),
        );

        let records = sink.records();
        assert_eq!(records[0]["structuredData"], true);
        assert_eq!(records[0]["evidence_count"], 5);
    }

    #[test]
    fn payload_cannot_override_reserved_fields() {
        let (logger, sink) = capturing_logger(LoggerConfig::default());

        logger.warn(
            "watch out",
            Some(&json!({ "severity": "nope", "service": "impostor" })),
        );

        let records = sink.records();
        assert_eq!(records[0]["severity"], "WARN");
        assert_eq!(records[0]["service"], "monorepo");
    }

    #[test]
    fn records_below_the_minimum_severity_are_suppressed() {
        let (logger, sink) = capturing_logger(LoggerConfig {
            service: "monorepo".to_string(),
            min_severity: Severity::Warn,
        });

        logger.info("dropped", None);
        logger.warn("kept", None);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["msg"], "kept");
    }

    #[test]
    fn error_captures_the_source_message() {
        let (logger, sink) = capturing_logger(LoggerConfig::default());
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");

        logger.error("write failed", Some(&cause));

        let records = sink.records();
        assert_eq!(records[0]["severity"], "ERROR");
        assert_eq!(records[0]["err"]["message"], "disk on fire");
    }

    #[test]
    fn each_call_emits_exactly_one_line() {
        let (logger, sink) = capturing_logger(LoggerConfig::default());

        logger.info("one", None);
        logger.warn("two", None);
        logger.error("three", None);

        assert_eq!(sink.records().len(), 3);
    }

    #[test]
    fn severity_ordering_matches_verbosity() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
