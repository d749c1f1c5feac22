use log::Level;
use serde_json::Value;

/// Receives one structured JSON fact per engine event.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Receives human-oriented audit lines alongside the fact stream.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// No-op sink for hosts that do not collect facts.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}
