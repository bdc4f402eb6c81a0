//! Append-only audit trail.
//!
//! The log is a scoped writer resource constructed once at process start and
//! injected into the pipeline — no stage touches the filesystem on its own.
//! Each record is one self-contained JSON line appended under a mutex, so
//! concurrent requests interleave whole records and never corrupt the file.
//! Recording is write-only and best-effort: the pipeline never reads the log
//! back and a failed append never fails an analysis.

use chrono::Utc;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

enum Sink {
    Disabled,
    Memory(Mutex<Vec<Value>>),
    File(Mutex<File>),
}

#[derive(Clone)]
pub struct AuditLog {
    sink: Arc<Sink>,
}

impl AuditLog {
    /// No-op log for callers that opt out of auditing.
    pub fn disabled() -> Self {
        Self {
            sink: Arc::new(Sink::Disabled),
        }
    }

    /// In-process log used by tests to assert on recorded stages.
    pub fn in_memory() -> Self {
        Self {
            sink: Arc::new(Sink::Memory(Mutex::new(Vec::new()))),
        }
    }

    /// File-backed log. The parent directory is created if absent.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            sink: Arc::new(Sink::File(Mutex::new(file))),
        })
    }

    /// Append one event. Failures are swallowed.
    pub fn record(&self, stage: &str, fields: Value) {
        let mut event = json!({
            "ts": Utc::now().to_rfc3339(),
            "stage": stage,
        });
        if let (Some(map), Value::Object(extra)) = (event.as_object_mut(), fields) {
            for (key, value) in extra {
                map.entry(key).or_insert(value);
            }
        }

        match self.sink.as_ref() {
            Sink::Disabled => {}
            Sink::Memory(events) => events.lock().push(event),
            Sink::File(file) => {
                let mut file = file.lock();
                let line = format!("{}\n", event);
                if file.write_all(line.as_bytes()).is_err() {
                    debug!(stage, "audit append failed");
                }
            }
        }
    }

    /// Recorded events, in order. Only meaningful for the in-memory sink.
    pub fn events(&self) -> Vec<Value> {
        match self.sink.as_ref() {
            Sink::Memory(events) => events.lock().clone(),
            _ => Vec::new(),
        }
    }

    /// Stage names of recorded events, in order (in-memory sink).
    pub fn stages(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|e| e["stage"].as_str().map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_preserves_order() {
        let log = AuditLog::in_memory();
        log.record("first", json!({"n": 1}));
        log.record("second", json!({"n": 2}));

        let stages = log.stages();
        assert_eq!(stages, vec!["first", "second"]);
        assert_eq!(log.events()[0]["n"], 1);
    }

    #[test]
    fn events_carry_timestamps() {
        let log = AuditLog::in_memory();
        log.record("stage", json!({}));
        assert!(log.events()[0]["ts"].as_str().is_some());
    }

    #[test]
    fn file_sink_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("audit.log");

        let log = AuditLog::open(&path).unwrap();
        log.record("mode_decision", json!({"useAI": false}));
        log.record("syntax_check", json!({"valid": true}));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: Value = serde_json::from_str(line).unwrap();
            assert!(value["stage"].as_str().is_some());
        }
    }

    #[test]
    fn disabled_sink_is_silent() {
        let log = AuditLog::disabled();
        log.record("anything", json!({}));
        assert!(log.events().is_empty());
    }

    #[test]
    fn fields_cannot_shadow_stage_or_timestamp() {
        let log = AuditLog::in_memory();
        log.record("real", json!({"stage": "forged", "detail": "kept"}));
        let event = &log.events()[0];
        assert_eq!(event["stage"], "real");
        assert_eq!(event["detail"], "kept");
    }
}
