//! JSON encoder
//!
//! Emits object keys in a fixed prefix order: `ts`, `caller` (when
//! present), `level`, `msg`, `stacktrace` (when non-empty), then the
//! remaining fields. The prefix ordering is a hard contract for downstream
//! log-parsing tooling; user fields may not displace the reserved keys.

use super::{format_timestamp, resolve_timezone, Encoder};
use crate::core::config::Config;
use crate::core::entry::Entry;
use chrono_tz::Tz;
use serde_json::{Map, Value};

const RESERVED_KEYS: &[&str] = &["ts", "caller", "level", "msg", "stacktrace"];

pub struct JsonEncoder {
    tz: Tz,
}

impl JsonEncoder {
    pub fn new(config: &Config) -> Self {
        Self {
            tz: resolve_timezone(&config.timezone),
        }
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, entry: &Entry) -> String {
        let mut obj = Map::new();

        obj.insert(
            "ts".to_string(),
            Value::String(format_timestamp(&entry.time, &self.tz)),
        );
        if let Some(ref caller) = entry.caller {
            obj.insert("caller".to_string(), Value::String(caller.to_string()));
        }
        obj.insert(
            "level".to_string(),
            Value::String(entry.level.as_str().to_string()),
        );
        obj.insert("msg".to_string(), Value::String(entry.message.clone()));
        if let Some(ref stacktrace) = entry.stacktrace {
            if !stacktrace.is_empty() {
                obj.insert("stacktrace".to_string(), Value::String(stacktrace.clone()));
            }
        }

        for (key, value) in &entry.fields {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            obj.insert(key.clone(), value.to_json_value());
        }

        let mut line = serde_json::to_string(&Value::Object(obj)).unwrap_or_default();
        if !line.is_empty() {
            line.push('\n');
        }
        line
    }
}
