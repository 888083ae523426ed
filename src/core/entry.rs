//! Log entry structure

use super::caller::CallerInfo;
use super::field::FieldValue;
use super::level::Level;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// One fully-assembled log record, ready for encoding. Built fresh per log
/// call and immutable once handed to an encoder.
#[derive(Debug, Clone)]
pub struct Entry {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub caller: Option<CallerInfo>,
    pub stacktrace: Option<String>,
    pub fields: HashMap<String, FieldValue>,
}

impl Entry {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            caller: None,
            stacktrace: None,
            fields: HashMap::new(),
        }
    }

    pub fn with_caller(mut self, caller: Option<CallerInfo>) -> Self {
        self.caller = caller;
        self
    }

    pub fn with_stacktrace(mut self, stacktrace: Option<String>) -> Self {
        self.stacktrace = stacktrace;
        self
    }

    pub fn with_fields(mut self, fields: HashMap<String, FieldValue>) -> Self {
        self.fields = fields;
        self
    }
}
