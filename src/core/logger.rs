//! Main logger implementation

use super::caller;
use super::config::Config;
use super::entry::Entry;
use super::field::{merge_fields, Field, FieldValue};
use super::level::{Encoding, Level};
use super::output::{resolve_outputs, Destination, MemoryBuffer};
use crate::encoders::{new_encoder, Encoder};
use crate::redact::{Masker, Redact};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Functional options applied by [`Logger::with_options`].
#[derive(Debug, Clone, Copy)]
pub enum LoggerOption {
    /// Skip this many additional qualifying frames during caller
    /// resolution. Needed when a wrapper function should not be reported
    /// as the call site.
    AddCallerSkip(usize),
}

/// The core logging engine: turns a logging call into a formatted line
/// written to every configured destination, applying level filtering, field
/// merging, and caller/stack-trace enrichment.
///
/// `Logger` is cheap to clone and safe to share across threads. Branching
/// with [`with`](Self::with) yields a new logical logger sharing config and
/// outputs but owning its merged field map; the parent is never mutated.
pub struct Logger {
    level: Level,
    encoding: Encoding,
    config: Arc<Config>,
    fields: Arc<RwLock<HashMap<String, FieldValue>>>,
    outputs: Arc<RwLock<Vec<Destination>>>,
    encoder: Arc<RwLock<Option<Arc<dyn Encoder>>>>,
    masker: Arc<Masker>,
    caller_skip: usize,
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self {
            level: self.level,
            encoding: self.encoding,
            config: Arc::clone(&self.config),
            fields: Arc::clone(&self.fields),
            outputs: Arc::clone(&self.outputs),
            encoder: Arc::clone(&self.encoder),
            masker: Arc::clone(&self.masker),
            caller_skip: self.caller_skip,
        }
    }
}

impl Logger {
    /// Construct a logger from configuration.
    ///
    /// # Panics
    ///
    /// Panics when `level` or `encoding` is missing or unrecognized. A
    /// misconfigured logger cannot be trusted to report its own failure,
    /// so construction fails at startup rather than at the first log call.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let (level, encoding) = match config.validate() {
            Ok(parsed) => parsed,
            Err(msg) => panic!("reclog: {}", msg),
        };
        let outputs = resolve_outputs(&config.output_paths);
        let masker = Masker::new(&config.mask_key);
        Self {
            level,
            encoding,
            config: Arc::new(config),
            fields: Arc::new(RwLock::new(HashMap::new())),
            outputs: Arc::new(RwLock::new(outputs)),
            encoder: Arc::new(RwLock::new(None)),
            masker: Arc::new(masker),
            caller_skip: 0,
        }
    }

    /// Configured minimum level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The masker built from the configured mask key.
    pub fn masker(&self) -> &Masker {
        &self.masker
    }

    /// Handle of the first in-memory destination, when one is configured.
    pub fn memory_buffer(&self) -> Option<MemoryBuffer> {
        self.outputs.read().iter().find_map(|d| d.memory().cloned())
    }

    /// Sanitized representation of a redactable value, as a loggable field
    /// value using this logger's masker.
    pub fn redacted<T: Redact + ?Sized>(&self, value: &T) -> FieldValue {
        FieldValue::Json(value.redact(&self.masker))
    }

    /// A derived logger with the given fields merged over the receiver's
    /// persistent fields. Call-site and later fields win on key collision.
    /// Never mutates the receiver; safe to call concurrently from multiple
    /// threads holding the same parent.
    #[must_use]
    pub fn with(&self, fields: Vec<Field>) -> Logger {
        let merged = {
            let base = self.fields.read();
            merge_fields(&base, fields)
        };
        let mut child = self.clone();
        child.fields = Arc::new(RwLock::new(merged));
        child
    }

    /// A derived logger with the given options applied.
    #[must_use]
    pub fn with_options(&self, options: impl IntoIterator<Item = LoggerOption>) -> Logger {
        let mut child = self.clone();
        for option in options {
            match option {
                LoggerOption::AddCallerSkip(n) => child.caller_skip += n,
            }
        }
        child
    }

    pub(crate) fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Build an entry for the given call: merge persistent and call-site
    /// fields, resolve the caller unless disabled, and capture a stack
    /// trace for error-level entries unless disabled.
    pub(crate) fn make_entry(
        &self,
        level: Level,
        extra_skip: usize,
        message: String,
        fields: Vec<Field>,
    ) -> Entry {
        let merged = {
            let base = self.fields.read();
            merge_fields(&base, fields)
        };
        let skip = self.caller_skip + extra_skip;
        let caller = if self.config.disable_caller {
            None
        } else {
            caller::resolve(skip)
        };
        let stacktrace = if level == Level::Error && !self.config.disable_stacktrace {
            caller::stack_trace(skip)
        } else {
            None
        };
        Entry::new(level, message)
            .with_caller(caller)
            .with_stacktrace(stacktrace)
            .with_fields(merged)
    }

    /// Encode and fan out one entry to every destination in configured
    /// order. A destination failure is reported to stderr and does not
    /// affect the remaining destinations.
    pub(crate) fn write_entry(&self, entry: &Entry) {
        let encoder = self.encoder();
        let line = encoder.encode(entry);
        if line.is_empty() {
            return;
        }
        let outputs = self.outputs.read();
        for destination in outputs.iter() {
            if let Err(e) = destination.write_line(&line) {
                eprintln!("[reclog ERROR] write to {:?} failed: {}", destination, e);
            }
        }
    }

    /// The memoized encoder for the configured encoding, built on first
    /// use. Double-checked so the hot path takes only the read lock once
    /// warmed up.
    fn encoder(&self) -> Arc<dyn Encoder> {
        if let Some(ref encoder) = *self.encoder.read() {
            return Arc::clone(encoder);
        }
        let mut slot = self.encoder.write();
        if let Some(ref encoder) = *slot {
            return Arc::clone(encoder);
        }
        let encoder = new_encoder(self.encoding, &self.config);
        *slot = Some(Arc::clone(&encoder));
        encoder
    }

    fn dispatch(&self, level: Level, message: String, fields: Vec<Field>) {
        if !self.enabled(level) {
            return;
        }
        let entry = self.make_entry(level, 0, message, fields);
        self.write_entry(&entry);
    }

    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.dispatch(level, message.into(), Vec::new());
    }

    pub fn logw(&self, level: Level, message: impl Into<String>, fields: Vec<Field>) {
        self.dispatch(level, message.into(), fields);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    #[inline]
    pub fn debugw(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.logw(Level::Debug, message, fields);
    }

    #[inline]
    pub fn infow(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.logw(Level::Info, message, fields);
    }

    #[inline]
    pub fn warnw(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.logw(Level::Warn, message, fields);
    }

    #[inline]
    pub fn errorw(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.logw(Level::Error, message, fields);
    }

    /// Write the message synchronously at error severity, then terminate
    /// the process. A fatal message is never subject to level filtering.
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.fatalw(message, Vec::new())
    }

    pub fn fatalw(&self, message: impl Into<String>, fields: Vec<Field>) -> ! {
        let entry = self.make_entry(Level::Error, 0, message.into(), fields);
        self.write_entry(&entry);
        std::process::exit(1);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("encoding", &self.encoding)
            .field("caller_skip", &self.caller_skip)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    fn memory_logger(level: &str, encoding: &str) -> Logger {
        Logger::new(Config {
            level: level.to_string(),
            encoding: encoding.to_string(),
            disable_caller: true,
            disable_stacktrace: true,
            output_paths: vec!["memory".to_string()],
            ..Config::default()
        })
    }

    #[test]
    fn test_level_filtering() {
        let logger = memory_logger("warn", "console");
        logger.debug("dropped");
        logger.info("dropped");
        logger.warn("kept");
        logger.error("kept");

        let contents = logger.memory_buffer().unwrap().contents();
        assert!(!contents.contains("dropped"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_equal_level_logs() {
        let logger = memory_logger("info", "console");
        logger.info("at threshold");
        assert!(logger.memory_buffer().unwrap().contents().contains("at threshold"));
    }

    #[test]
    fn test_with_does_not_mutate_parent() {
        let parent = memory_logger("info", "json");
        let child = parent.with(fields! { "component" => "worker" });

        parent.info("from parent");
        child.info("from child");

        let contents = parent.memory_buffer().unwrap().contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(!lines[0].contains("component"));
        assert!(lines[1].contains("\"component\":\"worker\""));
    }

    #[test]
    fn test_call_site_fields_win() {
        let logger = memory_logger("info", "json").with(fields! { "id" => 1 });
        logger.infow("msg", fields! { "id" => 2 });
        let contents = logger.memory_buffer().unwrap().contents();
        assert!(contents.contains("\"id\":2"));
        assert!(!contents.contains("\"id\":1"));
    }

    #[test]
    fn test_with_options_accumulates_skip() {
        let logger = memory_logger("info", "console")
            .with_options([LoggerOption::AddCallerSkip(1)])
            .with_options([LoggerOption::AddCallerSkip(2)]);
        assert_eq!(logger.caller_skip, 3);
    }

    #[test]
    fn test_concurrent_branching() {
        let parent = memory_logger("info", "json");
        let mut handles = Vec::new();
        for i in 0..8 {
            let parent = parent.clone();
            handles.push(std::thread::spawn(move || {
                let child = parent.with(fields! { "worker" => i });
                child.info("spawned");
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        let contents = parent.memory_buffer().unwrap().contents();
        assert_eq!(contents.lines().count(), 8);
    }

    #[test]
    #[should_panic(expected = "Invalid log level")]
    fn test_invalid_level_fails_construction() {
        let _ = Logger::new(Config {
            level: "verbose".to_string(),
            ..Config::default()
        });
    }

    #[test]
    #[should_panic(expected = "Invalid configuration for encoding")]
    fn test_empty_encoding_fails_construction() {
        let _ = Logger::new(Config {
            encoding: String::new(),
            ..Config::default()
        });
    }
}
