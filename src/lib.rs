//! # Reclog
//!
//! A record-oriented structured logging engine with synchronous and
//! asynchronous delivery, pluggable wire encodings, per-field redaction,
//! and automatic caller/stack-trace enrichment.
//!
//! ## Features
//!
//! - **Structured Records**: Key-value fields merged from persistent and
//!   call-site scopes
//! - **JSON and Console Encodings**: Fixed-prefix JSON for machines,
//!   tab-separated colorized lines for humans
//! - **Async Delivery**: Bounded queue with a write-through overflow policy;
//!   producers never block, entries are never dropped
//! - **Redaction**: Per-field omission and reversible AEAD masking for
//!   sensitive values
//! - **Thread Safe**: Designed for concurrent producers and safe logger
//!   branching
//!
//! ## Quick start
//!
//! ```
//! use reclog::{fields, Config, Logger};
//!
//! let logger = Logger::new(Config {
//!     level: "info".to_string(),
//!     encoding: "json".to_string(),
//!     output_paths: vec!["memory".to_string()],
//!     ..Config::default()
//! });
//!
//! let api_logger = logger.with(fields! { "service" => "api" });
//! api_logger.infow("User created", fields! { "user_id" => 12345 });
//! ```

pub mod core;
pub mod encoders;
pub mod global;
pub mod macros;
pub mod redact;

pub mod prelude {
    pub use crate::core::{
        AsyncLogger, CallerInfo, Config, Encoding, Entry, Field, FieldValue, Level, LogError,
        Logger, LoggerOption, MemoryBuffer, Result, DEFAULT_QUEUE_CAPACITY,
    };
    pub use crate::encoders::{ConsoleEncoder, Encoder, JsonEncoder};
    pub use crate::redact::{Masker, Redact, RedactedRecord, MASK_PLACEHOLDER};
}

pub use crate::core::{
    AsyncLogger, CallerInfo, Config, Encoding, Entry, Field, FieldValue, Level, LogError, Logger,
    LoggerOption, MemoryBuffer, Result, DEFAULT_QUEUE_CAPACITY,
};
pub use crate::encoders::{ConsoleEncoder, Encoder, JsonEncoder};
pub use crate::redact::{Masker, Redact, RedactedRecord, MASK_PLACEHOLDER};
