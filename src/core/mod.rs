//! Core engine types: data model, logger, and async delivery

pub mod async_logger;
pub mod caller;
pub mod config;
pub mod entry;
pub mod error;
pub mod field;
pub mod level;
pub mod logger;
pub mod output;

pub use async_logger::{AsyncLogger, DEFAULT_QUEUE_CAPACITY};
pub use caller::CallerInfo;
pub use config::Config;
pub use entry::Entry;
pub use error::{LogError, Result};
pub use field::{Field, FieldValue};
pub use level::{Encoding, Level};
pub use logger::{Logger, LoggerOption};
pub use output::{Destination, MemoryBuffer};
