//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`, and work with
//! both [`Logger`](crate::Logger) and [`AsyncLogger`](crate::AsyncLogger).
//!
//! # Examples
//!
//! ```
//! use reclog::prelude::*;
//! use reclog::{fields, info};
//!
//! let logger = Logger::default();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Structured fields
//! logger.infow("User created", fields! { "user_id" => 12345, "plan" => "pro" });
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use reclog::prelude::*;
/// # let logger = Logger::default();
/// use reclog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use reclog::prelude::*;
/// # let logger = Logger::default();
/// use reclog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a message synchronously and terminate the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}

/// Build a `Vec<Field>` for the `*w` logging methods.
///
/// # Examples
///
/// ```
/// # use reclog::prelude::*;
/// # let logger = Logger::default();
/// use reclog::fields;
/// logger.infow("request done", fields! { "status" => 200, "path" => "/health" });
/// ```
#[macro_export]
macro_rules! fields {
    () => { ::std::vec::Vec::<$crate::Field>::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {
        vec![$( $crate::Field::new($key, $value) ),+]
    };
}
