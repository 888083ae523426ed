//! Process-wide default logger
//!
//! A thin default instance for ergonomic top-level calls. Initialization
//! is explicit, race-free, and idempotent: the first `init` wins and later
//! calls return the already-installed instance. Components that can take a
//! logger by reference should prefer that over this module.

use crate::core::config::Config;
use crate::core::field::Field;
use crate::core::level::Level;
use crate::core::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the default logger. The first call wins; subsequent calls are
/// no-ops returning the installed instance.
pub fn init(config: Config) -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(config))
}

/// The default logger, installing a plain console logger at info level if
/// none was configured yet.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(Config::default()))
}

pub fn debug(message: impl Into<String>) {
    global().log(Level::Debug, message);
}

pub fn info(message: impl Into<String>) {
    global().log(Level::Info, message);
}

pub fn warn(message: impl Into<String>) {
    global().log(Level::Warn, message);
}

pub fn error(message: impl Into<String>) {
    global().log(Level::Error, message);
}

pub fn infow(message: impl Into<String>, fields: Vec<Field>) {
    global().logw(Level::Info, message, fields);
}

pub fn errorw(message: impl Into<String>, fields: Vec<Field>) {
    global().logw(Level::Error, message, fields);
}
