//! Logger configuration
//!
//! The shape consumed from the external configuration loader. Level and
//! encoding arrive as strings and are validated once, at logger
//! construction: a misconfigured logger cannot be trusted to report its own
//! failure, so validation fails the process at startup rather than at the
//! first log call.

use super::error::{LogError, Result};
use super::level::{Encoding, Level};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Minimum level, one of `debug|info|warn|error`. Required: a config
    /// file that omits it deserializes to an empty string and is rejected
    /// at construction.
    #[serde(default)]
    pub level: String,
    /// Wire encoding, one of `json|console`. Required, same as `level`.
    #[serde(default)]
    pub encoding: String,
    /// Skip caller resolution on every entry.
    #[serde(default)]
    pub disable_caller: bool,
    /// Skip stack-trace capture on error-level entries.
    #[serde(default)]
    pub disable_stacktrace: bool,
    /// Enables ANSI colors in the console encoder.
    #[serde(default)]
    pub is_development: bool,
    /// Ordered destinations; empty means stdout.
    #[serde(default)]
    pub output_paths: Vec<String>,
    /// IANA timezone name for timestamps; empty means UTC.
    #[serde(default)]
    pub timezone: String,
    /// AES-256 key material for reversible field masking; empty means the
    /// `***` placeholder only.
    #[serde(default)]
    pub mask_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            encoding: "console".to_string(),
            disable_caller: false,
            disable_stacktrace: false,
            is_development: false,
            output_paths: Vec::new(),
            timezone: String::new(),
            mask_key: String::new(),
        }
    }
}

impl Config {
    /// Parse and validate the level and encoding. Both must be non-empty and
    /// recognized.
    pub(crate) fn validate(&self) -> Result<(Level, Encoding)> {
        if self.level.is_empty() {
            return Err(LogError::config("level", "must not be empty"));
        }
        if self.encoding.is_empty() {
            return Err(LogError::config("encoding", "must not be empty"));
        }
        let level = self
            .level
            .parse::<Level>()
            .map_err(|e| LogError::config("level", e))?;
        let encoding = self
            .encoding
            .parse::<Encoding>()
            .map_err(|e| LogError::config("encoding", e))?;
        Ok((level, encoding))
    }
}
