//! Console encoder
//!
//! Tab-separated human-readable lines: timestamp, level, optional caller,
//! message, then a space-joined `key=value` rendering of the fields. The
//! stack trace, when present, follows on its own line. Levels are colorized
//! only in development mode.

use super::{format_timestamp, resolve_timezone, Encoder};
use crate::core::config::Config;
use crate::core::entry::Entry;
use chrono_tz::Tz;
use colored::Colorize;

pub struct ConsoleEncoder {
    tz: Tz,
    use_colors: bool,
}

impl ConsoleEncoder {
    pub fn new(config: &Config) -> Self {
        Self {
            tz: resolve_timezone(&config.timezone),
            use_colors: config.is_development,
        }
    }

    fn level_str(&self, entry: &Entry) -> String {
        let upper = entry.level.upper_str();
        if self.use_colors {
            upper.color(entry.level.color_code()).to_string()
        } else {
            upper.to_string()
        }
    }
}

/// Escape control characters that would break the line-oriented format or
/// allow injecting fake entries.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl Encoder for ConsoleEncoder {
    fn encode(&self, entry: &Entry) -> String {
        let mut parts = Vec::with_capacity(5);
        parts.push(format_timestamp(&entry.time, &self.tz));
        parts.push(self.level_str(entry));
        if let Some(ref caller) = entry.caller {
            parts.push(caller.to_string());
        }
        parts.push(sanitize_message(&entry.message));

        if !entry.fields.is_empty() {
            let rendered: Vec<String> = entry
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            parts.push(rendered.join(" "));
        }

        let mut line = parts.join("\t");
        if let Some(ref stacktrace) = entry.stacktrace {
            if !stacktrace.is_empty() {
                line.push('\n');
                line.push_str(stacktrace);
            }
        }
        line.push('\n');
        line
    }
}
