//! Wire encoders
//!
//! Pure formatters from an [`Entry`](crate::core::Entry) to exactly one
//! newline-terminated line. Encoders never fail: a field that cannot be
//! rendered is skipped, the rest of the line is still emitted. The only
//! state an encoder holds is the timezone resolved once at construction.

pub mod console;
pub mod json;

pub use console::ConsoleEncoder;
pub use json::JsonEncoder;

use crate::core::config::Config;
use crate::core::entry::Entry;
use crate::core::level::Encoding;
use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

pub trait Encoder: Send + Sync {
    /// Produce one newline-terminated line for the entry. An empty return
    /// signals "suppress this entry".
    fn encode(&self, entry: &Entry) -> String;
}

/// Construct the encoder for the configured encoding.
pub fn new_encoder(encoding: Encoding, config: &Config) -> Arc<dyn Encoder> {
    match encoding {
        Encoding::Json => Arc::new(JsonEncoder::new(config)),
        Encoding::Console => Arc::new(ConsoleEncoder::new(config)),
    }
}

/// Resolve an IANA timezone name, silently falling back to UTC on an empty
/// or unknown name.
pub(crate) fn resolve_timezone(name: &str) -> Tz {
    if name.is_empty() {
        return Tz::UTC;
    }
    name.parse().unwrap_or(Tz::UTC)
}

/// RFC 3339 with seconds precision in the encoder's timezone.
pub(crate) fn format_timestamp(time: &DateTime<Utc>, tz: &Tz) -> String {
    time.with_timezone(tz)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
