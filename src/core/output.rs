//! Output destinations
//!
//! Resolution of configured output paths into writers. File destinations are
//! opened once at logger construction and fsynced after each write to bound
//! data loss on crash; console destinations are not. An unwritable path
//! falls back to stdout instead of failing construction.

use super::error::{LogError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared in-memory destination, readable back by its holder. Useful for
/// capturing output in tests and embedded scenarios.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    inner: Arc<Mutex<String>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.inner.lock().clone()
    }

    fn push(&self, line: &str) {
        self.inner.lock().push_str(line);
    }
}

/// One resolved log destination.
pub enum Destination {
    Stdout,
    Stderr,
    Memory(MemoryBuffer),
    File { path: PathBuf, file: Mutex<File> },
}

impl Destination {
    /// Write one encoded line. File destinations are synced to disk before
    /// returning.
    pub fn write_line(&self, line: &str) -> Result<()> {
        match self {
            Destination::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(line.as_bytes())
                    .map_err(|e| LogError::io_operation("writing to stdout", e))?;
            }
            Destination::Stderr => {
                let mut out = std::io::stderr().lock();
                out.write_all(line.as_bytes())
                    .map_err(|e| LogError::io_operation("writing to stderr", e))?;
            }
            Destination::Memory(buffer) => buffer.push(line),
            Destination::File { path, file } => {
                let mut file = file.lock();
                file.write_all(line.as_bytes()).map_err(|e| {
                    LogError::destination(path.display().to_string(), e.to_string())
                })?;
                file.sync_data().map_err(|e| {
                    LogError::destination(path.display().to_string(), e.to_string())
                })?;
            }
        }
        Ok(())
    }

    /// The memory buffer handle, when this destination is one.
    pub fn memory(&self) -> Option<&MemoryBuffer> {
        match self {
            Destination::Memory(buffer) => Some(buffer),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => write!(f, "Stdout"),
            Destination::Stderr => write!(f, "Stderr"),
            Destination::Memory(_) => write!(f, "Memory"),
            Destination::File { path, .. } => write!(f, "File({})", path.display()),
        }
    }
}

/// Resolve configured output paths in order. An empty list means stdout.
pub fn resolve_outputs(paths: &[String]) -> Vec<Destination> {
    if paths.is_empty() {
        return vec![Destination::Stdout];
    }
    paths.iter().map(|p| resolve_path(p)).collect()
}

fn resolve_path(path: &str) -> Destination {
    match path {
        "" | "stdout" => Destination::Stdout,
        "stderr" => Destination::Stderr,
        "memory" => Destination::Memory(MemoryBuffer::new()),
        other => match open_log_file(other) {
            Ok(file) => Destination::File {
                path: PathBuf::from(other),
                file: Mutex::new(file),
            },
            Err(e) => {
                eprintln!(
                    "[reclog ERROR] cannot open log destination '{}': {}. Falling back to stdout.",
                    other, e
                );
                Destination::Stdout
            }
        },
    }
}

/// Open a log file in append mode, created if absent with owner-only
/// permissions.
fn open_log_file(path: &str) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
