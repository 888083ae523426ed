//! Caller and stack-trace resolution
//!
//! Walks the captured backtrace to find the first frame of user code,
//! skipping this crate's logging machinery and runtime internals. Resolution
//! failures degrade to `None`: caller info is optional enrichment and must
//! never fail a log call.

use std::backtrace::Backtrace;
use std::fmt;

/// Source location of a logging call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    /// Short relative path, last two components of the source file.
    pub file: String,
    pub line: u32,
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Function-name fragments belonging to this crate's dispatch path.
const WRAPPER_FRAGMENTS: &[&str] = &[
    "reclog::core::logger",
    "reclog::core::async_logger",
    "reclog::core::caller",
    "reclog::global",
];

/// Source-path fragments of runtime/system code.
const SYSTEM_FILE_FRAGMENTS: &[&str] = &[
    "/rustc/",
    "library/std/",
    "library/core/",
    "library/alloc/",
    "/backtrace/",
];

/// Symbol prefixes of runtime/system functions.
const SYSTEM_SYMBOL_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "backtrace::",
    "rust_begin_unwind",
    "__rust",
    "_start",
    "__libc_start",
];

#[derive(Debug)]
struct Frame {
    symbol: String,
    file: String,
    line: u32,
}

impl Frame {
    fn is_user_code(&self) -> bool {
        if WRAPPER_FRAGMENTS.iter().any(|f| self.symbol.contains(f)) {
            return false;
        }
        if SYSTEM_FILE_FRAGMENTS.iter().any(|f| self.file.contains(f)) {
            return false;
        }
        if SYSTEM_SYMBOL_PREFIXES
            .iter()
            .any(|p| self.symbol.starts_with(p))
        {
            return false;
        }
        true
    }
}

/// Resolve the call site of the current log call, skipping `extra_skip`
/// qualifying frames past the first. Returns `None` when no frame resolves.
pub fn resolve(extra_skip: usize) -> Option<CallerInfo> {
    let frames = capture_frames();
    frames
        .into_iter()
        .filter(Frame::is_user_code)
        .nth(extra_skip)
        .map(|f| CallerInfo {
            file: short_path(&f.file),
            line: f.line,
        })
}

/// Render the filtered stack as a multi-line trace, one frame per
/// `symbol\n\tfile:line` pair. Empty result degrades to `None`.
pub fn stack_trace(extra_skip: usize) -> Option<String> {
    let frames = capture_frames();
    let rendered: Vec<String> = frames
        .into_iter()
        .filter(Frame::is_user_code)
        .skip(extra_skip)
        .map(|f| format!("{}\n\t{}:{}", f.symbol, short_path(&f.file), f.line))
        .collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join("\n"))
    }
}

/// Capture and parse the current backtrace into frames that carry both a
/// symbol and a resolved source location. Frames without line info (missing
/// debug symbols) are dropped.
fn capture_frames() -> Vec<Frame> {
    let rendered = Backtrace::force_capture().to_string();
    parse_backtrace(&rendered)
}

/// Parse the standard library's rendered backtrace format:
///
/// ```text
///    4: mycrate::module::func
///              at ./src/module.rs:42:9
/// ```
fn parse_backtrace(rendered: &str) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut pending_symbol: Option<String> = None;

    for line in rendered.lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("at ") {
            if let Some(symbol) = pending_symbol.take() {
                if let Some((file, line)) = parse_location(rest) {
                    frames.push(Frame { symbol, file, line });
                }
            }
        } else if let Some((index, symbol)) = trimmed.split_once(": ") {
            if index.chars().all(|c| c.is_ascii_digit()) {
                pending_symbol = Some(symbol.trim().to_string());
            }
        }
    }
    frames
}

/// Split `path:line:col` (or `path:line`) into path and line number.
fn parse_location(loc: &str) -> Option<(String, u32)> {
    let mut parts = loc.rsplitn(3, ':');
    let last = parts.next()?;
    let middle = parts.next()?;
    let rest = parts.next();

    // With a column present the line is the middle component, otherwise
    // it is the last one.
    if let Ok(line) = middle.parse::<u32>() {
        if last.chars().all(|c| c.is_ascii_digit()) {
            let file = rest.map(str::to_string).unwrap_or_default();
            if file.is_empty() {
                return None;
            }
            return Some((file, line));
        }
    }
    if let Ok(line) = last.parse::<u32>() {
        let file = match rest {
            Some(r) => format!("{}:{}", r, middle),
            None => middle.to_string(),
        };
        return Some((file, line));
    }
    None
}

/// Shorten an absolute path to its last two components, mirroring how log
/// consumers expect a `pkg/file.rs` style caller.
fn short_path(path: &str) -> String {
    let mut components: Vec<&str> = path.split(['/', '\\']).collect();
    components.retain(|c| !c.is_empty() && *c != ".");
    match components.len() {
        0 => path.to_string(),
        1 => components[0].to_string(),
        n => format!("{}/{}", components[n - 2], components[n - 1]),
    }
}
