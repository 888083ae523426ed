//! Asynchronous logging decorator
//!
//! Wraps a [`Logger`] with a bounded queue and one background worker
//! thread, converting blocking writes into a non-blocking enqueue.
//! Producers never wait on logging and entries are never dropped: when the
//! queue is full or the logger is already shutting down, the producer
//! writes through synchronously instead. The cost of that contract is that
//! cross-producer ordering is not preserved across the overflow path.

use super::entry::Entry;
use super::error::Result;
use super::field::Field;
use super::level::Level;
use super::logger::Logger;
use crossbeam_channel::{bounded, select, Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Queue capacity used when none (or zero) is requested.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

pub struct AsyncLogger {
    inner: Logger,
    tx: Sender<Box<Entry>>,
    rx: Receiver<Box<Entry>>,
    cancel_tx: Sender<()>,
    cancelled: Arc<AtomicBool>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl AsyncLogger {
    /// Decorate a logger with a bounded delivery queue of the given
    /// capacity (zero selects [`DEFAULT_QUEUE_CAPACITY`]) and spawn the
    /// worker thread.
    #[must_use]
    pub fn new(logger: Logger, capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_QUEUE_CAPACITY
        } else {
            capacity
        };
        let (tx, rx) = bounded::<Box<Entry>>(capacity);
        let (cancel_tx, cancel_rx) = bounded::<()>(1);

        let writer = logger.clone();
        let worker_rx = rx.clone();
        let handle = thread::spawn(move || worker_loop(worker_rx, cancel_rx, writer));

        Self {
            inner: logger,
            tx,
            rx,
            cancel_tx,
            cancelled: Arc::new(AtomicBool::new(false)),
            worker: Mutex::new(Some(handle)),
        }
    }

    /// The wrapped synchronous logger.
    pub fn logger(&self) -> &Logger {
        &self.inner
    }

    /// Filtering and entry construction happen eagerly on the caller's
    /// thread; only delivery is deferred. Delivery order: non-blocking
    /// enqueue, synchronous write when already cancelled, synchronous
    /// write when the queue is full.
    fn dispatch(&self, level: Level, message: String, fields: Vec<Field>) {
        if !self.inner.enabled(level) {
            return;
        }
        let entry = Box::new(self.inner.make_entry(level, 0, message, fields));

        if self.cancelled.load(Ordering::Acquire) {
            self.inner.write_entry(&entry);
            return;
        }
        match self.tx.try_send(entry) {
            Ok(()) => {}
            Err(TrySendError::Full(entry)) | Err(TrySendError::Disconnected(entry)) => {
                self.inner.write_entry(&entry);
            }
        }
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

    /// Cancel delivery, drain every queued entry synchronously, and join
    /// the worker. Idempotent: a second call while already cancelled just
    /// waits for the first to finish and returns promptly. After `flush`
    /// returns, every entry enqueued before the call has been written.
    pub fn flush(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            let _ = self.cancel_tx.try_send(());
        }
        let mut worker = self.worker.lock();
        if let Some(handle) = worker.take() {
            if handle.join().is_err() {
                eprintln!("[reclog ERROR] async worker panicked during shutdown");
            }
        }
        // Entries racing with cancellation may still sit in the queue
        // after the worker exits; no entry is ever silently dropped.
        while let Ok(entry) = self.rx.try_recv() {
            self.inner.write_entry(&entry);
        }
    }

    /// [`flush`](Self::flush) with an `Ok(())` return, for symmetry with
    /// resource-cleanup conventions.
    pub fn close(&self) -> Result<()> {
        self.flush();
        Ok(())
    }

    /// Write synchronously, bypassing the queue, flush pending entries,
    /// then terminate the process. A fatal message must never be lost to
    /// an unflushed queue.
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.fatalw(message, Vec::new())
    }

    pub fn fatalw(&self, message: impl Into<String>, fields: Vec<Field>) -> ! {
        let entry = self.inner.make_entry(Level::Error, 0, message.into(), fields);
        self.inner.write_entry(&entry);
        self.flush();
        std::process::exit(1);
    }
}

impl Drop for AsyncLogger {
    fn drop(&mut self) {
        self.flush();
    }
}

impl std::fmt::Debug for AsyncLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncLogger")
            .field("inner", &self.inner)
            .field("cancelled", &self.cancelled.load(Ordering::Relaxed))
            .finish()
    }
}

/// Background worker: Running until the queue disconnects (terminate
/// immediately) or cancellation arrives, then Draining (write every
/// buffered entry FIFO through the wrapped logger), then Stopped.
fn worker_loop(rx: Receiver<Box<Entry>>, cancel_rx: Receiver<()>, writer: Logger) {
    loop {
        select! {
            recv(rx) -> msg => match msg {
                Ok(entry) => writer.write_entry(&entry),
                Err(_) => return,
            },
            recv(cancel_rx) -> _ => {
                while let Ok(entry) = rx.try_recv() {
                    writer.write_entry(&entry);
                }
                return;
            }
        }
    }
}
