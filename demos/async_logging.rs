//! Async logging example
//!
//! Demonstrates non-blocking delivery with multi-threaded producers and an
//! explicit flush before exit.
//!
//! Run with: cargo run --example async_logging

use reclog::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Reclog - Async Logging Example ===\n");

    let logger = Logger::new(Config {
        level: "info".to_string(),
        encoding: "json".to_string(),
        output_paths: vec!["stdout".to_string(), "async_demo.log".to_string()],
        ..Config::default()
    });
    let async_logger = Arc::new(AsyncLogger::new(logger, 1000));

    println!("1. Non-blocking logging:");
    for i in 0..100 {
        async_logger.info(format!("Message #{}", i));
    }
    println!("   Enqueued 100 messages without blocking");

    println!("\n2. Multi-threaded producers:");
    let mut handles = vec![];
    for thread_id in 0..5 {
        let async_logger = Arc::clone(&async_logger);
        let handle = thread::spawn(move || {
            for i in 0..20 {
                async_logger.info(format!("Thread {} - Message {}", thread_id, i));
            }
        });
        handles.push(handle);
    }
    for handle in handles {
        handle.join().expect("producer thread panicked");
    }

    println!("\n3. Draining the queue:");
    async_logger.flush();
    println!("   All pending entries written");

    println!("\n=== Example completed successfully! ===");
}
