//! Basic logger usage example
//!
//! Demonstrates synchronous logging, logger branching, and field redaction.
//!
//! Run with: cargo run --example basic_usage

use reclog::prelude::*;
use reclog::fields;
use serde_json::Value;

struct User {
    name: String,
    password: String,
    token: String,
}

impl Redact for User {
    fn redact(&self, masker: &Masker) -> Value {
        RedactedRecord::new(masker)
            .field("name", &self.name)
            .masked("token", &self.token)
            .finish()
    }
}

fn main() {
    println!("=== Reclog - Basic Usage Example ===\n");

    let logger = Logger::new(Config {
        level: "debug".to_string(),
        encoding: "console".to_string(),
        is_development: true,
        ..Config::default()
    });

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Structured fields and branching:");
    let api_logger = logger.with(fields! { "component" => "api" });
    api_logger.infow("request handled", fields! { "status" => 200, "ms" => 12 });

    println!("\n3. Redacted structured values:");
    let user = User {
        name: "John".to_string(),
        password: "secret".to_string(),
        token: "abc".to_string(),
    };
    logger.infow("user created", fields! { "user" => logger.redacted(&user) });

    println!("\n=== Example completed successfully! ===");
}
