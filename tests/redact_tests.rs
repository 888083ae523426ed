//! Integration tests for field redaction
//!
//! These tests verify:
//! - Omitted fields never reach the output, recursively
//! - Placeholder masking without a key
//! - Reversible masking round-trip with a key
//! - Redacted records flowing through the logging pipeline

use reclog::{fields, Config, Logger, Masker, Redact, RedactedRecord, MASK_PLACEHOLDER};
use serde_json::Value;

const MASK_KEY: &str = "an-example-key-of-32-bytes-len!!";

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
            // password is never declared
            .finish()
    }
}

struct Session {
    id: u64,
    user: User,
    previous: Option<User>,
}

impl Redact for Session {
    fn redact(&self, masker: &Masker) -> Value {
        RedactedRecord::new(masker)
            .field("id", &self.id)
            .nested("user", &self.user)
            .nested_opt("previous", self.previous.as_ref())
            .finish()
    }
}

fn sample_user() -> User {
    User {
        name: "John".to_string(),
        password: "secret".to_string(),
        token: "abc".to_string(),
    }
}

fn memory_logger(mask_key: &str) -> Logger {
    Logger::new(Config {
        level: "info".to_string(),
        encoding: "json".to_string(),
        disable_caller: true,
        disable_stacktrace: true,
        output_paths: vec!["memory".to_string()],
        mask_key: mask_key.to_string(),
        ..Config::default()
    })
}

#[test]
fn test_logged_user_without_mask_key() {
    // {Name:"John", Password:"secret" omit, Token:"abc" mask} with no mask
    // key: output contains John, never secret, and token is the literal
    // placeholder.
    let logger = memory_logger("");
    let user = sample_user();
    logger.infow("login", fields! { "user" => logger.redacted(&user) });

    let contents = logger.memory_buffer().unwrap().contents();
    assert!(contents.contains("John"));
    assert!(!contents.contains("secret"));
    assert!(contents.contains("\"token\":\"***\""));
}

#[test]
fn test_mask_round_trip_through_log_line() {
    let logger = memory_logger(MASK_KEY);
    let user = sample_user();
    logger.infow("login", fields! { "user" => logger.redacted(&user) });

    let contents = logger.memory_buffer().unwrap().contents();
    assert!(!contents.contains("\"token\":\"abc\""));

    let parsed: Value = serde_json::from_str(contents.trim()).unwrap();
    let token = parsed["user"]["token"].as_str().unwrap();
    assert_ne!(token, MASK_PLACEHOLDER);
    assert_eq!(logger.masker().unmask(token).unwrap(), "abc");
}

#[test]
fn test_masking_without_key_is_irreversible() {
    let masker = Masker::new("");
    assert_eq!(masker.mask("anything"), MASK_PLACEHOLDER);
    assert!(masker.unmask(MASK_PLACEHOLDER).is_err());
}

#[test]
fn test_omission_is_recursive() {
    let logger = memory_logger("");
    let session = Session {
        id: 7,
        user: sample_user(),
        previous: Some(User {
            name: "Jane".to_string(),
            password: "older-secret".to_string(),
            token: "xyz".to_string(),
        }),
    };
    logger.infow("resumed", fields! { "session" => logger.redacted(&session) });

    let contents = logger.memory_buffer().unwrap().contents();
    assert!(contents.contains("John"));
    assert!(contents.contains("Jane"));
    assert!(!contents.contains("secret"));
    assert!(!contents.contains("older-secret"));
}

#[test]
fn test_absent_nested_value_is_explicit_null() {
    let logger = memory_logger("");
    let session = Session {
        id: 9,
        user: sample_user(),
        previous: None,
    };
    logger.infow("started", fields! { "session" => logger.redacted(&session) });

    let contents = logger.memory_buffer().unwrap().contents();
    let parsed: Value = serde_json::from_str(contents.trim()).unwrap();
    assert_eq!(parsed["session"]["previous"], Value::Null);
}

#[test]
fn test_invalid_key_degrades_to_placeholder() {
    let logger = memory_logger("way-too-short");
    let user = sample_user();
    logger.infow("login", fields! { "user" => logger.redacted(&user) });

    let contents = logger.memory_buffer().unwrap().contents();
    assert!(contents.contains("\"token\":\"***\""));
    assert!(!contents.contains("abc"));
}

#[test]
fn test_plain_values_pass_through_unmodified() {
    let logger = memory_logger(MASK_KEY);
    logger.infow("plain", fields! { "count" => 3, "name" => "visible" });

    let contents = logger.memory_buffer().unwrap().contents();
    assert!(contents.contains("\"count\":3"));
    assert!(contents.contains("\"name\":\"visible\""));
}
