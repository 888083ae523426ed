//! Per-field redaction of structured values
//!
//! A value opts into sanitized logging by implementing [`Redact`] and
//! assembling its own representation through [`RedactedRecord`]. The
//! builder carries the policy vocabulary: `field` includes a value as-is,
//! `masked` substitutes an encrypted token, `nested` recurses into another
//! redactable value, and anything not declared is omitted. Sensitive data
//! therefore cannot leak through a forgotten annotation: the default for an
//! undeclared field is omission, not inclusion.
//!
//! ```
//! use reclog::redact::{Masker, Redact, RedactedRecord};
//! use serde_json::Value;
//!
//! struct User {
//!     name: String,
//!     password: String,
//!     token: String,
//! }
//!
//! impl Redact for User {
//!     fn redact(&self, masker: &Masker) -> Value {
//!         RedactedRecord::new(masker)
//!             .field("name", &self.name)
//!             .masked("token", &self.token)
//!             // password stays out entirely
//!             .finish()
//!     }
//! }
//!
//! let masker = Masker::new("");
//! let value = User {
//!     name: "John".into(),
//!     password: "secret".into(),
//!     token: "abc".into(),
//! }
//! .redact(&masker);
//! assert_eq!(value["name"], "John");
//! assert_eq!(value["token"], "***");
//! assert!(value.get("password").is_none());
//! ```

pub mod mask;

pub use mask::{Masker, KEY_SIZE, MASK_PLACEHOLDER};

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Capability of producing a sanitized representation of oneself.
pub trait Redact {
    fn redact(&self, masker: &Masker) -> Value;
}

/// Builder for one sanitized record.
pub struct RedactedRecord<'a> {
    masker: &'a Masker,
    map: Map<String, Value>,
}

impl<'a> RedactedRecord<'a> {
    pub fn new(masker: &'a Masker) -> Self {
        Self {
            masker,
            map: Map::new(),
        }
    }

    /// Include a field as-is. A value that fails to serialize is skipped;
    /// `None` serializes to an explicit null.
    #[must_use]
    pub fn field<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.map.insert(key.to_string(), v);
        }
        self
    }

    /// Replace the field value with an encrypted token (or the placeholder
    /// when masking is not reversible).
    #[must_use]
    pub fn masked(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.map.insert(
            key.to_string(),
            Value::String(self.masker.mask(&value.to_string())),
        );
        self
    }

    /// Recurse into a nested redactable value.
    #[must_use]
    pub fn nested<T: Redact + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.map.insert(key.to_string(), value.redact(self.masker));
        self
    }

    /// Recurse into an optional nested value; `None` becomes an explicit
    /// null rather than being omitted.
    #[must_use]
    pub fn nested_opt<T: Redact>(mut self, key: &str, value: Option<&T>) -> Self {
        let v = value.map(|v| v.redact(self.masker)).unwrap_or(Value::Null);
        self.map.insert(key.to_string(), v);
        self
    }

    pub fn finish(self) -> Value {
        Value::Object(self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card {
        brand: String,
        number: String,
    }

    impl Redact for Card {
        fn redact(&self, masker: &Masker) -> Value {
            RedactedRecord::new(masker)
                .field("brand", &self.brand)
                .masked("number", &self.number)
                .finish()
        }
    }

    struct Account {
        email: String,
        password: String,
        card: Option<Card>,
    }

    impl Redact for Account {
        fn redact(&self, masker: &Masker) -> Value {
            RedactedRecord::new(masker)
                .field("email", &self.email)
                .nested_opt("card", self.card.as_ref())
                .finish()
        }
    }

    #[test]
    fn test_undeclared_fields_are_omitted() {
        let account = Account {
            email: "a@b.c".to_string(),
            password: "hunter2".to_string(),
            card: None,
        };
        let value = account.redact(&Masker::new(""));
        assert!(value.get("password").is_none());
        assert!(!value.to_string().contains("hunter2"));
    }

    #[test]
    fn test_none_becomes_explicit_null() {
        let account = Account {
            email: "a@b.c".to_string(),
            password: String::new(),
            card: None,
        };
        let value = account.redact(&Masker::new(""));
        assert_eq!(value["card"], Value::Null);
    }

    #[test]
    fn test_nested_recursion_masks() {
        let account = Account {
            email: "a@b.c".to_string(),
            password: String::new(),
            card: Some(Card {
                brand: "visa".to_string(),
                number: "4111".to_string(),
            }),
        };
        let value = account.redact(&Masker::new(""));
        assert_eq!(value["card"]["brand"], "visa");
        assert_eq!(value["card"]["number"], MASK_PLACEHOLDER);
    }

    #[test]
    fn test_option_field_serializes_to_null() {
        let missing: Option<String> = None;
        let value = RedactedRecord::new(&Masker::new(""))
            .field("missing", &missing)
            .finish();
        assert_eq!(value["missing"], Value::Null);
    }
}
