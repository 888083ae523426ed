//! Reversible field masking
//!
//! AES-256-GCM with a fresh random 96-bit nonce per call; the token is the
//! base64 encoding of `nonce ‖ ciphertext`. Without a key (or with unusable
//! key material) masking degrades to a constant placeholder: a field being
//! masked is by definition sensitive and must never fail open into
//! plaintext.

use crate::core::error::{LogError, Result};
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{thread_rng, RngCore};

/// Irreversible mask token used when no usable key is configured.
pub const MASK_PLACEHOLDER: &str = "***";

/// Nonce size in bytes (96 bits for AES-GCM)
const NONCE_SIZE: usize = 12;

/// Authentication tag size in bytes (128 bits)
const TAG_SIZE: usize = 16;

/// Key size in bytes (256 bits for AES-256)
pub const KEY_SIZE: usize = 32;

pub struct Masker {
    cipher: Option<Aes256Gcm>,
}

impl Masker {
    /// Build a masker from raw key material. An empty key or a key of the
    /// wrong length yields a placeholder-only masker.
    pub fn new(key: &str) -> Self {
        let cipher = if key.is_empty() {
            None
        } else {
            Aes256Gcm::new_from_slice(key.as_bytes()).ok()
        };
        Self { cipher }
    }

    /// Whether tokens produced by this masker can be reversed.
    pub fn is_reversible(&self) -> bool {
        self.cipher.is_some()
    }

    /// Encrypt the plaintext representation of a field value. Any failure
    /// degrades to [`MASK_PLACEHOLDER`].
    pub fn mask(&self, plaintext: &str) -> String {
        let Some(ref cipher) = self.cipher else {
            return MASK_PLACEHOLDER.to_string();
        };

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        if thread_rng().try_fill_bytes(&mut nonce_bytes).is_err() {
            return MASK_PLACEHOLDER.to_string();
        }
        let nonce = Nonce::from_slice(&nonce_bytes);

        match cipher.encrypt(nonce, plaintext.as_bytes()) {
            Ok(ciphertext) => {
                let mut payload = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
                payload.extend_from_slice(&nonce_bytes);
                payload.extend_from_slice(&ciphertext);
                BASE64.encode(payload)
            }
            Err(_) => MASK_PLACEHOLDER.to_string(),
        }
    }

    /// Reverse a token produced by [`mask`](Self::mask). Requires the same
    /// key the token was produced with.
    pub fn unmask(&self, token: &str) -> Result<String> {
        let cipher = self
            .cipher
            .as_ref()
            .ok_or_else(|| LogError::unmask("no mask key configured"))?;

        let payload = BASE64
            .decode(token)
            .map_err(|e| LogError::unmask(format!("invalid base64: {}", e)))?;
        if payload.len() < NONCE_SIZE + TAG_SIZE {
            return Err(LogError::unmask("token too short"));
        }

        let nonce = Nonce::from_slice(&payload[..NONCE_SIZE]);
        let plaintext = cipher
            .decrypt(nonce, &payload[NONCE_SIZE..])
            .map_err(|e| LogError::unmask(format!("authentication failed: {}", e)))?;
        String::from_utf8(plaintext).map_err(|e| LogError::unmask(e.to_string()))
    }
}

impl std::fmt::Debug for Masker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Masker")
            .field("reversible", &self.is_reversible())
            .finish()
    }
}
