//! LoRa encryption key generation.
//!
//! Sender and receiver share a 32-byte secret that is configured as
//! `LORA_ENCRYPT_KEY` in both `config.h` files, written as URL-safe base64
//! without padding. Every run of the key-rotating converter draws a fresh
//! key; nothing is derived from the input and nothing is stored.
//!
//! # Examples
//!
//! ```
//! use lora_codegen::keygen::{decode_lora_key, generate_lora_key};
//! use secrecy::ExposeSecret;
//!
//! let key = generate_lora_key(&mut rand::rngs::OsRng);
//! assert_eq!(key.expose_secret().len(), 43);
//! assert!(decode_lora_key(key.expose_secret()).is_ok());
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use lora_core::{Error, Result};
use rand::{CryptoRng, RngCore};
use secrecy::SecretString;
use secrecy::zeroize::Zeroize;

/// Length of the shared LoRa key in bytes.
pub const LORA_KEY_LENGTH: usize = 32;

/// Draws a new LoRa key from `rng` and returns it base64url-encoded without
/// padding.
pub fn generate_lora_key<R>(rng: &mut R) -> SecretString
where
    R: RngCore + CryptoRng,
{
    let mut key = [0u8; LORA_KEY_LENGTH];
    rng.fill_bytes(&mut key);
    let encoded = URL_SAFE_NO_PAD.encode(key);
    key.zeroize();
    SecretString::from(encoded)
}

/// Decodes a configured LoRa key, checking it is exactly
/// [`LORA_KEY_LENGTH`] bytes.
///
/// The converters never read a key back; this is a library helper for tools
/// that check an existing `LORA_ENCRYPT_KEY` before flashing it.
///
/// # Errors
///
/// Returns [`Error::ValidationError`] if `encoded` is not unpadded URL-safe
/// base64 or does not decode to 32 bytes.
pub fn decode_lora_key(encoded: &str) -> Result<[u8; LORA_KEY_LENGTH]> {
    let mut bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| Error::ValidationError {
            field: "lora_key".to_string(),
            reason: format!("Encryption key is not valid base64url: {e}"),
        })?;

    let result = <[u8; LORA_KEY_LENGTH]>::try_from(bytes.as_slice()).map_err(|_| {
        Error::ValidationError {
            field: "lora_key".to_string(),
            reason: format!(
                "Encryption key must be {LORA_KEY_LENGTH} bytes, got {}",
                bytes.len()
            ),
        }
    });
    bytes.zeroize();
    result
}
