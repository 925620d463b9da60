//! Cryptographic primitives for vaultcli.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-GCM encryption and decryption (`cipher`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use cipher::{decrypt, encrypt, Nonce, NONCE_LEN, TAG_LEN};
pub use kdf::{
    derive_key, derive_key_with_iterations, generate_salt, DerivedKey, KEY_LEN,
    PBKDF2_ITERATIONS, SALT_LEN,
};
