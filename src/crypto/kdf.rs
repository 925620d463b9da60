//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is a fixed constant: every vault is derived with
//! the same 200 000 rounds, so nothing about the KDF is stored on disk
//! except the salt.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Result, VaultError};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 rounds used for every vault.
pub const PBKDF2_ITERATIONS: u32 = 200_000;

/// A 256-bit key derived from the master secret.
///
/// The bytes are wiped when the value is dropped.  There is no way to
/// serialize it; it only ever lives for the duration of one operation.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(<redacted>)")
    }
}

/// Derive the vault key from `secret` and `salt` with the fixed
/// iteration count.
pub fn derive_key(secret: &[u8], salt: &[u8]) -> Result<DerivedKey> {
    derive_key_with_iterations(secret, salt, PBKDF2_ITERATIONS)
}

/// Derive a 32-byte key with an explicit PBKDF2 round count.
///
/// The same secret + salt + iterations always produce the same key.
pub fn derive_key_with_iterations(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<DerivedKey> {
    if secret.is_empty() {
        return Err(VaultError::KeyDerivationFailed(
            "master password cannot be empty".into(),
        ));
    }
    if salt.len() < SALT_LEN {
        return Err(VaultError::KeyDerivationFailed(format!(
            "salt must be at least {SALT_LEN} bytes (got {})",
            salt.len()
        )));
    }
    if iterations == 0 {
        return Err(VaultError::KeyDerivationFailed(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(secret, salt, iterations, &mut key);
    let derived = DerivedKey::from_bytes(key);
    key.zeroize();

    Ok(derived)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}
