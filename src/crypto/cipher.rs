//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! hands it back next to the ciphertext; the caller stores both.
//! `decrypt` either returns the full plaintext or fails with
//! `WrongPasswordOrCorrupt`, never anything in between.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm};

use super::kdf::DerivedKey;
use crate::errors::{Result, VaultError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// A 96-bit GCM nonce.
pub type Nonce = [u8; NONCE_LEN];

/// Encrypt `plaintext` under `key` with a freshly generated nonce.
///
/// Returns `(nonce, ciphertext || tag)`.
pub fn encrypt(plaintext: &[u8], key: &DerivedKey) -> Result<(Nonce, Vec<u8>)> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    nonce_bytes.copy_from_slice(&nonce);
    Ok((nonce_bytes, ciphertext))
}

/// Decrypt and authenticate data produced by `encrypt`.
///
/// A wrong key and a tampered ciphertext are indistinguishable here;
/// both come back as `WrongPasswordOrCorrupt`.
pub fn decrypt(nonce: &Nonce, ciphertext: &[u8], key: &DerivedKey) -> Result<Vec<u8>> {
    if ciphertext.len() < TAG_LEN {
        return Err(VaultError::WrongPasswordOrCorrupt);
    }

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| VaultError::WrongPasswordOrCorrupt)?;

    cipher
        .decrypt(aes_gcm::Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| VaultError::WrongPasswordOrCorrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn key(byte: u8) -> DerivedKey {
        DerivedKey::from_bytes([byte; 32])
    }

    #[test]
    fn ciphertext_carries_tag() {
        let (_, ct) = encrypt(b"abc", &key(1)).unwrap();
        assert_eq!(ct.len(), 3 + TAG_LEN);
    }

    #[test]
    fn empty_plaintext_roundtrips() {
        let k = key(2);
        let (nonce, ct) = encrypt(b"", &k).unwrap();
        assert_eq!(decrypt(&nonce, &ct, &k).unwrap(), b"");
    }

    #[test]
    fn short_ciphertext_is_rejected() {
        let err = decrypt(&[0u8; NONCE_LEN], &[0u8; TAG_LEN - 1], &key(3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongPasswordOrCorrupt);
    }

    #[test]
    fn wrong_nonce_fails() {
        let k = key(4);
        let (mut nonce, ct) = encrypt(b"payload", &k).unwrap();
        nonce[0] ^= 0x01;
        assert!(decrypt(&nonce, &ct, &k).is_err());
    }
}
