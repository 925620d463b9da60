//! On-disk vault container and atomic file replacement.
//!
//! A vault file is a small JSON document:
//!
//! ```text
//! {"salt":"<base64>","nonce":"<base64>","ciphertext":"<base64>"}
//! ```
//!
//! - **salt**: 16 random bytes fed to PBKDF2, fixed for the vault's life.
//! - **nonce**: the 12-byte GCM nonce used for *this* ciphertext.
//! - **ciphertext**: the encrypted entry collection with its 16-byte tag.
//!
//! Nothing in the file is plaintext; integrity comes from the GCM tag.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::{Nonce, NONCE_LEN, SALT_LEN};
use crate::errors::{Result, VaultError};

/// The persisted container, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFile {
    pub salt: Vec<u8>,
    pub nonce: Nonce,
    pub ciphertext: Vec<u8>,
}

/// Wire form of `VaultFile`: every field is base64 in JSON.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredVault {
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    salt: Vec<u8>,
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    nonce: Vec<u8>,
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    ciphertext: Vec<u8>,
}

impl VaultFile {
    /// Serialize to the JSON bytes written to disk.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let stored = StoredVault {
            salt: self.salt.clone(),
            nonce: self.nonce.to_vec(),
            ciphertext: self.ciphertext.clone(),
        };
        serde_json::to_vec_pretty(&stored)
            .map_err(|e| VaultError::SerializationError(format!("vault file: {e}")))
    }

    /// Parse and validate the JSON container.
    ///
    /// This only checks structure; it says nothing about whether the
    /// ciphertext is authentic.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let stored: StoredVault = serde_json::from_slice(data)
            .map_err(|e| VaultError::InvalidVaultFormat(format!("vault file JSON: {e}")))?;

        if stored.salt.len() < SALT_LEN {
            return Err(VaultError::InvalidVaultFormat(format!(
                "salt must be at least {SALT_LEN} bytes, got {}",
                stored.salt.len()
            )));
        }

        let nonce: Nonce = stored.nonce.as_slice().try_into().map_err(|_| {
            VaultError::InvalidVaultFormat(format!(
                "nonce must be {NONCE_LEN} bytes, got {}",
                stored.nonce.len()
            ))
        })?;

        Ok(Self {
            salt: stored.salt,
            nonce,
            ciphertext: stored.ciphertext,
        })
    }
}

/// Read and validate the vault container at `path`.
pub fn read_vault(path: &Path) -> Result<VaultFile> {
    if !path.exists() {
        return Err(VaultError::VaultNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;
    VaultFile::from_bytes(&data)
}

/// Write a vault file to disk **atomically**.
///
/// 1. Serialize the container.
/// 2. Write it to a temp file in the same directory and fsync it.
/// 3. Rename the temp file over the target path.
///
/// The rename ensures readers never see a half-written file.
pub fn write_vault(path: &Path, vault: &VaultFile) -> Result<()> {
    let buf = vault.to_bytes()?;
    let tmp_path = write_temp(path, &buf)?;
    commit_temp(&tmp_path, path)
}

/// Path of the temp file used while replacing `path`.
///
/// It sits in the same directory so the rename stays on one filesystem.
pub fn temp_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

/// First half of an atomic write: fully write and flush `data` to the
/// temp file next to `path`.  The vault itself is untouched.
pub fn write_temp(path: &Path, data: &[u8]) -> Result<PathBuf> {
    let tmp_path = temp_path(path);

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    Ok(tmp_path)
}

/// Second half of an atomic write: rename the temp file over `path`.
///
/// If the rename fails the temp file is removed and the old vault stays.
pub fn commit_temp(tmp_path: &Path, path: &Path) -> Result<()> {
    if let Err(e) = fs::rename(tmp_path, path) {
        let _ = fs::remove_file(tmp_path);
        return Err(e.into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
