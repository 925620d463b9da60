//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` wraps the container format and the crypto layer so the
//! rest of the application can work with calls like
//! `store.add(secret, Entry::new("github", "alice", "p@ss"))`.
//!
//! Every call is one full cycle: read the file, derive the key from the
//! stored salt, decrypt, (mutate, re-encrypt with a fresh nonce and
//! atomically replace the file).  Nothing is cached between calls.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::crypto::{decrypt, derive_key, encrypt, generate_salt, DerivedKey};
use crate::errors::{Result, VaultError};

use super::entry::{Entry, EntryCollection, EntrySummary};
use super::format::{self, VaultFile};

/// Handle to one vault file.  Holds no key material.
#[derive(Debug, Clone)]
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,
}

/// Key material for the duration of a single operation.
///
/// Dropping it wipes the derived key.
struct Unlocked {
    salt: Vec<u8>,
    key: DerivedKey,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Create a brand-new vault file holding an empty collection.
    ///
    /// Fails with `VaultAlreadyExists` if anything is at the path; an
    /// existing file is never modified.
    pub fn initialize(&self, secret: &[u8]) -> Result<()> {
        if self.path.exists() {
            return Err(VaultError::VaultAlreadyExists(self.path.clone()));
        }

        let salt = generate_salt();
        let unlocked = Unlocked {
            key: derive_key(secret, &salt)?,
            salt: salt.to_vec(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        self.seal(&unlocked, &EntryCollection::new())?;
        info!(path = %self.path.display(), "vault initialized");
        Ok(())
    }

    /// Decrypt the vault and return its entries.
    pub fn open(&self, secret: &[u8]) -> Result<EntryCollection> {
        let (_unlocked, collection) = self.unlock(secret)?;
        Ok(collection)
    }

    /// Re-encrypt `collection` and atomically replace the vault file.
    ///
    /// The key is re-derived from the salt already stored in the file,
    /// so the salt never changes.  The secret is checked against the
    /// current ciphertext first: a wrong secret fails with
    /// `WrongPasswordOrCorrupt` and leaves the file alone.
    pub fn persist(&self, secret: &[u8], collection: &EntryCollection) -> Result<()> {
        let (unlocked, _current) = self.unlock(secret)?;
        self.seal(&unlocked, collection)
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Add a new entry.  Fails with `DuplicateName` if the name exists,
    /// in which case the file is not rewritten.
    pub fn add(&self, secret: &[u8], entry: Entry) -> Result<()> {
        let (unlocked, mut collection) = self.unlock(secret)?;
        let name = entry.name.clone();
        collection.insert(entry)?;
        self.seal(&unlocked, &collection)?;
        info!(path = %self.path.display(), entry = %name, "entry added");
        Ok(())
    }

    /// Return one decrypted entry.
    pub fn get(&self, secret: &[u8], name: &str) -> Result<Entry> {
        self.open(secret)?.get(name)
    }

    /// Name, username and password length of every entry.
    pub fn list(&self, secret: &[u8]) -> Result<Vec<EntrySummary>> {
        Ok(self.open(secret)?.summaries())
    }

    /// Remove an entry and return it.  Fails with `EntryNotFound` if the
    /// name is missing, in which case the file is not rewritten.
    pub fn delete(&self, secret: &[u8], name: &str) -> Result<Entry> {
        let (unlocked, mut collection) = self.unlock(secret)?;
        let removed = collection.remove(name)?;
        self.seal(&unlocked, &collection)?;
        info!(path = %self.path.display(), entry = %name, "entry deleted");
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if a file exists at the vault path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Read the file, derive the key from its salt and decrypt.
    fn unlock(&self, secret: &[u8]) -> Result<(Unlocked, EntryCollection)> {
        let vault = format::read_vault(&self.path)?;
        let key = derive_key(secret, &vault.salt)?;

        let plaintext = Zeroizing::new(decrypt(&vault.nonce, &vault.ciphertext, &key)?);
        let collection: EntryCollection = serde_json::from_slice(&plaintext).map_err(|e| {
            VaultError::InvalidVaultFormat(format!(
                "decrypted payload is not an entry map (line {}, column {})",
                e.line(),
                e.column()
            ))
        })?;

        debug!(
            path = %self.path.display(),
            entries = collection.len(),
            "vault decrypted"
        );

        Ok((
            Unlocked {
                salt: vault.salt,
                key,
            },
            collection,
        ))
    }

    /// Serialize, encrypt under a fresh nonce and atomically write.
    fn seal(&self, unlocked: &Unlocked, collection: &EntryCollection) -> Result<()> {
        let plaintext = Zeroizing::new(
            serde_json::to_vec(collection)
                .map_err(|e| VaultError::SerializationError(format!("entries: {e}")))?,
        );
        let (nonce, ciphertext) = encrypt(&plaintext, &unlocked.key)?;

        let vault = VaultFile {
            salt: unlocked.salt.clone(),
            nonce,
            ciphertext,
        };
        format::write_vault(&self.path, &vault)?;

        debug!(
            path = %self.path.display(),
            entries = collection.len(),
            "vault written"
        );
        Ok(())
    }
}
