//! Decrypted in-memory entries.
//!
//! `EntryCollection` is the plaintext payload of a vault: an ordered
//! map of entry name to credential.  It serializes to a JSON object
//! whose key order is insertion order, so `list` output is stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Result, VaultError};

/// Longest entry name we accept.
const MAX_NAME_LEN: usize = 256;

/// The stored part of an entry: what the name maps to.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A single decrypted entry.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl Entry {
    pub fn new(name: &str, username: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Summary of this entry without the password itself.
    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            name: self.name.clone(),
            username: self.username.clone(),
            password_len: self.password.chars().count(),
        }
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What `list` surfaces by default: no raw password, only its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub name: String,
    pub username: String,
    pub password_len: usize,
}

/// Ordered map of entry name -> credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: IndexMap<String, Credential>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry.  Fails with `DuplicateName` if the name is
    /// already taken; existing entries are never overwritten.
    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        validate_name(&entry.name)?;
        if self.entries.contains_key(&entry.name) {
            return Err(VaultError::DuplicateName(entry.name.clone()));
        }

        self.entries.insert(
            entry.name.clone(),
            Credential {
                username: entry.username.clone(),
                password: entry.password.clone(),
            },
        );
        Ok(())
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Result<Entry> {
        self.entries
            .get(name)
            .map(|c| Entry::new(name, &c.username, &c.password))
            .ok_or_else(|| VaultError::EntryNotFound(name.to_string()))
    }

    /// Remove an entry, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Result<Entry> {
        self.entries
            .shift_remove(name)
            .map(|c| Entry::new(name, &c.username, &c.password))
            .ok_or_else(|| VaultError::EntryNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .map(|(name, c)| Entry::new(name, &c.username, &c.password))
            .collect()
    }

    /// Name, username and password length of every entry, in insertion order.
    pub fn summaries(&self) -> Vec<EntrySummary> {
        self.entries
            .iter()
            .map(|(name, c)| EntrySummary {
                name: name.clone(),
                username: c.username.clone(),
                password_len: c.password.chars().count(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate that an entry name is usable as a key.
///
/// Must be non-blank, at most 256 characters and free of control
/// characters.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(VaultError::InvalidInput("entry name cannot be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(VaultError::InvalidInput(format!(
            "entry name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(VaultError::InvalidInput(
            "entry name cannot contain control characters".into(),
        ));
    }
    Ok(())
}
