//! Vault module: encrypted credential storage.
//!
//! This module provides:
//! - `Entry` and `EntryCollection`, the decrypted payload (`entry`)
//! - The on-disk container and atomic replace (`format`)
//! - High-level `VaultStore` for creating, opening, and managing vaults (`store`)

pub mod entry;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Credential, Entry, EntryCollection, EntrySummary};
pub use format::VaultFile;
pub use store::VaultStore;
