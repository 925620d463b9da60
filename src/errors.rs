use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in vaultcli.
///
/// Messages may name paths and entry names, but never a password,
/// master secret, key or decrypted payload.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Wrong master password or corrupted vault")]
    WrongPasswordOrCorrupt,

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Entry '{0}' already exists (delete it first to replace it)")]
    DuplicateName(String),

    // --- Input errors ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Stable classification of a [`VaultError`].
///
/// Callers match on the kind instead of the variant so that new
/// variants can be added without breaking them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    /// A vault file or an entry is missing.
    NotFound,
    WrongPasswordOrCorrupt,
    Format,
    DuplicateName,
    Io,
    Crypto,
    InvalidInput,
    Config,
    Cancelled,
}

impl VaultError {
    /// Returns the stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EncryptionFailed(_) | Self::KeyDerivationFailed(_) => ErrorKind::Crypto,
            Self::WrongPasswordOrCorrupt => ErrorKind::WrongPasswordOrCorrupt,
            Self::VaultNotFound(_) | Self::EntryNotFound(_) => ErrorKind::NotFound,
            Self::VaultAlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::InvalidVaultFormat(_) | Self::SerializationError(_) => ErrorKind::Format,
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::InvalidInput(_) | Self::CommandFailed(_) => ErrorKind::InvalidInput,
            Self::ConfigError(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
            Self::UserCancelled => ErrorKind::Cancelled,
        }
    }
}

/// Convenience type alias for vaultcli results.
pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vault_and_missing_entry_share_a_kind() {
        let vault = VaultError::VaultNotFound(PathBuf::from("vault.enc"));
        let entry = VaultError::EntryNotFound("github".into());
        assert_eq!(vault.kind(), ErrorKind::NotFound);
        assert_eq!(entry.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn io_errors_convert() {
        let err: VaultError = std::io::Error::other("disk full").into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn auth_failure_message_does_not_attribute_cause() {
        let msg = VaultError::WrongPasswordOrCorrupt.to_string();
        assert!(msg.contains("Wrong master password"));
        assert!(msg.contains("corrupted"));
    }
}
