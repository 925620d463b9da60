use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};
use crate::generator::GeneratorOptions;

/// Project-level configuration, loaded from `.vaultcli.toml`.
///
/// Every field has a sensible default so vaultcli works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Vault file used when `--path` is not given.
    #[serde(default = "default_vault_path")]
    pub vault_path: String,

    /// Length of suggested passwords (default: 16).
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Whether suggested passwords include symbols (default: true).
    #[serde(default = "default_password_symbols")]
    pub password_symbols: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_path() -> String {
    "vault.enc".to_string()
}

fn default_password_length() -> usize {
    16
}

fn default_password_symbols() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_path: default_vault_path(),
            password_length: default_password_length(),
            password_symbols: default_password_symbols(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".vaultcli.toml";

    /// Load settings from `<project_dir>/.vaultcli.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Resolve the vault file: an explicit path wins over the config.
    ///
    /// Relative paths are taken relative to `project_dir`.
    pub fn resolve_vault_path(&self, project_dir: &Path, explicit: Option<&Path>) -> PathBuf {
        let path = explicit.unwrap_or_else(|| Path::new(&self.vault_path));
        project_dir.join(path)
    }

    /// Generator options for suggested passwords.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            length: self.password_length,
            symbols: self.password_symbols,
            ..GeneratorOptions::default()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.vault_path, "vault.enc");
        assert_eq!(s.password_length, 16);
        assert!(s.password_symbols);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_path, "vault.enc");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_path = "secrets/personal.enc"
password_length = 24
password_symbols = false
"#;
        fs::write(tmp.path().join(".vaultcli.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_path, "secrets/personal.enc");
        assert_eq!(settings.password_length, 24);
        assert!(!settings.password_symbols);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".vaultcli.toml"), "password_length = 32\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.password_length, 32);
        // Rest should be defaults
        assert_eq!(settings.vault_path, "vault.enc");
        assert!(settings.password_symbols);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".vaultcli.toml"), "not valid {{toml").unwrap();

        let err = Settings::load(tmp.path()).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::Config);
    }

    #[test]
    fn explicit_path_wins() {
        let s = Settings::default();
        let project = Path::new("/home/user");
        assert_eq!(
            s.resolve_vault_path(project, None),
            PathBuf::from("/home/user/vault.enc")
        );
        assert_eq!(
            s.resolve_vault_path(project, Some(Path::new("other.enc"))),
            PathBuf::from("/home/user/other.enc")
        );
        assert_eq!(
            s.resolve_vault_path(project, Some(Path::new("/tmp/abs.enc"))),
            PathBuf::from("/tmp/abs.enc")
        );
    }

    #[test]
    fn generator_options_follow_settings() {
        let s = Settings {
            password_length: 30,
            password_symbols: false,
            ..Settings::default()
        };
        let opts = s.generator_options();
        assert_eq!(opts.length, 30);
        assert!(!opts.symbols);
        assert!(opts.digits);
    }
}
