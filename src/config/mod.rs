//! Project configuration (`.vaultcli.toml`).

pub mod settings;

pub use settings::Settings;
