//! Interactive input: master password, confirmations, entry fields.
//!
//! Commands only talk to the `Prompter` trait so they can be driven
//! from tests or scripts without a terminal.

use zeroize::Zeroizing;

use crate::errors::{Result, VaultError};

/// Environment variable that supplies the master password non-interactively.
pub const PASSWORD_ENV: &str = "VAULTCLI_PASSWORD";

/// Minimum master password length accepted by `init`.
const MIN_PASSWORD_LEN: usize = 8;

/// Source of user input for commands.
pub trait Prompter {
    /// Master password for an existing vault.
    fn master_password(&self) -> Result<Zeroizing<String>>;

    /// New master password for `init` (asked twice, length-checked).
    fn new_master_password(&self) -> Result<Zeroizing<String>>;

    /// Yes/no question.
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Visible single-line input.
    fn text(&self, label: &str) -> Result<String>;

    /// Hidden single-line input.
    fn secret(&self, label: &str) -> Result<Zeroizing<String>>;
}

/// `Prompter` backed by the terminal via `dialoguer`.
///
/// `VAULTCLI_PASSWORD` takes precedence over the master password
/// prompts (CI / scripted use).
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn password_from_env() -> Option<Zeroizing<String>> {
        match std::env::var(PASSWORD_ENV) {
            Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
            _ => None,
        }
    }
}

impl Prompter for TerminalPrompter {
    fn master_password(&self) -> Result<Zeroizing<String>> {
        if let Some(pw) = Self::password_from_env() {
            return Ok(pw);
        }
        self.secret("Master password")
    }

    fn new_master_password(&self) -> Result<Zeroizing<String>> {
        if let Some(pw) = Self::password_from_env() {
            check_new_password(&pw)?;
            return Ok(pw);
        }

        loop {
            let password = Zeroizing::new(
                dialoguer::Password::new()
                    .with_prompt("Choose master password")
                    .with_confirmation(
                        "Confirm master password",
                        "Passwords do not match, try again",
                    )
                    .interact()
                    .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?,
            );

            if let Err(e) = check_new_password(&password) {
                super::output::warning(&format!("{e}. Try again."));
                continue;
            }

            return Ok(password);
        }
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))
    }

    fn text(&self, label: &str) -> Result<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(label)
            .interact_text()
            .map(|s| s.trim().to_string())
            .map_err(|e| VaultError::CommandFailed(format!("input prompt: {e}")))
    }

    fn secret(&self, label: &str) -> Result<Zeroizing<String>> {
        dialoguer::Password::new()
            .with_prompt(label)
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))
    }
}

/// Enforce the minimum master password length.
pub fn check_new_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(VaultError::InvalidInput(format!(
            "master password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
