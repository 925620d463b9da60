//! `vaultcli init`: create a new, empty encrypted vault.

use crate::cli::{output, Context};
use crate::errors::{Result, VaultError};

/// Execute the `init` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let path = ctx.store.path();

    // Check before prompting so the user isn't asked for nothing.
    if ctx.store.exists() {
        output::tip("Use `vaultcli add` to add entries to the existing vault.");
        return Err(VaultError::VaultAlreadyExists(path.to_path_buf()));
    }

    let password = ctx.prompter.new_master_password()?;
    ctx.store.initialize(password.as_bytes())?;

    output::success(&format!("Initialized encrypted vault at {}", path.display()));
    output::tip("Run `vaultcli add` to add an entry.");
    output::tip("Run `vaultcli list` to see all entries.");

    Ok(())
}
