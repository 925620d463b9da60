//! `vaultcli delete`: remove an entry from the vault.

use crate::cli::{output, Context};
use crate::errors::Result;

/// Execute the `delete` command.
pub fn execute(ctx: &Context, name: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force && !ctx.prompter.confirm(&format!("Delete entry '{name}'?"), false)? {
        output::info("Cancelled.");
        return Ok(());
    }

    let password = ctx.prompter.master_password()?;
    ctx.store.delete(password.as_bytes(), name)?;

    output::success(&format!(
        "Deleted entry '{name}' from {}",
        ctx.store.path().display()
    ));

    Ok(())
}
