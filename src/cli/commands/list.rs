//! `vaultcli list`: display all entries in a table.

use crate::cli::{output, Context};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let password = ctx.prompter.master_password()?;
    let entries = ctx.store.list(password.as_bytes())?;

    output::info(&format!(
        "{} — {} entr{}",
        ctx.store.path().display(),
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    ));

    output::print_entries_table(&entries);

    Ok(())
}
