//! `vaultcli add`: add a new entry to the vault.

use zeroize::Zeroizing;

use crate::cli::{output, Context};
use crate::errors::{Result, VaultError};
use crate::generator;
use crate::vault::Entry;

/// Execute the `add` command.
///
/// Missing fields are prompted for.  Without `--password` a generated
/// password is offered first.
pub fn execute(
    ctx: &Context,
    name: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let master = ctx.prompter.master_password()?;

    let name = match name {
        Some(n) => n.trim().to_string(),
        None => ctx.prompter.text("Entry name")?,
    };
    if name.is_empty() {
        return Err(VaultError::InvalidInput("entry name cannot be empty".into()));
    }

    let username = match username {
        Some(u) => u.to_string(),
        None => ctx.prompter.text("Username")?,
    };

    let entry_password = match password {
        Some(p) => {
            output::warning("Password given on the command line — it may appear in shell history.");
            Zeroizing::new(p.to_string())
        }
        None => choose_password(ctx)?,
    };

    ctx.store.add(
        master.as_bytes(),
        Entry::new(&name, &username, &entry_password),
    )?;

    output::success(&format!(
        "Added entry '{name}' to {}",
        ctx.store.path().display()
    ));

    Ok(())
}

/// Offer a generated password; fall back to a hidden prompt.
fn choose_password(ctx: &Context) -> Result<Zeroizing<String>> {
    let suggested = generator::generate(&ctx.settings.generator_options())?;
    output::info(&format!(
        "Suggested password (entropy {:.1} bits): {}",
        suggested.entropy_bits,
        suggested.password.as_str()
    ));

    if ctx.prompter.confirm("Use suggested password?", true)? {
        Ok(suggested.password)
    } else {
        ctx.prompter.secret("Entry password")
    }
}
