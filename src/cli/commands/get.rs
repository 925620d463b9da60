//! `vaultcli get`: show a single entry.

use console::style;

use crate::cli::Context;
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(ctx: &Context, name: &str, show: bool) -> Result<()> {
    let password = ctx.prompter.master_password()?;
    let entry = ctx.store.get(password.as_bytes(), name)?;

    println!("{} {}", style("name:").bold(), entry.name);
    println!("{} {}", style("username:").bold(), entry.username);
    if show {
        println!("{} {}", style("password:").bold(), entry.password);
    } else {
        println!(
            "{} {}",
            style("password:").bold(),
            style(format!("<hidden, {} chars; use --show>", entry.password.chars().count())).dim()
        );
    }

    Ok(())
}
