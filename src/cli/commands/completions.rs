//! `vaultcli completions <shell>`: print a shell completion script.
//!
//!   vaultcli completions bash > ~/.local/share/bash-completion/completions/vaultcli

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut io::stdout())
}

fn write_script(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "vaultcli", out);
    out.flush()?;
    Ok(())
}
