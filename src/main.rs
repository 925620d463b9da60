use clap::Parser;
use tracing_subscriber::EnvFilter;
use vaultcli::cli::prompt::TerminalPrompter;
use vaultcli::cli::{output, Cli, Context};

/// Environment variable holding a `tracing` filter (e.g. `debug`).
const LOG_ENV: &str = "VAULTCLI_LOG";

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for `get` / `generate`.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let prompter = TerminalPrompter;
    let result = Context::from_cli(&cli, &prompter).and_then(|ctx| cli.command.run(&ctx));

    if let Err(e) = result {
        tracing::debug!(kind = ?e.kind(), "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
