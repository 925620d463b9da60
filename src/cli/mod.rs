//! CLI module: Clap argument parser, prompts, output helpers, and command implementations.

pub mod commands;
pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::errors::Result;
use crate::vault::VaultStore;

use prompt::Prompter;

/// vaultcli: local encrypted credential vault.
#[derive(Parser)]
#[command(
    name = "vaultcli",
    about = "Local encrypted credential vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: vault_path from .vaultcli.toml, else vault.enc)
    #[arg(long, env = "VAULTCLI_PATH", global = true)]
    pub path: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize a new encrypted vault
    Init,

    /// Add a new entry to the vault
    Add {
        /// Entry name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,
        /// Username for the entry (prompted if omitted)
        #[arg(long)]
        username: Option<String>,
        /// Password for the entry (a generated one is offered if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Show a single entry
    Get {
        /// Entry name
        name: String,
        /// Also print the password
        #[arg(long)]
        show: bool,
    },

    /// List all entries
    List,

    /// Delete an entry
    Delete {
        /// Entry name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password (does not touch the vault)
    Generate {
        /// Password length (default: password_length from config, else 16)
        #[arg(short, long)]
        length: Option<usize>,
        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,
        /// Exclude digits
        #[arg(long)]
        no_digits: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Everything a command handler needs: the vault it works on, the
/// loaded settings and where to ask the user for input.
pub struct Context<'a> {
    pub store: VaultStore,
    pub settings: Settings,
    pub prompter: &'a dyn Prompter,
}

impl<'a> Context<'a> {
    /// Build the context for `cli`, resolving the vault path against
    /// the current directory and `.vaultcli.toml`.
    pub fn from_cli(cli: &Cli, prompter: &'a dyn Prompter) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load(&cwd)?;
        let path = settings.resolve_vault_path(&cwd, cli.path.as_deref());

        Ok(Self {
            store: VaultStore::new(path),
            settings,
            prompter,
        })
    }
}

impl Commands {
    /// Dispatch to the handler for this command.
    pub fn run(&self, ctx: &Context) -> Result<()> {
        match self {
            Self::Init => commands::init::execute(ctx),
            Self::Add {
                name,
                username,
                password,
            } => commands::add::execute(
                ctx,
                name.as_deref(),
                username.as_deref(),
                password.as_deref(),
            ),
            Self::Get { name, show } => commands::get::execute(ctx, name, *show),
            Self::List => commands::list::execute(ctx),
            Self::Delete { name, force } => commands::delete::execute(ctx, name, *force),
            Self::Generate {
                length,
                no_symbols,
                no_upper,
                no_digits,
            } => commands::generate::execute(ctx, *length, !*no_symbols, !*no_upper, !*no_digits),
            Self::Completions { shell } => commands::completions::execute(*shell),
        }
    }
}
