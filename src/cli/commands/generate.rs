//! `vaultcli generate`: print a random password and its entropy.

use crate::cli::Context;
use crate::errors::Result;
use crate::generator::{self, GeneratorOptions};

/// Execute the `generate` command.
pub fn execute(
    ctx: &Context,
    length: Option<usize>,
    symbols: bool,
    uppercase: bool,
    digits: bool,
) -> Result<()> {
    let defaults = ctx.settings.generator_options();
    let options = GeneratorOptions {
        length: length.unwrap_or(defaults.length),
        lowercase: true,
        uppercase,
        digits,
        symbols: symbols && defaults.symbols,
    };

    let generated = generator::generate(&options)?;
    println!("{}", generated.password.as_str());
    println!("Estimated entropy: {:.1} bits", generated.entropy_bits);

    Ok(())
}
