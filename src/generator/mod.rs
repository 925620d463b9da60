//! Random password generation.
//!
//! Passwords are drawn uniformly from the union of the enabled
//! character classes using the thread-local CSPRNG.  The entropy figure
//! is advisory only: `length * log2(alphabet size)`.

use rand::Rng;

use crate::errors::{Result, VaultError};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>/?";

/// Shortest password `generate` will produce.
pub const MIN_LENGTH: usize = 4;

/// Which character classes to draw from, and how many characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl GeneratorOptions {
    /// The alphabet these options select.
    pub fn charset(&self) -> Vec<char> {
        let mut set = String::new();
        if self.lowercase {
            set.push_str(LOWERCASE);
        }
        if self.uppercase {
            set.push_str(UPPERCASE);
        }
        if self.digits {
            set.push_str(DIGITS);
        }
        if self.symbols {
            set.push_str(SYMBOLS);
        }
        set.chars().collect()
    }
}

/// A generated password and its estimated entropy in bits.
#[derive(Clone)]
pub struct GeneratedPassword {
    pub password: zeroize::Zeroizing<String>,
    pub entropy_bits: f64,
}

/// Generate a random password.
pub fn generate(options: &GeneratorOptions) -> Result<GeneratedPassword> {
    if options.length < MIN_LENGTH {
        return Err(VaultError::InvalidInput(format!(
            "password length must be at least {MIN_LENGTH}"
        )));
    }

    let charset = options.charset();
    if charset.is_empty() {
        return Err(VaultError::InvalidInput(
            "at least one character class must be enabled".into(),
        ));
    }

    let mut rng = rand::rng();
    let password: String = (0..options.length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect();

    Ok(GeneratedPassword {
        password: zeroize::Zeroizing::new(password),
        entropy_bits: entropy_bits(charset.len(), options.length),
    })
}

/// Entropy estimate for a uniformly random string: `length * log2(alphabet)`.
pub fn entropy_bits(alphabet_size: usize, length: usize) -> f64 {
    if alphabet_size == 0 || length == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}
