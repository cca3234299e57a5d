// src/cli/mod.rs
use clap::Parser;

use crate::models::PasswordPolicy;

pub mod handlers;
pub mod menu;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Password length (6-100)
    #[arg(long, short, env = "PASSGEN_LENGTH", default_value_t = PasswordPolicy::DEFAULT_LENGTH)]
    pub length: usize,

    /// Leave digits out of the character pool
    #[arg(long)]
    pub no_digits: bool,

    /// Leave symbols out of the character pool
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy the generated password to the clipboard
    #[arg(long, short)]
    pub copy: bool,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON report instead of the bare password
    #[arg(long)]
    pub json: bool,

    /// Open the interactive menu
    #[arg(long, short)]
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn arguments_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_mirror_the_default_policy() {
        let args = Args::parse_from(["passgen"]);
        assert_eq!(args.length, PasswordPolicy::DEFAULT_LENGTH);
        assert!(!args.no_digits);
        assert!(!args.no_symbols);
        assert!(!args.copy);
        assert!(args.seed.is_none());
        assert!(!args.json);
        assert!(!args.interactive);
    }

    #[test]
    fn class_flags_and_seed_parse_together() {
        let args = Args::parse_from([
            "passgen",
            "--length",
            "20",
            "--no-digits",
            "--no-symbols",
            "--seed",
            "42",
        ]);
        assert_eq!(args.length, 20);
        assert!(args.no_digits);
        assert!(args.no_symbols);
        assert_eq!(args.seed, Some(42));
    }
}
