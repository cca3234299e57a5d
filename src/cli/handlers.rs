// src/cli/handlers.rs
use anyhow::Result;
use log::{debug, warn};
use serde::Serialize;

use crate::cli::Args;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::generator::{self, random_source};
use crate::models::PasswordPolicy;

// One-shot report printed under --json.
#[derive(Serialize)]
struct GenerationReport<'a> {
    password: &'a str,
    length: usize,
    include_digits: bool,
    include_symbols: bool,
    pool_size: usize,
    copied: bool,
}

// Handler for a single non-interactive generation.
pub fn run_once(args: &Args) -> Result<()> {
    let policy = PasswordPolicy::new(args.length, !args.no_digits, !args.no_symbols)?;
    debug!(
        "generating {} characters (digits: {}, symbols: {})",
        policy.length(),
        policy.include_digits(),
        policy.include_symbols()
    );

    let mut random = random_source(args.seed);
    let password = generator::generate(&policy, random.as_mut())?;

    let mut copied = false;
    if args.copy {
        let mut clipboard = SystemClipboard;
        match clipboard.write(&password) {
            Ok(()) => copied = true,
            Err(e) => {
                warn!("clipboard copy failed: {e}");
                eprintln!("⚠️ Could not copy to clipboard: {e}");
            }
        }
    }

    if args.json {
        let report = GenerationReport {
            password: &password,
            length: policy.length(),
            include_digits: policy.include_digits(),
            include_symbols: policy.include_symbols(),
            pool_size: generator::character_pool(&policy).len(),
            copied,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{password}");
        if copied {
            eprintln!("✅ Password copied to clipboard!");
        }
    }

    Ok(())
}
