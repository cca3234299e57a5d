// src/cli/menu.rs
use anyhow::Result;
use console::style;
use inquire::{InquireError, Select, Text};

use crate::cli::Args;
use crate::clipboard::SystemClipboard;
use crate::generator::random_source;
use crate::models::PasswordPolicy;
use crate::session::GeneratorSession;

pub fn run_menu(args: &Args) -> Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    let policy = PasswordPolicy::new(args.length, !args.no_digits, !args.no_symbols)?;
    let mut session =
        GeneratorSession::new(policy, random_source(args.seed), Box::new(SystemClipboard))?;

    loop {
        print_status(&session);

        let options = vec![
            "🔁  Regenerate",
            "📋  Copy to clipboard",
            "📏  Change length",
            "🔢  Toggle digits",
            "🔣  Toggle symbols",
            "❌  Exit",
        ];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt()
        {
            Ok(selection) => selection,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                break
            }
            Err(e) => return Err(e.into()),
        };

        match selection {
            "🔁  Regenerate" => {
                session.regenerate()?;
            }
            "📋  Copy to clipboard" => match session.copy_to_clipboard() {
                Ok(true) => println!("✅ Password copied to clipboard!"),
                Ok(false) => println!("❗ Nothing to copy yet."),
                Err(e) => println!("❌ Failed to copy: {}", e),
            },
            "📏  Change length" => {
                let current = session.policy().length().to_string();
                let input = match Text::new("Password length:").with_default(&current).prompt() {
                    Ok(input) => input,
                    Err(InquireError::OperationCanceled) => continue,
                    Err(InquireError::OperationInterrupted) => break,
                    Err(e) => return Err(e.into()),
                };

                let length: usize = match input.trim().parse() {
                    Ok(length) => length,
                    Err(_) => {
                        println!("❌ Invalid number: {}", input);
                        continue;
                    }
                };

                // A rejected length keeps the previous policy and password.
                if let Err(e) = session.set_length(length) {
                    println!("❌ {}", e);
                }
            }
            "🔢  Toggle digits" => {
                if let Err(e) = session.toggle_digits() {
                    println!("❌ {}", e);
                }
            }
            "🔣  Toggle symbols" => {
                if let Err(e) = session.toggle_symbols() {
                    println!("❌ {}", e);
                }
            }
            "❌  Exit" => {
                println!("👋 Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn print_status(session: &GeneratorSession) {
    let policy = session.policy();
    println!();
    println!("🔑 {}", style(session.password()).cyan().bold());
    println!(
        "   length {} | digits {} | symbols {}",
        style(policy.length()).bold(),
        on_off(policy.include_digits()),
        on_off(policy.include_symbols()),
    );
    println!();
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
