use clap::Parser;
use env_logger::Env;
use log::debug;
use std::path::Path;
use std::process;

mod cli;
mod clipboard;
mod generator;
mod models;
mod session;

use crate::cli::Args;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    debug!("parsed arguments: {:?}", args);

    let outcome = if args.interactive {
        cli::menu::run_menu(&args)
    } else {
        cli::handlers::run_once(&args)
    };

    if let Err(e) = outcome {
        log::error!("{e:#}");
        eprintln!("❌ {e}");
        process::exit(1);
    }
}
