//! Rosterly CLI - Student Roster Manager
//!
//! Command-line interface for the rosterly roster store.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use rosterly::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(cmd) => handle_command(&cli.file, cmd),
        None => commands::list(&cli.file, None, None),
    }
}

fn handle_command(file: &Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { search, class } => commands::list(file, search, class),
        Commands::Add { name, class, age } => commands::add(file, name, class, age),
        Commands::Edit {
            id,
            name,
            class,
            age,
        } => commands::edit(file, id, name, class, age),
        Commands::Delete { id, yes } => commands::delete(file, id, yes),
        Commands::Classes => commands::classes(file),
        Commands::Reset { yes } => commands::reset(file, yes),
    }
}
