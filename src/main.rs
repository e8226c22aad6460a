//! Skillpack - AI assistant skills installer
//!
//! Installs curated markdown skills, agents, workflows and slash commands
//! into Claude Code or OpenCode project layouts, translating agent
//! frontmatter between the two platform schemas and preserving user
//! customizations across re-installs.

use clap::Parser;

mod adapter;
mod backup;
mod cli;
mod commands;
mod digest_store;
mod error;
mod frontmatter;
mod hash;
mod installer;
mod merge;
mod packages;
mod platform;
mod progress;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
