//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Skillpack - AI assistant skills installer
///
/// Installs curated skills, agents, workflows and slash commands into a
/// Claude Code or OpenCode project, preserving user customizations.
#[derive(Parser, Debug)]
#[command(
    name = "skillpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Customization-aware installer for AI assistant skills and agents",
    long_about = "Skillpack installs a curated set of markdown skills, agents, workflows \
                  and slash commands into a Claude Code (.claude/) or OpenCode (.opencode/) \
                  project layout, translating agent frontmatter between the two platform \
                  schemas and never silently overwriting files the user has edited."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a package into a project
    Install(InstallArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Interactive install:\n    skillpack install\n\n\
                  Install for Claude Code:\n    skillpack install --platform claude --package standard\n\n\
                  Install for OpenCode into another project:\n    skillpack install -p opencode -k full -t ../my-project\n\n\
                  Preview without writing:\n    skillpack install -p claude -k minimal --dry-run\n\n\
                  Overwrite customized files:\n    skillpack install -p claude -k standard --update")]
pub struct InstallArgs {
    /// Target platform (claude, opencode); prompted for when omitted
    #[arg(long, short = 'p')]
    pub platform: Option<String>,

    /// Package to install; prompted for when omitted
    #[arg(long, short = 'k')]
    pub package: Option<String>,

    /// Target project directory
    #[arg(long, short = 't', default_value = ".")]
    pub target: PathBuf,

    /// Skills repository root containing packages.json and templates/
    #[arg(long, default_value = ".")]
    pub templates: PathBuf,

    /// Show what would be installed without making changes
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Skip backup of an existing installation on forced update
    #[arg(long)]
    pub no_backup: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Update mode: overwrite all existing files, customized or not
    #[arg(long, short = 'u')]
    pub update: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
