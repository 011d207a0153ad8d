//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - sync: install/update arguments
//! - completions: completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod sync;

pub use completions::CompletionsArgs;
pub use sync::SyncArgs;

/// scinstall - SmartClient runtime installer
///
/// Install, update and uninstall SmartClient runtimes for an npm package.
#[derive(Parser, Debug)]
#[command(
    name = "scinstall",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install, update and uninstall SmartClient runtimes",
    long_about = "scinstall downloads a SmartClient runtime build, installs the release and/or \
                  debug runtime under <location>/isomorphic, and keeps optional modules in step. \
                  Choices are remembered in the package's config.json.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  scinstall install --branch=12.1 --date=latest   \x1b[90m# Install the newest 12.1 build\x1b[0m\n   \
                  scinstall update --skins --analytics             \x1b[90m# Add all skins and Analytics\x1b[0m\n   \
                  scinstall update --runtime=release --yes         \x1b[90m# Release runtime only, no prompts\x1b[0m\n   \
                  scinstall uninstall                              \x1b[90m# Remove the installed runtime\x1b[0m\n"
)]
pub struct Cli {
    /// Package directory holding config.json (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "SCINSTALL_PACKAGE_DIR")]
    pub package_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the SmartClient runtime(s)
    Install(SyncArgs),

    /// Update or reconfigure the installed runtime(s)
    Update(SyncArgs),

    /// Remove the installed runtime(s)
    Uninstall,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
