//! scinstall - SmartClient runtime installer
//!
//! Installs, updates and uninstalls SmartClient runtime builds for an npm package,
//! remembering the chosen configuration in the package's `config.json`.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod fetcher;
mod installer;
mod logging;
mod operations;
mod product;
mod progress;
mod prompt;
mod request;
mod resolver;
mod temp;
mod transport;
mod usage;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Install(args) | Commands::Update(args) => commands::sync::run(cli.package_dir, args),
        Commands::Uninstall => commands::uninstall::run(cli.package_dir),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "run failed");
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
