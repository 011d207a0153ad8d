//! Install/update command implementation

use std::io::IsTerminal;

use console::Style;
use std::path::PathBuf;

use crate::cli::SyncArgs;
use crate::config::ConfigStore;
use crate::error::Result;
use crate::operations::{CoreOutcome, SyncOperation, SyncOptions};
use crate::product::Product;
use crate::prompt::TerminalPrompter;
use crate::request::Overrides;
use crate::transport::HttpTransport;
use crate::usage::usage_text;

use super::helpers::{default_location, package_name, resolve_package_dir};

/// Run install or update; both sync the installation with the request
pub fn run(package_dir: Option<PathBuf>, args: SyncArgs) -> Result<()> {
    let package_dir = resolve_package_dir(package_dir)?;
    let product = Product::lgpl();
    let package_name = package_name();

    let store = ConfigStore::new(&package_dir);
    let transport = HttpTransport::new(&package_name)?;
    let mut prompter = TerminalPrompter;
    let options = SyncOptions {
        default_location: default_location(&package_dir),
        show_progress: std::io::stdout().is_terminal(),
    };
    let overrides = Overrides::from(&args);

    let result = SyncOperation::new(&store, &product, &transport, &mut prompter, options).run(&overrides);
    match result {
        Ok(report) => {
            if report.core == CoreOutcome::Declined {
                tracing::debug!("installation declined");
            }
            tracing::debug!(?report, "sync finished");
            Ok(())
        }
        Err(e) => {
            if e.is_validation() {
                println!("{}\n", Style::new().bold().red().apply_to(format!("*** {e}!")));
                print!("{}", usage_text(&product, &package_name));
            }
            Err(e)
        }
    }
}
