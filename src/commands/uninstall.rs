//! Uninstall command implementation

use std::path::PathBuf;

use crate::config::ConfigStore;
use crate::error::Result;
use crate::operations::UninstallOperation;
use crate::prompt::TerminalPrompter;

use super::helpers::resolve_package_dir;

/// Run uninstall command
pub fn run(package_dir: Option<PathBuf>) -> Result<()> {
    let package_dir = resolve_package_dir(package_dir)?;
    let store = ConfigStore::new(&package_dir);
    let mut prompter = TerminalPrompter;

    let outcome = UninstallOperation::new(&store, &mut prompter).run()?;
    tracing::debug!(?outcome, "uninstall finished");
    Ok(())
}
