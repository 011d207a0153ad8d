//! Operations module for installing, updating and uninstalling the runtime
//!
//! This module provides high-level operations that coordinate:
//! - SyncOperation: install/update workflow, core runtime then optional modules
//! - UninstallOperation: removal of the recorded runtime tree
//!
//! The operations coordinate with:
//! - Config store: persisted state (from config module)
//! - Link resolver and fetcher: downloads (from resolver and fetcher modules)
//! - Installer: extraction and filtered copy (from installer module)
//! - Prompter: confirmations and credentials (from prompt module)

pub mod sync;
pub mod uninstall;

pub use sync::{CoreOutcome, SyncOperation, SyncOptions};
pub use uninstall::UninstallOperation;
