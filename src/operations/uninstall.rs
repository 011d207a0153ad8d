//! Uninstall operation
//!
//! Removes the runtime tree recorded in the configuration after asking once.
//! The configuration document itself is left as it is.

use std::io::{self, Write};

use crate::config::ConfigStore;
use crate::error::Result;
use crate::installer::{remove_tree, runtime_root};
use crate::prompt::Prompter;

/// What an uninstall run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// No installation is on record
    NotInstalled,
    /// The question was answered no
    Declined,
    /// The recorded runtime tree was deleted
    Removed,
    /// The recorded runtime tree was already gone
    AlreadyAbsent,
}

/// High-level uninstall operation
pub struct UninstallOperation<'a> {
    store: &'a ConfigStore,
    prompter: &'a mut dyn Prompter,
}

impl<'a> UninstallOperation<'a> {
    pub fn new(store: &'a ConfigStore, prompter: &'a mut dyn Prompter) -> Self {
        Self { store, prompter }
    }

    pub fn run(&mut self) -> Result<UninstallOutcome> {
        let config = self.store.load()?;
        let Some(location) = config.location.as_deref() else {
            tracing::debug!("no installation on record");
            return Ok(UninstallOutcome::NotInstalled);
        };

        let root = runtime_root(location);
        let question = format!(
            "Uninstalling SmartClient {}, build {} runtime(s) installed at {}.  Note that if \
             you're seeing this during (re)installation, the new installation won't be aware \
             of the old Framework files even if you decide to keep them.  Remove existing \
             installation?",
            config.branch.as_deref().unwrap_or("?"),
            config.date.as_deref().unwrap_or("?"),
            root.display()
        );
        if !self.prompter.confirm(&question)? {
            return Ok(UninstallOutcome::Declined);
        }

        if !root.exists() {
            println!("Nothing to do as {} doesn't exist!", root.display());
            return Ok(UninstallOutcome::AlreadyAbsent);
        }

        print!("Removing SmartClient...");
        io::stdout().flush()?;
        remove_tree(&root)?;
        println!("Done.");
        tracing::info!(path = %root.display(), "runtime removed");
        Ok(UninstallOutcome::Removed)
    }
}
