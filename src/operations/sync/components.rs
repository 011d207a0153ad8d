//! Optional module loop run after the core runtime

use std::path::Path;

use crate::config::InstallConfig;
use crate::domain::{Branch, BuildDate, Runtime};
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::installer;
use crate::product::{COMPONENTS, ComponentFlag, ComponentSpec, MODULE_ARCHIVE, Product};
use crate::request::Overrides;
use crate::resolver::LinkResolver;
use crate::temp::scratch_dir;
use crate::transport::Transport;

/// What happened to one optional module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentOutcome {
    /// Downloaded and newly recorded as installed
    Added,
    /// Downloaded again; it was already recorded
    Refreshed,
    /// Files deleted and the record cleared
    Removed,
    /// Neither wanted nor installed
    Untouched,
}

/// Syncs every optional module against the installed core runtime
pub struct ComponentSync<'a> {
    pub product: &'a Product,
    pub transport: &'a dyn Transport,
    pub show_progress: bool,
    pub location: &'a Path,
    pub branch: Branch,
    pub date: &'a BuildDate,
    pub runtime: Runtime,
    pub query: &'a str,
}

impl ComponentSync<'_> {
    /// Bring each module in line with its override or recorded flag, in order.
    ///
    /// Returns the per-module outcomes and whether `config` changed.
    pub fn run(
        &self,
        overrides: &Overrides,
        config: &mut InstallConfig,
    ) -> Result<(Vec<(ComponentFlag, ComponentOutcome)>, bool)> {
        println!("Updating optional modules.");

        let mut outcomes = Vec::with_capacity(COMPONENTS.len());
        let mut changed = false;

        for component in &COMPONENTS {
            let recorded = config.component(component.flag);
            let wanted = overrides.component(component.flag).unwrap_or(recorded);

            let outcome = if wanted {
                self.install(component)?;
                if recorded {
                    ComponentOutcome::Refreshed
                } else {
                    ComponentOutcome::Added
                }
            } else if recorded {
                installer::remove_module(self.location, component)?;
                println!("Removed {} module.", component.name);
                ComponentOutcome::Removed
            } else {
                println!("Not installing the {} module", component.name);
                ComponentOutcome::Untouched
            };

            if wanted != recorded {
                config.set_component(component.flag, wanted);
                changed = true;
            }
            tracing::debug!(module = component.name, key = component.flag.key(), ?outcome, "optional module synced");
            outcomes.push((component.flag, outcome));
        }

        if changed {
            println!("Done updating optional modules.  Configuration updated.");
        } else {
            println!("Done updating optional modules.");
        }
        Ok((outcomes, changed))
    }

    fn install(&self, component: &ComponentSpec) -> Result<()> {
        let link = LinkResolver::new(self.product, self.transport).resolve(
            self.branch,
            self.date,
            self.query,
            &component.download_dir(),
        )?;

        let scratch = scratch_dir("scinstall-module-")?;
        let archive = scratch.path().join(MODULE_ARCHIVE);
        let extracted = scratch.path().join("extracted");

        println!("Downloading {} module from {}", component.name, link.url);
        let what = format!("{} module", component.name);
        Fetcher::new(self.transport, self.show_progress).fetch(&what, &link.url, self.query, &archive)?;

        println!(
            "Installing {} module to {}",
            component.name,
            installer::runtime_root(self.location).display()
        );
        installer::install_module(&archive, &extracted, self.location, self.runtime)?;

        println!("Deleting temporary files from {}", scratch.path().display());
        if let Err(e) = scratch.close() {
            tracing::warn!(error = %e, "failed to delete temporary files");
        }
        println!("Installation of module {} complete.", component.name);
        Ok(())
    }
}
