//! Main orchestrator for install/update
//!
//! One run walks: load configuration, resolve the request, confirm, resolve the link,
//! prepare the location, skip or install the core runtime, then sync optional modules.
//! Every stage completes before the next starts.

use std::path::PathBuf;

use crate::config::{ConfigStore, InstallConfig};
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::installer::{self, FilterPolicy};
use crate::product::{ComponentFlag, Product, RUNTIME_ARCHIVE};
use crate::prompt::{Prompter, confirm_or_assume};
use crate::request::{Credentials, InstallRequest, Overrides};
use crate::resolver::LinkResolver;
use crate::temp::scratch_dir;
use crate::transport::Transport;

use super::components::{ComponentOutcome, ComponentSync};
use super::{display, skip};

/// Options for a sync run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Install location used when neither an override nor the configuration names one
    pub default_location: PathBuf,
    /// Draw download progress on the terminal
    pub show_progress: bool,
}

/// What happened to the core runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreOutcome {
    /// The install question was answered no; nothing changed
    Declined,
    /// The requested build was already in place
    Skipped,
    /// A build was downloaded and installed
    Installed { date: String },
}

/// Result of a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub core: CoreOutcome,
    pub components: Vec<(ComponentFlag, ComponentOutcome)>,
}

/// Install or update the runtime described by overrides and the stored configuration
pub struct SyncOperation<'a> {
    store: &'a ConfigStore,
    product: &'a Product,
    transport: &'a dyn Transport,
    prompter: &'a mut dyn Prompter,
    options: SyncOptions,
}

impl<'a> SyncOperation<'a> {
    pub fn new(
        store: &'a ConfigStore,
        product: &'a Product,
        transport: &'a dyn Transport,
        prompter: &'a mut dyn Prompter,
        options: SyncOptions,
    ) -> Self {
        Self {
            store,
            product,
            transport,
            prompter,
            options,
        }
    }

    pub fn run(&mut self, overrides: &Overrides) -> Result<SyncReport> {
        let mut config = self.store.load()?;
        display::print_current_installation(&config);

        let credentials = if self.product.requires_account {
            println!(
                "SmartClient {} requires download credentials.  Checking.",
                self.product.edition
            );
            Some(Credentials::resolve(overrides, &config, &mut *self.prompter)?)
        } else {
            None
        };

        let request = InstallRequest::resolve(overrides, &config, &self.options.default_location)?;
        tracing::debug!(?request, "install request resolved");

        let question = display::install_question(&request, &config);
        if !confirm_or_assume(&mut *self.prompter, &question, request.yes)? {
            return Ok(SyncReport {
                core: CoreOutcome::Declined,
                components: Vec::new(),
            });
        }

        let query = credentials.as_ref().map(Credentials::query).unwrap_or_default();
        let link = LinkResolver::new(self.product, self.transport).resolve(
            request.branch,
            &request.date,
            &query,
            &self.product.download_dir,
        )?;
        let date = link.require_date()?.to_string();

        installer::prepare_location(&request.location)?;

        let core = if self.should_skip(&request, &date, &mut config)? {
            CoreOutcome::Skipped
        } else {
            self.install_core(&request, &link.url, &date, &query, credentials.as_ref(), &mut config)?;
            CoreOutcome::Installed { date }
        };

        let components = if self.product.supports_modules {
            let sync = ComponentSync {
                product: self.product,
                transport: self.transport,
                show_progress: self.options.show_progress,
                location: &request.location,
                branch: request.branch,
                date: &request.date,
                runtime: request.runtime,
                query: &query,
            };
            let (outcomes, changed) = sync.run(overrides, &mut config)?;
            if changed {
                self.store.save(&config)?;
            }
            outcomes
        } else {
            Vec::new()
        };

        Ok(SyncReport { core, components })
    }

    /// Offer to skip an unchanged core; accepting records only a changed `yes`
    fn should_skip(
        &mut self,
        request: &InstallRequest,
        date: &str,
        config: &mut InstallConfig,
    ) -> Result<bool> {
        if !skip::is_unchanged(request, date, config) {
            return Ok(false);
        }
        if !confirm_or_assume(&mut *self.prompter, display::SKIP_QUESTION, request.yes)? {
            return Ok(false);
        }

        if config.yes != request.yes {
            config.yes = request.yes;
            self.store.save(config)?;
            println!("Configuration updated.");
        }
        println!("Skipping re-installation.\n");
        Ok(true)
    }

    fn install_core(
        &self,
        request: &InstallRequest,
        url: &str,
        date: &str,
        query: &str,
        credentials: Option<&Credentials>,
        config: &mut InstallConfig,
    ) -> Result<()> {
        let scratch = scratch_dir("scinstall-")?;
        let archive = scratch.path().join(RUNTIME_ARCHIVE);
        let extracted = scratch.path().join("extracted");

        println!("Downloading SmartClient runtime from {url}");
        Fetcher::new(self.transport, self.options.show_progress).fetch(
            "SmartClient runtime",
            url,
            query,
            &archive,
        )?;

        println!(
            "Unzipping SmartClient runtime file {} to {}",
            archive.display(),
            extracted.display()
        );
        println!(
            "Copying SmartClient runtime(s) to {}",
            installer::runtime_root(&request.location).display()
        );
        let policy = FilterPolicy {
            runtime: request.runtime,
            include_skins: request.skins,
        };
        installer::install_core(
            &archive,
            &extracted,
            config.location.as_deref(),
            &request.location,
            &policy,
        )?;
        display::print_summary(request.runtime, request.skins);

        config.location = Some(request.location.clone());
        config.runtime = Some(request.runtime.as_str().to_string());
        config.branch = Some(request.branch.to_string());
        config.date = Some(date.to_string());
        config.latest = request.date.is_latest();
        config.skins = request.skins;
        config.yes = request.yes;
        if let Some(credentials) = credentials {
            config.username = Some(credentials.username.clone());
            // A prompted password is never written down
            if credentials.password_supplied {
                config.password = Some(credentials.password.clone());
            }
        }
        self.store.save(config)?;
        println!("Configuration updated.");

        display::print_scratch_cleanup(scratch.path());
        if let Err(e) = scratch.close() {
            tracing::warn!(error = %e, "failed to delete temporary files");
        }

        if self.product.supports_modules {
            println!("Installation of runtime core complete.\n");
        } else {
            println!("Installation complete.");
        }
        tracing::info!(%date, location = %request.location.display(), "core runtime installed");
        Ok(())
    }
}
