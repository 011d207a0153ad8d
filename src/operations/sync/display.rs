//! Messages shown while syncing

use std::path::Path;

use console::Style;

use crate::config::InstallConfig;
use crate::domain::Runtime;
use crate::installer::runtime_root;
use crate::product::DEFAULT_SKIN;
use crate::request::InstallRequest;

/// Describe the installation on record, if any
pub fn print_current_installation(config: &InstallConfig) {
    if let (Some(date), Some(location)) = (&config.date, &config.location) {
        println!(
            "SmartClient {}, build {}, runtime(s) are currently installed at {} according to configuration.",
            config.branch.as_deref().unwrap_or("?"),
            date,
            runtime_root(location).display()
        );
    }
}

/// Question asked before anything is downloaded
pub fn install_question(request: &InstallRequest, config: &InstallConfig) -> String {
    let target = runtime_root(&request.location);
    let relocating = config.location.as_deref() != Some(request.location.as_path());
    let replacing = if target.exists() && relocating {
        " (removing the directory currently present at install path)"
    } else {
        ""
    };

    format!(
        "Install SmartClient {} runtime, build date {}, at {}{}?",
        request.branch,
        request.date,
        target.display(),
        replacing
    )
}

pub const SKIP_QUESTION: &str = "It looks like we're about to re-download the same core runtime(s) \
     already installed with no configuration change.  Skip?";

/// Which runtimes and skins ended up installed
pub fn print_summary(runtime: Runtime, skins: bool) {
    let done = Style::new().green();
    match runtime {
        Runtime::Both => println!("{}", done.apply_to("Installed debug and release runtimes.")),
        other => println!("{}", done.apply_to(format!("Installed {} runtime.", other.as_str()))),
    }
    if skins {
        println!("{}", done.apply_to("Installed all skins."));
    } else {
        println!("{}", done.apply_to(format!("Installed {DEFAULT_SKIN} skin.")));
    }
    println!("See command-line documentation for alternatives.");
}

pub fn print_scratch_cleanup(scratch: &Path) {
    println!("Deleting temporary files from {}", scratch.display());
}
