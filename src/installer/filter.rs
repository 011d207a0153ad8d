//! Inclusion rules for copying an extracted runtime into place
//!
//! Both rules look at the path relative to the runtime root, component by component:
//! - runtime: release-only drops `system/modules-debug`, debug-only drops `system/modules`
//! - skins: unless all skins are wanted, `skins/<Name>` directories other than the
//!   default skin are dropped (only plain alphabetic names are skins; files such as
//!   `skins/load_skin.js` always stay)
//!
//! Excluding a directory excludes everything below it.

use std::path::Path;

use crate::domain::Runtime;
use crate::product::{DEBUG_MODULES, DEFAULT_SKIN, RELEASE_MODULES};

/// What to keep when copying a runtime tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPolicy {
    pub runtime: Runtime,
    pub include_skins: bool,
}

/// Whether `path` (relative to the runtime root) belongs in the installation
pub fn should_include(path: &Path, policy: &FilterPolicy) -> bool {
    let unwanted_modules = match policy.runtime {
        Runtime::Release => Some(DEBUG_MODULES),
        Runtime::Debug => Some(RELEASE_MODULES),
        Runtime::Both => None,
    };
    if unwanted_modules.is_some_and(|modules| path.ends_with(modules)) {
        return false;
    }

    policy.include_skins || !is_extra_skin(path)
}

fn is_extra_skin(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let under_skins = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|parent| parent == "skins");

    under_skins
        && !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphabetic())
        && name != DEFAULT_SKIN
}
