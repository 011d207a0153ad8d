//! Whether a core reinstall would change nothing

use crate::config::InstallConfig;
use crate::domain::Branch;
use crate::request::InstallRequest;

/// True iff location, branch, resolved date, runtime and skins all match what is recorded.
///
/// `resolved_date` is the concrete date the download link points at, so a "latest"
/// request only matches when no newer build has appeared.
pub fn is_unchanged(request: &InstallRequest, resolved_date: &str, config: &InstallConfig) -> bool {
    let recorded_branch = config
        .branch
        .as_deref()
        .and_then(|branch| branch.parse::<Branch>().ok());

    config.location.as_deref() == Some(request.location.as_path())
        && recorded_branch == Some(request.branch)
        && config.date.as_deref() == Some(resolved_date)
        && config.runtime.as_deref() == Some(request.runtime.as_str())
        && config.skins == request.skins
}
