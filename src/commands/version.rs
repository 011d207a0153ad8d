//! Version command implementation

use crate::error::Result;
use crate::product::BUILDS_URL;

/// Run version command
pub fn run() -> Result<()> {
    println!("scinstall {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Builds: {BUILDS_URL}");

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported version from Cargo.toml
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_runs() {
        assert!(run().is_ok());
    }
}
