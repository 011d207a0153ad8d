//! Common test utilities for scinstall integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project with the installer package under `node_modules`
pub struct TestWorkspace {
    /// Temporary directory, also the default install location
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project root
    pub path: PathBuf,
    /// Package directory holding config.json
    pub package_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let package_dir = path.join("node_modules").join("smartclient-eval");
        std::fs::create_dir_all(&package_dir).expect("Failed to create package directory");
        Self {
            temp,
            path,
            package_dir,
        }
    }

    /// Path of config.json
    pub fn config_path(&self) -> PathBuf {
        self.package_dir.join("config.json")
    }

    /// Write config.json verbatim
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Read config.json
    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("Failed to read config")
    }

    /// Record an installation at `location` and create its runtime tree
    pub fn install_fake_runtime(&self, location: &Path) {
        let modules = location.join("isomorphic").join("system").join("modules");
        std::fs::create_dir_all(&modules).expect("Failed to create runtime tree");
        std::fs::write(modules.join("ISC_Core.js"), "core").expect("Failed to write runtime file");

        let config = serde_json::json!({
            "location": location,
            "runtime": "both",
            "branch": "12.1",
            "date": "2023-05-01",
        });
        self.write_config(&serde_json::to_string_pretty(&config).expect("Failed to encode config"));
    }

    /// The scinstall binary pointed at this workspace, with a clean environment
    pub fn cmd(&self) -> Command {
        let mut cmd = scinstall_cmd();
        cmd.arg("--package-dir").arg(&self.package_dir);
        cmd
    }
}

/// The real scinstall binary with no inherited environment
#[allow(deprecated)]
pub fn scinstall_cmd() -> Command {
    let mut cmd = Command::cargo_bin("scinstall").expect("Failed to find scinstall binary");
    cmd.env_clear();
    cmd
}
