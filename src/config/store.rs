//! Loading and saving of `config.json`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::InstallConfig;
use crate::error::{InstallerError, Result, fs as fs_error};
use crate::product::CONFIG_FILE;

/// Reads and writes the configuration document of one package directory
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for `config.json` inside `package_dir`
    pub fn new(package_dir: &Path) -> Self {
        Self {
            path: package_dir.join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, or an empty one if it does not exist yet
    pub fn load(&self) -> Result<InstallConfig> {
        if !self.path.exists() {
            return Ok(InstallConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| InstallerError::ConfigReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| InstallerError::ConfigParseFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Overwrite the document in full
    ///
    /// Written to a sibling temp file first and renamed into place, so a reader
    /// never sees a half-written document.
    pub fn save(&self, config: &InstallConfig) -> Result<()> {
        let content = to_json(config)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, &content).map_err(|e| fs_error::config_write_failed(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| fs_error::config_write_failed(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

/// Four-space indented JSON with a trailing newline
fn to_json(config: &InstallConfig) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| InstallerError::IoError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn test_load_missing_returns_default() {
        let temp = create_temp_dir();
        let store = ConfigStore::new(temp.path());
        assert_eq!(store.load().unwrap(), InstallConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = create_temp_dir();
        let store = ConfigStore::new(temp.path());
        let config = InstallConfig {
            location: Some(temp.path().to_path_buf()),
            branch: Some("12.1".to_string()),
            date: Some("2023-05-01".to_string()),
            runtime: Some("both".to_string()),
            latest: true,
            ..Default::default()
        };

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
        assert!(!temp.path().join("config.json.tmp").exists());
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let temp = create_temp_dir();
        let store = ConfigStore::new(temp.path());
        let config = InstallConfig {
            branch: Some("12.1".to_string()),
            yes: true,
            ..Default::default()
        };

        store.save(&config).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{\n    \"branch\": \"12.1\",\n    \"yes\": true\n}\n");
    }

    #[test]
    fn test_load_malformed_fails() {
        let temp = create_temp_dir();
        let store = ConfigStore::new(temp.path());
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(
            store.load(),
            Err(InstallerError::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let temp = create_temp_dir();
        let store = ConfigStore::new(&temp.path().join("missing"));
        assert!(matches!(
            store.save(&InstallConfig::default()),
            Err(InstallerError::ConfigWriteFailed { .. })
        ));
    }
}
