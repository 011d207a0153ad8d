//! Effective install request for one run
//!
//! Each field comes from the first source that has it: an override (command-line flag or
//! `npm_config_*` environment variable), then the persisted configuration, then a
//! built-in default. Nothing here is persisted directly.

use std::path::{Path, PathBuf};

use crate::config::InstallConfig;
use crate::domain::{Branch, BuildDate, Runtime};
use crate::error::{InstallerError, Result};
use crate::product::{ComponentFlag, LATEST_BUILD};
use crate::prompt::Prompter;

/// Values supplied for this run through flags or the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub location: Option<PathBuf>,
    pub branch: Option<String>,
    pub date: Option<String>,
    pub runtime: Option<String>,
    pub skins: Option<bool>,
    pub yes: Option<bool>,
    pub analytics: Option<bool>,
    pub rtm: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Overrides {
    /// Requested state of an optional module, if overridden
    pub fn component(&self, flag: ComponentFlag) -> Option<bool> {
        match flag {
            ComponentFlag::Analytics => self.analytics,
            ComponentFlag::Rtm => self.rtm,
        }
    }
}

/// Validated request the orchestrator acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Absolute directory the `isomorphic` tree goes under
    pub location: PathBuf,
    pub branch: Branch,
    pub date: BuildDate,
    pub runtime: Runtime,
    pub skins: bool,
    pub yes: bool,
}

impl InstallRequest {
    /// Merge overrides, persisted values and defaults, validating as we go.
    ///
    /// Validation order is date, branch, runtime; the first failure wins.
    pub fn resolve(
        overrides: &Overrides,
        config: &InstallConfig,
        default_location: &Path,
    ) -> Result<Self> {
        let location = overrides
            .location
            .clone()
            .or_else(|| config.location.clone())
            .unwrap_or_else(|| default_location.to_path_buf());
        let location = absolute(&location)?;

        let persisted_date = if config.latest {
            Some(LATEST_BUILD.to_string())
        } else {
            config.date.clone()
        };
        let date: BuildDate = overrides
            .date
            .clone()
            .or(persisted_date)
            .unwrap_or_else(|| LATEST_BUILD.to_string())
            .parse()?;

        let branch: Branch = match overrides.branch.as_ref().or(config.branch.as_ref()) {
            Some(branch) => branch.parse()?,
            None => Branch::DEFAULT,
        };

        let runtime: Runtime = match overrides.runtime.as_ref().or(config.runtime.as_ref()) {
            Some(runtime) => runtime.parse()?,
            None => Runtime::default(),
        };

        Ok(Self {
            location,
            branch,
            date,
            runtime,
            skins: overrides.skins.unwrap_or(config.skins),
            yes: overrides.yes.unwrap_or(config.yes),
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| InstallerError::IoError {
        message: format!("Failed to resolve {}: {}", path.display(), e),
    })
}

/// Download account for products that require one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// The password came from a flag or the environment, so it may be persisted
    pub password_supplied: bool,
}

impl Credentials {
    /// Take credentials from overrides or the configuration, prompting for what is missing
    pub fn resolve(
        overrides: &Overrides,
        config: &InstallConfig,
        prompter: &mut dyn Prompter,
    ) -> Result<Self> {
        let username = match overrides.username.clone().or_else(|| config.username.clone()) {
            Some(username) => username,
            None => prompter
                .ask_text("Please provide your SmartClient username:", false)?
                .ok_or(InstallerError::MissingUsername)?,
        };

        let supplied = overrides.password.clone().or_else(|| config.password.clone());
        let password_supplied = overrides.password.is_some();
        let password = match supplied {
            Some(password) => password,
            None => {
                let password = prompter
                    .ask_text("Please provide your SmartClient password:", true)?
                    .ok_or(InstallerError::MissingPassword)?;
                println!("\nFor security, the requested password will not be persisted.");
                println!("Please use command-line password option to store a password.\n");
                password
            }
        };

        Ok(Self {
            username,
            password,
            password_supplied,
        })
    }

    /// Query string appended to download URLs
    pub fn query(&self) -> String {
        format!("?USERNAME={}&PASSWORD={}", self.username, encode_component(&self.password))
    }
}

/// Percent-encode a query value, spaces as `%20` rather than `+`
fn encode_component(value: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so every '+' left is a space
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::ScriptedPrompter;

    fn default_location() -> PathBuf {
        PathBuf::from("/opt/app")
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let request =
            InstallRequest::resolve(&Overrides::default(), &InstallConfig::default(), &default_location())
                .unwrap();
        assert_eq!(request.location, PathBuf::from("/opt/app"));
        assert_eq!(request.branch, Branch::DEFAULT);
        assert_eq!(request.date, BuildDate::Latest);
        assert_eq!(request.runtime, Runtime::Both);
        assert!(!request.skins);
        assert!(!request.yes);
    }

    #[test]
    fn test_config_beats_default() {
        let config = InstallConfig {
            location: Some(PathBuf::from("/srv/web")),
            branch: Some("11.1".to_string()),
            date: Some("2022-01-02".to_string()),
            runtime: Some("debug".to_string()),
            skins: true,
            yes: true,
            ..Default::default()
        };
        let request = InstallRequest::resolve(&Overrides::default(), &config, &default_location()).unwrap();
        assert_eq!(request.location, PathBuf::from("/srv/web"));
        assert_eq!(request.branch.to_string(), "11.1");
        assert_eq!(request.date, BuildDate::On("2022-01-02".to_string()));
        assert_eq!(request.runtime, Runtime::Debug);
        assert!(request.skins);
        assert!(request.yes);
    }

    #[test]
    fn test_latest_marker_beats_stored_date() {
        let config = InstallConfig {
            date: Some("2022-01-02".to_string()),
            latest: true,
            ..Default::default()
        };
        let request = InstallRequest::resolve(&Overrides::default(), &config, &default_location()).unwrap();
        assert_eq!(request.date, BuildDate::Latest);
    }

    #[test]
    fn test_override_beats_config() {
        let config = InstallConfig {
            branch: Some("11.1".to_string()),
            skins: true,
            yes: true,
            ..Default::default()
        };
        let overrides = Overrides {
            branch: Some("13.0".to_string()),
            date: Some("2023-05-01".to_string()),
            skins: Some(false),
            yes: Some(false),
            ..Default::default()
        };
        let request = InstallRequest::resolve(&overrides, &config, &default_location()).unwrap();
        assert_eq!(request.branch, Branch::DEVELOP);
        assert_eq!(request.date, BuildDate::On("2023-05-01".to_string()));
        assert!(!request.skins);
        assert!(!request.yes);
    }

    #[test]
    fn test_relative_location_made_absolute() {
        let overrides = Overrides {
            location: Some(PathBuf::from("runtime-here")),
            ..Default::default()
        };
        let request =
            InstallRequest::resolve(&overrides, &InstallConfig::default(), &default_location()).unwrap();
        assert!(request.location.is_absolute());
        assert!(request.location.ends_with("runtime-here"));
    }

    #[test]
    fn test_date_validated_first() {
        let overrides = Overrides {
            date: Some("soon".to_string()),
            branch: Some("1.0".to_string()),
            runtime: Some("fast".to_string()),
            ..Default::default()
        };
        let err = InstallRequest::resolve(&overrides, &InstallConfig::default(), &default_location())
            .unwrap_err();
        assert!(matches!(err, InstallerError::InvalidDate { .. }));
    }

    #[test]
    fn test_invalid_branch_and_runtime() {
        let overrides = Overrides {
            branch: Some("9.9".to_string()),
            ..Default::default()
        };
        let err = InstallRequest::resolve(&overrides, &InstallConfig::default(), &default_location())
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let overrides = Overrides {
            runtime: Some("fast".to_string()),
            ..Default::default()
        };
        let err = InstallRequest::resolve(&overrides, &InstallConfig::default(), &default_location())
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_persisted_runtime_is_rejected() {
        let config = InstallConfig {
            runtime: Some("everything".to_string()),
            ..Default::default()
        };
        let err = InstallRequest::resolve(&Overrides::default(), &config, &default_location()).unwrap_err();
        assert!(matches!(err, InstallerError::InvalidRuntime { .. }));
    }

    #[test]
    fn test_credentials_from_overrides() {
        let overrides = Overrides {
            username: Some("jane".to_string()),
            password: Some("p&ss word".to_string()),
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default();
        let credentials =
            Credentials::resolve(&overrides, &InstallConfig::default(), &mut prompter).unwrap();
        assert!(credentials.password_supplied);
        assert_eq!(credentials.query(), "?USERNAME=jane&PASSWORD=p%26ss%20word");
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_password_plus_and_space_encoding() {
        assert_eq!(encode_component("a b+c"), "a%20b%2Bc");
        assert_eq!(encode_component("plain-1.2_x"), "plain-1.2_x");
    }

    #[test]
    fn test_prompted_password_not_marked_supplied() {
        let config = InstallConfig {
            username: Some("jane".to_string()),
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default().with_text(Some("secret"));
        let credentials = Credentials::resolve(&Overrides::default(), &config, &mut prompter).unwrap();
        assert_eq!(credentials.password, "secret");
        assert!(!credentials.password_supplied);
    }

    #[test]
    fn test_missing_username_and_password() {
        let mut prompter = ScriptedPrompter::default().with_text(None);
        let err = Credentials::resolve(&Overrides::default(), &InstallConfig::default(), &mut prompter)
            .unwrap_err();
        assert!(matches!(err, InstallerError::MissingUsername));

        let overrides = Overrides {
            username: Some("jane".to_string()),
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default().with_text(None);
        let err = Credentials::resolve(&overrides, &InstallConfig::default(), &mut prompter).unwrap_err();
        assert!(matches!(err, InstallerError::MissingPassword));
    }
}
