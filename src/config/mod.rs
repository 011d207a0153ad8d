//! Persistent installation configuration
//!
//! `config.json` in the package directory is the single source of truth across runs.
//! It records where the runtime lives, which build it is and how it was filtered,
//! plus the optional modules currently installed.
//!
//! Boolean keys are written only when true; absence means false ("not installed" for
//! optional modules). Unknown keys are carried through a flattened map so a full
//! rewrite never drops them.

pub mod store;

pub use store::ConfigStore;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::product::ComponentFlag;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Contents of `config.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Directory the `isomorphic` tree is installed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Resolved build date, never the "latest" sentinel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Keep tracking the newest build on later updates
    #[serde(default, skip_serializing_if = "is_false")]
    pub latest: bool,

    /// All skins were installed, not only the default one
    #[serde(default, skip_serializing_if = "is_false")]
    pub skins: bool,

    /// Auto-confirm prompts that default to yes
    #[serde(default, skip_serializing_if = "is_false")]
    pub yes: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub analytics: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub rtm: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InstallConfig {
    /// Whether an optional module is recorded as installed
    pub fn component(&self, flag: ComponentFlag) -> bool {
        match flag {
            ComponentFlag::Analytics => self.analytics,
            ComponentFlag::Rtm => self.rtm,
        }
    }

    pub fn set_component(&mut self, flag: ComponentFlag, installed: bool) {
        match flag {
            ComponentFlag::Analytics => self.analytics = installed,
            ComponentFlag::Rtm => self.rtm = installed,
        }
    }
}
