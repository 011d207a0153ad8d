//! Product constants: what gets downloaded, from where, and how it is laid out.

/// Package configuration file name
pub const CONFIG_FILE: &str = "config.json";

/// Temporary file name for a downloaded runtime zip
pub const RUNTIME_ARCHIVE: &str = "SmartClient.zip";

/// Temporary file name for a downloaded optional module zip
pub const MODULE_ARCHIVE: &str = "Module.zip";

/// Base URL builds are published under
pub const BUILDS_URL: &str = "https://www.smartclient.com/builds/SmartClient";

/// Date request meaning "newest available build"
pub const LATEST_BUILD: &str = "latest";

/// Relative path to release modules
pub const RELEASE_MODULES: &str = "system/modules";

/// Relative path to debug modules
pub const DEBUG_MODULES: &str = "system/modules-debug";

/// Directory of debug modules inside an optional module archive
pub const MODULE_DEBUG_DIR: &str = "modules-debug";

/// Skin installed when not installing all skins
pub const DEFAULT_SKIN: &str = "Tahoe";

/// Runtime directory inside the extracted package
pub const RUNTIME_DIR: &str = "smartclientRuntime";

/// Root of an installed runtime tree
pub const ISOMORPHIC_DIR: &str = "isomorphic";

/// Prefix of the single top-level directory in a runtime archive
pub const PACKAGE_DIR_PREFIX: &str = "SmartClient_";

/// A downloadable product edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Edition suffix used in archive names, e.g. `LGPL`
    pub edition: String,
    /// Download directory of the core runtime under a branch directory
    pub download_dir: String,
    /// Base URL of the build server
    pub base_url: String,
    /// Whether downloads need a `USERNAME`/`PASSWORD` query
    pub requires_account: bool,
    /// Whether optional modules are synced after the core runtime
    pub supports_modules: bool,
}

impl Product {
    /// The LGPL edition served from the public build server.
    pub fn lgpl() -> Self {
        Self {
            edition: "LGPL".to_string(),
            download_dir: "LGPL".to_string(),
            base_url: BUILDS_URL.to_string(),
            requires_account: false,
            supports_modules: true,
        }
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::lgpl()
    }
}

/// Key an optional component is persisted and overridden under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentFlag {
    Analytics,
    Rtm,
}

impl ComponentFlag {
    pub fn key(self) -> &'static str {
        match self {
            ComponentFlag::Analytics => "analytics",
            ComponentFlag::Rtm => "rtm",
        }
    }
}

/// An optional module installed next to the core runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Human-readable name, also the stem of its download directory
    pub name: &'static str,
    /// JS implementation file removed when the module is dropped
    pub file: &'static str,
    pub flag: ComponentFlag,
}

impl ComponentSpec {
    /// Download directory under a branch directory, e.g. `AnalyticsModule`
    pub fn download_dir(&self) -> String {
        format!("{}Module", self.name)
    }
}

/// Optional components, in the order they are synced.
pub const COMPONENTS: [ComponentSpec; 2] = [
    ComponentSpec {
        name: "Analytics",
        file: "ISC_Analytics.js",
        flag: ComponentFlag::Analytics,
    },
    ComponentSpec {
        name: "RealtimeMessaging",
        file: "ISC_RealtimeMessaging.js",
        flag: ComponentFlag::Rtm,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_order() {
        assert_eq!(COMPONENTS[0].flag, ComponentFlag::Analytics);
        assert_eq!(COMPONENTS[1].flag, ComponentFlag::Rtm);
    }

    #[test]
    fn test_component_download_dir() {
        assert_eq!(COMPONENTS[0].download_dir(), "AnalyticsModule");
        assert_eq!(COMPONENTS[1].download_dir(), "RealtimeMessagingModule");
    }

    #[test]
    fn test_lgpl_defaults() {
        let product = Product::default();
        assert_eq!(product.edition, "LGPL");
        assert!(!product.requires_account);
    }
}
