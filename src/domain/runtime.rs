//! Runtime selection: release modules, debug modules, or both

use std::fmt;
use std::str::FromStr;

use crate::error::InstallerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Runtime {
    Release,
    Debug,
    #[default]
    Both,
}

impl Runtime {
    pub fn as_str(self) -> &'static str {
        match self {
            Runtime::Release => "release",
            Runtime::Debug => "debug",
            Runtime::Both => "both",
        }
    }

    pub fn includes_release(self) -> bool {
        matches!(self, Runtime::Release | Runtime::Both)
    }

    pub fn includes_debug(self) -> bool {
        matches!(self, Runtime::Debug | Runtime::Both)
    }
}

impl FromStr for Runtime {
    type Err = InstallerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release" => Ok(Runtime::Release),
            "debug" => Ok(Runtime::Debug),
            "both" => Ok(Runtime::Both),
            _ => Err(InstallerError::InvalidRuntime {
                runtime: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_round_trip_names() {
        for runtime in [Runtime::Release, Runtime::Debug, Runtime::Both] {
            assert_eq!(runtime.as_str().parse::<Runtime>().unwrap(), runtime);
        }
    }

    #[test]
    fn test_runtime_rejects_unknown() {
        assert!(matches!(
            "Release".parse::<Runtime>(),
            Err(InstallerError::InvalidRuntime { .. })
        ));
    }

    #[test]
    fn test_runtime_coverage() {
        assert!(Runtime::Both.includes_release() && Runtime::Both.includes_debug());
        assert!(Runtime::Release.includes_release() && !Runtime::Release.includes_debug());
        assert!(!Runtime::Debug.includes_release() && Runtime::Debug.includes_debug());
    }
}
