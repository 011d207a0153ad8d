//! Branch (major.minor release line) and distribution channel

use std::fmt;
use std::str::FromStr;

use crate::error::InstallerError;

/// Distribution stream a branch is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Released branches, up to and including [`Branch::DEFAULT`]
    Production,
    /// Snapshot builds of branches newer than [`Branch::DEFAULT`]
    Development,
}

impl Channel {
    /// Letter used in download directories and archive names
    pub fn letter(self) -> char {
        match self {
            Channel::Production => 'p',
            Channel::Development => 'd',
        }
    }
}

/// A SmartClient branch such as `12.1`.
///
/// Ordering is numeric on (major, minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Branch {
    major: u8,
    minor: u8,
}

impl Branch {
    /// Oldest maintained branch
    pub const OLDEST: Branch = Branch::new(10, 1);
    /// Latest release branch
    pub const DEFAULT: Branch = Branch::new(12, 1);
    /// Development branch, the newest accepted
    pub const DEVELOP: Branch = Branch::new(13, 0);

    const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Numeric branch times ten, as used in archive names (`12.1` → `121`)
    pub fn times_ten(self) -> u32 {
        u32::from(self.major) * 10 + u32::from(self.minor)
    }

    pub fn channel(self) -> Channel {
        if self <= Branch::DEFAULT {
            Channel::Production
        } else {
            Channel::Development
        }
    }

    /// Parses `1X.Y` where X is a digit and Y is 0 or 1, without range checks
    fn parse_pattern(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        match bytes {
            [b'1', m @ b'0'..=b'9', b'.', n @ b'0'..=b'1'] => {
                Some(Branch::new(10 + (m - b'0'), n - b'0'))
            }
            _ => None,
        }
    }
}

impl FromStr for Branch {
    type Err = InstallerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Branch::parse_pattern(s)
            .filter(|branch| (Branch::OLDEST..=Branch::DEVELOP).contains(branch))
            .ok_or_else(|| InstallerError::InvalidBranch {
                branch: s.to_string(),
            })
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
