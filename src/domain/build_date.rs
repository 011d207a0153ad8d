//! Requested build date: a concrete day or the "latest" sentinel

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::InstallerError;
use crate::product::LATEST_BUILD;

static DATE_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^2[0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));

static DATE_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"2[0-9]{3}-[0-9]{2}-[0-9]{2}").expect("valid date pattern"));

/// Build date as requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDate {
    /// Newest available build, discovered from a directory listing
    Latest,
    /// A specific `YYYY-MM-DD` build
    On(String),
}

impl BuildDate {
    pub fn is_latest(&self) -> bool {
        matches!(self, BuildDate::Latest)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BuildDate::Latest => LATEST_BUILD,
            BuildDate::On(date) => date,
        }
    }

    /// First `YYYY-MM-DD` occurring anywhere in `text`, e.g. in a download link
    pub fn find_in(text: &str) -> Option<&str> {
        DATE_ANYWHERE.find(text).map(|m| m.as_str())
    }
}

impl FromStr for BuildDate {
    type Err = InstallerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LATEST_BUILD {
            Ok(BuildDate::Latest)
        } else if DATE_EXACT.is_match(s) {
            Ok(BuildDate::On(s.to_string()))
        } else {
            Err(InstallerError::InvalidDate {
                date: s.to_string(),
            })
        }
    }
}

impl fmt::Display for BuildDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latest() {
        assert_eq!("latest".parse::<BuildDate>().unwrap(), BuildDate::Latest);
    }

    #[test]
    fn test_parse_concrete() {
        let date: BuildDate = "2023-05-01".parse().unwrap();
        assert_eq!(date, BuildDate::On("2023-05-01".to_string()));
        assert_eq!(date.to_string(), "2023-05-01");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for s in ["Latest", "2023-5-01", "1999-01-01", "2023-05-01x", "yesterday", ""] {
            assert!(
                matches!(s.parse::<BuildDate>(), Err(InstallerError::InvalidDate { .. })),
                "{s}"
            );
        }
    }

    #[test]
    fn test_find_in_link() {
        let link = "https://host/12.1p/LGPL/latest/SmartClient_v121p_2024-02-29_LGPL.zip";
        assert_eq!(BuildDate::find_in(link), Some("2024-02-29"));
        assert_eq!(BuildDate::find_in("https://host/no-date.zip"), None);
    }
}
