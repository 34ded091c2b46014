use crate::error::{DocVersionsError, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Ordered version tuple: major, minor and an optional trailing patch/build component.
///
/// Comparison is numeric per component. A missing trailing component sorts below
/// any present one, so `3.9 < 3.9.0 < 3.9.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl Version {
    /// Greater than any version a release branch will realistically carry.
    pub const DEVELOP_SENTINEL: Version = Version {
        major: 1_000_000_000,
        minor: 0,
        patch: Some(0),
    };

    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: Option<u32>) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse the `version` capture of a branch name (e.g. "12.3" or "12.3.1").
    ///
    /// `branch` is only used for error context.
    pub fn parse(branch: &str, text: &str) -> Result<Self> {
        let malformed = || DocVersionsError::malformed_branch(branch, text);

        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(malformed());
        }

        let component = |part: &str| -> Result<u32> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u32>().map_err(|_| malformed())
        };

        let major = component(parts[0])?;
        let minor = component(parts[1])?;
        let patch = match parts.get(2) {
            Some(part) => Some(component(part)?),
            None => None,
        };

        Ok(Version::new(major, minor, patch))
    }

    /// Deduplication and sort key.
    pub fn major_minor(&self) -> (u32, u32) {
        (self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse_major_minor() {
        let v = Version::parse("12.3.X", "12.3").unwrap();
        assert_eq!(v, Version::new(12, 3, None));
    }

    #[test]
    fn test_version_parse_with_patch() {
        let v = Version::parse("12.3.4", "12.3.4").unwrap();
        assert_eq!(v.patch, Some(4));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("b", "1").is_err());
        assert!(Version::parse("b", "1.2.3.4").is_err());
        assert!(Version::parse("b", "1x2").is_err());
        assert!(Version::parse("b", "1.").is_err());
        assert!(Version::parse("b", "-1.2").is_err());
        assert!(Version::parse("b", "+1.2").is_err());
        assert!(Version::parse("b", "99999999999.0").is_err());
    }

    #[test]
    fn test_version_parse_error_is_malformed_branch() {
        let err = Version::parse("1-2.X", "1-2").unwrap_err();
        match err {
            DocVersionsError::MalformedBranch {
                branch,
                version_text,
            } => {
                assert_eq!(branch, "1-2.X");
                assert_eq!(version_text, "1-2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_version_ordering_is_numeric() {
        assert!(Version::new(10, 2, None) > Version::new(9, 5, None));
        assert!(Version::new(3, 10, None) > Version::new(3, 9, None));
    }

    #[test]
    fn test_trailing_component_breaks_ties() {
        assert!(Version::new(3, 9, Some(1)) > Version::new(3, 9, Some(0)));
        assert!(Version::new(3, 9, Some(0)) > Version::new(3, 9, None));
    }

    #[test]
    fn test_sentinel_dominates() {
        assert!(Version::DEVELOP_SENTINEL > Version::new(999_999, 999, Some(999)));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, None).to_string(), "1.2");
        assert_eq!(Version::new(1, 2, Some(3)).to_string(), "1.2.3");
    }
}
