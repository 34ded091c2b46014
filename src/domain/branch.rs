use crate::domain::Version;
use crate::error::{DocVersionsError, Result};
use regex::Regex;
use tracing::debug;

/// Default inclusion pattern, matching release branches shaped like `12.3.X`.
pub const DEFAULT_INCLUDE_BRANCH_PATTERN: &str = r"(?P<version>\d+.\d+).X";

/// Name of the capture group holding the version text.
const VERSION_GROUP: &str = "version";

/// Compiled branch inclusion pattern.
///
/// The pattern is anchored at the start of the branch name only; trailing text
/// after the match is allowed (`3.9.X-hotfix` matches the default pattern).
#[derive(Debug, Clone)]
pub struct BranchPattern {
    source: String,
    regex: Regex,
}

impl BranchPattern {
    /// Compile a pattern. It must contain a named group `version`.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
            DocVersionsError::config(format!("Invalid branch pattern '{}': {}", pattern, e))
        })?;

        if !regex.capture_names().flatten().any(|n| n == VERSION_GROUP) {
            return Err(DocVersionsError::config(format!(
                "Branch pattern '{}' has no named group '{}'",
                pattern, VERSION_GROUP
            )));
        }

        Ok(BranchPattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as configured, without the start anchor.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match a branch name and parse its version.
    ///
    /// * `Ok(None)` - not a documentation version branch
    /// * `Ok(Some(version))` - matched and parsed
    /// * `Err(MalformedBranch)` - matched, but the capture is not `MAJOR.MINOR[.PATCH]`
    pub fn version_of(&self, branch: &str) -> Result<Option<Version>> {
        let Some(captures) = self.regex.captures(branch) else {
            debug!(branch, pattern = %self.source, "Branch does not match include pattern, skipping");
            return Ok(None);
        };

        // An optional group that did not participate counts as empty text.
        let text = captures
            .name(VERSION_GROUP)
            .map(|m| m.as_str())
            .unwrap_or_default();

        Version::parse(branch, text).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pattern() -> BranchPattern {
        BranchPattern::new(DEFAULT_INCLUDE_BRANCH_PATTERN).unwrap()
    }

    #[test]
    fn test_default_pattern_matches_release_branch() {
        let pattern = default_pattern();
        assert_eq!(
            pattern.version_of("12.3.X").unwrap(),
            Some(Version::new(12, 3, None))
        );
    }

    #[test]
    fn test_default_pattern_allows_trailing_text() {
        let pattern = default_pattern();
        assert_eq!(
            pattern.version_of("3.9.X-old").unwrap(),
            Some(Version::new(3, 9, None))
        );
    }

    #[test]
    fn test_pattern_is_anchored_at_start() {
        let pattern = default_pattern();
        assert_eq!(pattern.version_of("release-1.2.X").unwrap(), None);
        assert_eq!(pattern.version_of("master").unwrap(), None);
        assert_eq!(pattern.version_of("").unwrap(), None);
    }

    #[test]
    fn test_loose_capture_is_malformed() {
        // The default pattern's unescaped dot accepts any separator.
        let pattern = default_pattern();
        let err = pattern.version_of("1-2.X").unwrap_err();
        assert!(matches!(err, DocVersionsError::MalformedBranch { .. }));
    }

    #[test]
    fn test_custom_pattern_with_patch() {
        let pattern = BranchPattern::new(r"release/(?P<version>\d+\.\d+\.\d+)").unwrap();
        assert_eq!(
            pattern.version_of("release/2.1.7").unwrap(),
            Some(Version::new(2, 1, Some(7)))
        );
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let pattern = BranchPattern::new(r"v(?P<version>\d+\.\d+)|stable").unwrap();
        assert!(pattern.version_of("xv1.2").unwrap().is_none());
    }

    #[test]
    fn test_pattern_without_version_group_is_rejected() {
        let err = BranchPattern::new(r"\d+\.\d+\.X").unwrap_err();
        assert!(err.to_string().contains("no named group 'version'"));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        assert!(BranchPattern::new(r"(?P<version>\d+").is_err());
    }

    #[test]
    fn test_as_str_returns_configured_pattern() {
        assert_eq!(
            default_pattern().as_str(),
            DEFAULT_INCLUDE_BRANCH_PATTERN
        );
    }
}
