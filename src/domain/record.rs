use crate::domain::Version;
use serde::Serialize;
use std::fmt;

/// Name and URL segment of the synthetic develop record.
pub const DEVELOP_NAME: &str = "main";

/// One selectable documentation version.
///
/// The URL is derived from the source ref at construction and cannot be set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    #[serde(rename = "name")]
    display_name: String,
    url: String,
    #[serde(rename = "version")]
    semantic_version: Version,
    #[serde(rename = "ref")]
    source_ref: String,
    is_current: bool,
    is_released: bool,
}

impl VersionRecord {
    /// A released version derived from a branch, displayed as `MAJOR.MINOR`.
    pub fn released(branch: impl Into<String>, version: Version, is_current: bool) -> Self {
        VersionRecord::new(
            format!("{}.{}", version.major, version.minor),
            branch.into(),
            version,
            true,
            is_current,
        )
    }

    /// The unreleased develop line. Its ref is always [`DEVELOP_NAME`],
    /// whatever the develop branch is called.
    pub fn develop(is_current: bool) -> Self {
        VersionRecord::new(
            DEVELOP_NAME.to_string(),
            DEVELOP_NAME.to_string(),
            Version::DEVELOP_SENTINEL,
            false,
            is_current,
        )
    }

    fn new(
        display_name: String,
        source_ref: String,
        semantic_version: Version,
        is_released: bool,
        is_current: bool,
    ) -> Self {
        let url = format!("/{}/index.html", source_ref);
        VersionRecord {
            display_name,
            url,
            semantic_version,
            source_ref,
            is_current,
            is_released,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn semantic_version(&self) -> Version {
        self.semantic_version
    }

    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    pub fn is_current(&self) -> bool {
        self.is_current
    }

    pub fn is_released(&self) -> bool {
        self.is_released
    }

    pub(crate) fn mark_released(&mut self) {
        self.is_released = true;
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Version({}, {}, current={})",
            self.display_name, self.url, self.is_current
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_record() {
        let record = VersionRecord::released("4.1.X", Version::new(4, 1, None), false);
        assert_eq!(record.display_name(), "4.1");
        assert_eq!(record.source_ref(), "4.1.X");
        assert_eq!(record.url(), "/4.1.X/index.html");
        assert!(record.is_released());
        assert!(!record.is_current());
    }

    #[test]
    fn test_display_name_drops_trailing_component() {
        let record = VersionRecord::released("release/2.0.5", Version::new(2, 0, Some(5)), true);
        assert_eq!(record.display_name(), "2.0");
        assert_eq!(record.url(), "/release/2.0.5/index.html");
    }

    #[test]
    fn test_develop_record() {
        let record = VersionRecord::develop(true);
        assert_eq!(record.display_name(), "main");
        assert_eq!(record.source_ref(), "main");
        assert_eq!(record.url(), "/main/index.html");
        assert_eq!(record.semantic_version(), Version::DEVELOP_SENTINEL);
        assert!(!record.is_released());
        assert!(record.is_current());
    }

    #[test]
    fn test_record_display() {
        let record = VersionRecord::develop(false);
        assert_eq!(
            record.to_string(),
            "Version(main, /main/index.html, current=false)"
        );
    }

    #[test]
    fn test_record_serializes_template_fields() {
        let record = VersionRecord::released("3.9.X", Version::new(3, 9, None), true);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "3.9");
        assert_eq!(value["url"], "/3.9.X/index.html");
        assert_eq!(value["version"], "3.9");
        assert_eq!(value["is_current"], true);
        assert_eq!(value["is_released"], true);
        assert_eq!(value["ref"], "3.9.X");
    }
}
