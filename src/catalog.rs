//! Version catalog - the list of documentation versions offered by a version switcher.
//!
//! The catalog is computed once from a snapshot of branch names:
//!
//! 1. Branches not matching the include pattern are skipped
//! 2. Matching branches become released versions, one per `MAJOR.MINOR` line
//!    (the greatest full version wins a collision)
//! 3. Released versions are sorted newest first
//! 4. The synthetic develop version is placed in front
//!
//! The stable version is the newest released version, or the develop version
//! when nothing has been released yet.

use crate::config::VersionsConfig;
use crate::domain::{BranchPattern, VersionRecord};
use crate::error::{DocVersionsError, Result};
use crate::git::BranchSource;
use serde::{Serialize, Serializer};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Index of the develop record in [`VersionCatalog::versions`].
const DEVELOP_INDEX: usize = 0;

/// Ordered, immutable set of documentation versions.
#[derive(Debug, Clone)]
pub struct VersionCatalog {
    versions: Vec<VersionRecord>,
    stable_index: usize,
    current_index: usize,
}

impl VersionCatalog {
    /// Build the catalog from a branch snapshot.
    ///
    /// # Arguments
    /// * `config` - Include pattern and develop branch name
    /// * `current_branch` - Checked-out branch, empty when unknown or detached
    /// * `branch_names` - All branch names, in any order
    ///
    /// # Errors
    /// * `Config` - the include pattern is invalid
    /// * `MalformedBranch` - a matching branch has a non-numeric version
    /// * `AmbiguousCurrentBranch` - not exactly one version is current
    pub fn build<S: AsRef<str>>(
        config: &VersionsConfig,
        current_branch: &str,
        branch_names: &[S],
    ) -> Result<Self> {
        let pattern = BranchPattern::new(&config.include_branch_pattern)?;

        let mut versions = released_versions(&pattern, current_branch, branch_names)?;

        let mut develop = VersionRecord::develop(current_branch == config.develop_branch);

        // Nothing released yet: the develop line is all there is.
        let stable_index = if versions.is_empty() {
            develop.mark_released();
            DEVELOP_INDEX
        } else {
            DEVELOP_INDEX + 1
        };

        versions.insert(DEVELOP_INDEX, develop);

        let current: Vec<usize> = versions
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_current())
            .map(|(i, _)| i)
            .collect();

        let current_index = match current.as_slice() {
            [index] => *index,
            _ => {
                return Err(DocVersionsError::AmbiguousCurrentBranch {
                    current_branch: current_branch.to_string(),
                    matches: current.len(),
                })
            }
        };

        debug!(
            versions = versions.len(),
            stable = %versions[stable_index].display_name(),
            current = %versions[current_index].display_name(),
            "Built version catalog"
        );

        Ok(VersionCatalog {
            versions,
            stable_index,
            current_index,
        })
    }

    /// Build the catalog from branches reported by a [`BranchSource`].
    ///
    /// A failure to resolve the current branch is treated as an empty name, so
    /// the build fails with `AmbiguousCurrentBranch` rather than a git error.
    /// A failure to list branches is returned as is.
    pub fn from_source<B: BranchSource + ?Sized>(
        config: &VersionsConfig,
        source: &B,
    ) -> Result<Self> {
        let current_branch = source.current_branch().unwrap_or_else(|e| {
            warn!(error = %e, "Cannot determine current branch");
            String::new()
        });
        let branch_names = source.branch_names()?;

        Self::build(config, &current_branch, &branch_names)
    }

    /// All versions: develop first, then released versions newest first.
    pub fn versions(&self) -> &[VersionRecord] {
        &self.versions
    }

    /// The released versions, newest first. Empty when only develop exists.
    pub fn released(&self) -> &[VersionRecord] {
        &self.versions[DEVELOP_INDEX + 1..]
    }

    pub fn develop_version(&self) -> &VersionRecord {
        &self.versions[DEVELOP_INDEX]
    }

    pub fn stable_version(&self) -> &VersionRecord {
        &self.versions[self.stable_index]
    }

    pub fn current_version(&self) -> &VersionRecord {
        &self.versions[self.current_index]
    }
}

/// Parse, deduplicate by `MAJOR.MINOR`, and sort released versions newest first.
fn released_versions<S: AsRef<str>>(
    pattern: &BranchPattern,
    current_branch: &str,
    branch_names: &[S],
) -> Result<Vec<VersionRecord>> {
    let mut lines: BTreeMap<(u32, u32), VersionRecord> = BTreeMap::new();

    for branch in branch_names.iter().map(AsRef::as_ref) {
        let Some(version) = pattern.version_of(branch)? else {
            continue;
        };
        let record = VersionRecord::released(branch, version, branch == current_branch);

        // Replace only on a strictly greater version; the first seen wins ties.
        match lines.entry(version.major_minor()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if record.semantic_version() > slot.get().semantic_version() {
                    debug!(kept = branch, dropped = slot.get().source_ref(), "Duplicate version line");
                    slot.insert(record);
                } else {
                    debug!(kept = slot.get().source_ref(), dropped = branch, "Duplicate version line");
                }
            }
        }
    }

    Ok(lines.into_values().rev().collect())
}

impl Serialize for VersionCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("VersionCatalog", 4)?;
        state.serialize_field("versions", &self.versions)?;
        state.serialize_field("develop_version", self.develop_version())?;
        state.serialize_field("stable_version", self.stable_version())?;
        state.serialize_field("current_version", self.current_version())?;
        state.end()
    }
}
