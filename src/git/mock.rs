use crate::error::{DocVersionsError, Result};
use crate::git::BranchSource;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    current_branch: String,
    branches: Vec<String>,
    fail_current_branch: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a local branch
    pub fn add_branch(&mut self, name: impl Into<String>) {
        self.branches.push(name.into());
    }

    /// Set the checked-out branch; an empty name means detached HEAD
    pub fn set_current_branch(&mut self, name: impl Into<String>) {
        self.current_branch = name.into();
    }

    /// Make `current_branch` fail, as a broken git invocation would
    pub fn fail_current_branch(&mut self) {
        self.fail_current_branch = true;
    }
}

impl BranchSource for MockRepository {
    fn current_branch(&self) -> Result<String> {
        if self.fail_current_branch {
            return Err(DocVersionsError::Git(git2::Error::from_str(
                "cannot resolve HEAD",
            )));
        }
        Ok(self.current_branch.clone())
    }

    fn branch_names(&self) -> Result<Vec<String>> {
        Ok(self.branches.clone())
    }
}
