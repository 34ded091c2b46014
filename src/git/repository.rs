use crate::error::Result;
use git2::{BranchType, Repository as Git2Repo};
use std::path::Path;

const HEADS_PREFIX: &str = "refs/heads/";

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::BranchSource for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        // Read HEAD symbolically so an unborn branch still reports its name.
        let head = self.repo.find_reference("HEAD")?;

        let name = head
            .symbolic_target()
            .and_then(|target| target.strip_prefix(HEADS_PREFIX))
            .unwrap_or_default();

        Ok(name.to_string())
    }

    fn branch_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }
}

// SAFETY: Git2Repository is only used for read operations, which libgit2
// supports from multiple threads.
unsafe impl Sync for Git2Repository {}
