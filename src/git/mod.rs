//! Branch discovery abstraction layer
//!
//! The version catalog only needs two facts from version control: the name of
//! the checked-out branch and the names of all local branches. The
//! [BranchSource] trait captures exactly that, so the catalog can be built
//! from a real repository or from fixed data in tests.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use doc_versions::git::BranchSource;
//! # fn example<S: BranchSource>(source: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let current = source.current_branch()?;
//! let branches = source.branch_names()?;
//! println!("on {} of {} branches", current, branches.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only access to branch names in a repository.
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
pub trait BranchSource: Send + Sync {
    /// Short name of the checked-out branch.
    ///
    /// Returns an empty string when HEAD is detached.
    fn current_branch(&self) -> Result<String>;

    /// Short names of all local branches, in no particular order.
    fn branch_names(&self) -> Result<Vec<String>>;
}
