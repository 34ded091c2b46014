//! Domain logic - pure rules for turning branch names into documentation versions

pub mod branch;
pub mod record;
pub mod version;

pub use branch::{BranchPattern, DEFAULT_INCLUDE_BRANCH_PATTERN};
pub use record::{VersionRecord, DEVELOP_NAME};
pub use version::Version;
