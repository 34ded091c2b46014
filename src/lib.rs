pub mod catalog;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;

pub use catalog::VersionCatalog;
pub use error::{DocVersionsError, Result};
