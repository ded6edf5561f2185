//! glab CLI configuration
//!
//! Loads glab's config.yml as an ordered YAML tree, patches the per-host
//! credentials and writes it back atomically.

mod document;
mod file;

pub use document::GlabConfig;
pub use file::GlabConfigFile;
