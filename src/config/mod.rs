//! Configuration module
//!
//! Panel settings and their persistence.

pub mod loader;
mod model;

pub use loader::SettingsFile;
pub use model::{RenameConfig, Settings};
