//! Settings data structures

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_FOLDER_DEPTH, DEFAULT_LANGUAGE, DEFAULT_TEMPLATE_NAME};

/// Persisted panel settings
///
/// Field names are camelCase on disk. Missing fields take their defaults so a
/// settings file written by an older panel still loads. A depth that is not a
/// non-negative integer (older panels write `null` for an empty input) also
/// takes the default instead of discarding the whole file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Rename automatically whenever a template sequence appears
    pub auto_rename: bool,
    /// Name of the sequence to rename; empty disables renaming
    pub template_name: String,
    /// How many folders above the project folder to take the name from
    #[serde(deserialize_with = "lenient_depth")]
    pub folder_depth: u32,
    /// Panel language code
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            auto_rename: false,
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            folder_depth: DEFAULT_FOLDER_DEPTH,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

fn lenient_depth<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|depth| u32::try_from(depth).ok())
        .unwrap_or(DEFAULT_FOLDER_DEPTH))
}

impl Settings {
    /// Snapshot used for a single rename invocation
    pub fn rename_config(&self) -> RenameConfig {
        RenameConfig {
            template_name: self.template_name.clone(),
            folder_depth: self.folder_depth,
        }
    }
}

/// Configuration of one rename invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    pub template_name: String,
    pub folder_depth: u32,
}

impl RenameConfig {
    /// False when the template name is blank
    pub fn is_enabled(&self) -> bool {
        !self.template_name.trim().is_empty()
    }
}
