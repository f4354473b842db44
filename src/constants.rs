//! Constants used throughout the crate
//!
//! Host function names are part of the call convention shared with the host
//! runtime, so they must stay byte-identical on both sides.

use std::time::Duration;

/// Host function renaming the template sequence
pub const FN_RENAME_SEQUENCE: &str = "SequenceRenamer_renameSequence";

/// Host function reporting whether a sequence with the given name exists
pub const FN_HAS_SEQUENCE: &str = "SequenceRenamer_hasSequence";

/// Host function reporting the number of open sequences (`-1` without a project)
pub const FN_SEQUENCE_COUNT: &str = "SequenceRenamer_sequenceCount";

/// Host function listing every sequence name
pub const FN_LIST_SEQUENCES: &str = "SequenceRenamer_listAllSequences";

/// Folder depth used when none is configured or the host receives none
pub const DEFAULT_FOLDER_DEPTH: u32 = 2;

/// Template name on first install (empty disables renaming)
pub const DEFAULT_TEMPLATE_NAME: &str = "";

/// Panel language on first install
pub const DEFAULT_LANGUAGE: &str = "en";

/// Interval between two auto-rename polls
pub const MONITOR_INTERVAL: Duration = Duration::from_millis(2500);

/// Directory holding the settings file, under the platform config directory
pub const SETTINGS_DIRECTORY: &str = "PremiereSequenceRenamer";

/// Name of the settings file
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Message attached to a successful rename response
pub const RENAMED_MESSAGE: &str = "Sequence renamed successfully";

/// Status shown when auto mode is switched on
pub const AUTO_ENABLED_STATUS: &str = "Auto-rename enabled";

/// Status shown when auto mode is switched off
pub const AUTO_DISABLED_STATUS: &str = "Auto-rename disabled";

/// Prefix of the status shown after a successful rename
pub const RENAMED_STATUS: &str = "Sequence renamed to";

/// Prefix of the status shown when the host answer cannot be read
pub const MALFORMED_STATUS: &str = "Error:";
