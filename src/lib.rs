//! Renames a template sequence after a folder of its project's path.
//!
//! The crate has two halves joined by a textual remote-evaluation bridge:
//! [`host`] runs next to the editing application's project model and
//! [`panel`] drives it from the settings panel.

pub mod config;
pub mod constants;
pub mod errors;
pub mod host;
pub mod logging;
pub mod panel;
pub mod protocol;

pub use errors::{Error, Result};

pub mod prelude {
    pub use crate::config::{RenameConfig, Settings, SettingsFile};
    pub use crate::errors::{
        call_parse_error, generic_error, host_error, response_parse_error, settings_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::host::{
        HostProject, HostRuntime, MemoryProject, SequenceHandle, derive_folder_name,
        rename_sequence,
    };
    pub use crate::logging::{LogLevel, init_default_logger, init_logger};
    pub use crate::panel::{
        EvalBridge, LocalBridge, LogNotifier, Notifier, PanelController, Status, StatusKind,
    };
    pub use crate::protocol::{RenameError, RenameResponse, RenameResult, ScriptCall};
}
