use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the Sequence Renamer crate
///
/// Rename outcomes are not errors of this type: they travel as
/// [`RenameError`](crate::protocol::RenameError) values. This type covers the
/// plumbing around them (host faults, marshalling, settings I/O).
#[derive(Debug)]
pub enum Error {
    /// Error raised by the host application object model
    Host { message: String },
    /// Error when a call expression cannot be parsed
    CallParse { source_text: String, detail: String },
    /// Error when a host response cannot be parsed
    ResponseParse { response: String, detail: String },
    /// Error related to reading or writing the settings file
    Settings {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to JSON (de)serialisation
    Json { source: serde_json::Error },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Host { message } => write!(f, "{message}"),
            Error::CallParse {
                source_text,
                detail,
            } => {
                write!(f, "Invalid call expression '{source_text}': {detail}")
            }
            Error::ResponseParse { response, detail } => {
                write!(f, "Invalid host response '{response}': {detail}")
            }
            Error::Settings {
                path, operation, ..
            } => {
                write!(f, "Failed to {} settings file: {}", operation, path.display())
            }
            Error::Json { source } => write!(f, "JSON error: {source}"),
            Error::Generic { message } => write!(f, "{message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Settings { source, .. } => Some(source),
            Error::Json { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Settings {
            source: err,
            path: PathBuf::new(),
            operation: "access".to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json { source: err }
    }
}

/// Custom Result type for the Sequence Renamer crate
///
/// # Examples
/// ```
/// use sequence_renamer::prelude::{Result, host_error};
///
/// fn project_path(saved: bool) -> Result<String> {
///     if saved {
///         Ok("/Projects/Client/edit.prproj".to_string())
///     } else {
///         Err(host_error("project is locked"))
///     }
/// }
/// # assert!(project_path(false).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a host fault
pub fn host_error(message: &str) -> Error {
    Error::Host {
        message: message.to_string(),
    }
}

/// Helper function to create a call parsing error
pub fn call_parse_error(source_text: &str, detail: &str) -> Error {
    Error::CallParse {
        source_text: source_text.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a response parsing error
pub fn response_parse_error(response: &str, detail: &str) -> Error {
    Error::ResponseParse {
        response: response.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a settings file error
pub fn settings_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::Settings {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
