//! Rename outcome and its JSON wire form
//!
//! The host always answers a rename with one JSON object carrying a boolean
//! `success`, plus `newName` on success or `error` on failure. `errorKind`
//! and `message` are optional extras; a reader must not require them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::RENAMED_MESSAGE;
use crate::errors::{response_parse_error, Result};

/// Classification of a failed rename
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyTemplate,
    NoProjectOpen,
    UnsavedProject,
    FolderDepthOutOfRange,
    SequenceNotFound,
    HostFault,
    /// Sent by a newer host; treated like any other failure
    #[serde(other)]
    Unknown,
}

/// Reason a rename did not happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// Template name is empty or whitespace only
    EmptyTemplate,
    /// The host has no project open
    NoProjectOpen,
    /// The open project has no backing file yet
    UnsavedProject,
    /// The project path has fewer folders than the requested depth
    FolderDepthOutOfRange { depth: i64 },
    /// No sequence is named exactly like the template
    SequenceNotFound { template: String },
    /// The host object model failed unexpectedly
    HostFault { message: String },
}

impl RenameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenameError::EmptyTemplate => ErrorKind::EmptyTemplate,
            RenameError::NoProjectOpen => ErrorKind::NoProjectOpen,
            RenameError::UnsavedProject => ErrorKind::UnsavedProject,
            RenameError::FolderDepthOutOfRange { .. } => ErrorKind::FolderDepthOutOfRange,
            RenameError::SequenceNotFound { .. } => ErrorKind::SequenceNotFound,
            RenameError::HostFault { .. } => ErrorKind::HostFault,
        }
    }
}

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameError::EmptyTemplate => write!(f, "Template sequence name is empty"),
            RenameError::NoProjectOpen => write!(f, "No project open"),
            RenameError::UnsavedProject => write!(f, "Project has not been saved yet"),
            RenameError::FolderDepthOutOfRange { depth } => {
                write!(f, "Unable to extract folder name (depth: {depth})")
            }
            RenameError::SequenceNotFound { template } => {
                write!(f, "Sequence '{template}' not found")
            }
            RenameError::HostFault { message } => write!(f, "Error: {message}"),
        }
    }
}

impl std::error::Error for RenameError {}

/// Outcome of one rename invocation: the new sequence name, or why not
pub type RenameResult = std::result::Result<String, RenameError>;

/// Wire form of a [`RenameResult`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenameResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RenameResponse {
    pub fn renamed(new_name: &str) -> Self {
        RenameResponse {
            success: true,
            new_name: Some(new_name.to_string()),
            error: None,
            error_kind: None,
            message: Some(RENAMED_MESSAGE.to_string()),
        }
    }

    pub fn failed(error: &RenameError) -> Self {
        RenameResponse {
            success: false,
            new_name: None,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
            message: None,
        }
    }

    /// Serialise to the JSON text returned across the bridge
    pub fn to_json(&self) -> String {
        // A struct of strings, bools and unit enums always serialises.
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":"Error: response serialisation failed"}"#.to_string()
        })
    }

    /// Parse the text returned by the host
    ///
    /// # Errors
    /// Returns a response parsing error when the text is not JSON, is missing
    /// `success`, or carries neither `newName` on success nor `error` on failure.
    pub fn from_json(text: &str) -> Result<RenameResponse> {
        let response: RenameResponse = serde_json::from_str(text.trim())
            .map_err(|e| response_parse_error(text, &e.to_string()))?;

        if response.success && response.new_name.is_none() {
            return Err(response_parse_error(text, "success without newName"));
        }
        if !response.success && response.error.is_none() {
            return Err(response_parse_error(text, "failure without error"));
        }
        Ok(response)
    }

    /// True when the host reported that the template sequence is absent
    pub fn is_sequence_not_found(&self) -> bool {
        self.error_kind == Some(ErrorKind::SequenceNotFound)
    }
}

impl From<&RenameResult> for RenameResponse {
    fn from(result: &RenameResult) -> Self {
        match result {
            Ok(new_name) => RenameResponse::renamed(new_name),
            Err(error) => RenameResponse::failed(error),
        }
    }
}
