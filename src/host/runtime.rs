//! Host-side rename pipeline and call dispatcher
//!
//! Everything that leaves this module is a value: failures of the pipeline are
//! [`RenameError`]s, faults and panics of the host object model become
//! [`RenameError::HostFault`], and [`HostRuntime::evaluate`] always answers
//! with a string.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, info, warn};
use serde_json::json;

use crate::constants::{
    DEFAULT_FOLDER_DEPTH, FN_HAS_SEQUENCE, FN_LIST_SEQUENCES, FN_RENAME_SEQUENCE,
    FN_SEQUENCE_COUNT,
};
use crate::errors::Result;
use crate::protocol::{RenameError, RenameResponse, RenameResult, ScriptArg, ScriptCall};

use super::folder::derive_folder_name;
use super::lookup::{find_sequence_by_name, list_sequence_names};
use super::project::{HostProject, SequenceHandle};

/// Rename the sequence named `template_name` after a folder of the project path
///
/// Checks run in order and stop at the first failure: blank template, no open
/// project, unsaved project, depth beyond the path's folders, no matching
/// sequence. Only the first sequence named exactly `template_name` is renamed.
pub fn rename_sequence<P: HostProject>(
    project: &P,
    template_name: &str,
    folder_depth: u32,
) -> RenameResult {
    rename_at_depth(project, template_name, i64::from(folder_depth))
}

/// Like [`rename_sequence`] for a depth taken verbatim from the wire
///
/// A negative or oversized depth fails at the depth check, after the project
/// checks.
pub fn rename_at_depth<P: HostProject>(
    project: &P,
    template_name: &str,
    folder_depth: i64,
) -> RenameResult {
    if template_name.trim().is_empty() {
        return Err(RenameError::EmptyTemplate);
    }

    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        try_rename(project, template_name, folder_depth)
    }));

    match attempt {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(fault)) => {
            warn!("Host fault while renaming '{template_name}': {fault}");
            Err(RenameError::HostFault {
                message: fault.to_string(),
            })
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("Host panicked while renaming '{template_name}': {message}");
            Err(RenameError::HostFault { message })
        }
    }
}

fn try_rename<P: HostProject>(
    project: &P,
    template_name: &str,
    folder_depth: i64,
) -> Result<RenameResult> {
    if !project.is_project_open()? {
        return Ok(Err(RenameError::NoProjectOpen));
    }

    let path = match project.project_file_path()? {
        Some(path) if !path.is_empty() => path,
        _ => return Ok(Err(RenameError::UnsavedProject)),
    };

    let folder_name = usize::try_from(folder_depth)
        .ok()
        .and_then(|depth| derive_folder_name(&path, depth));
    let Some(folder_name) = folder_name else {
        return Ok(Err(RenameError::FolderDepthOutOfRange {
            depth: folder_depth,
        }));
    };

    let Some(sequence) = find_sequence_by_name(project.sequences()?, template_name)? else {
        return Ok(Err(RenameError::SequenceNotFound {
            template: template_name.to_string(),
        }));
    };

    sequence.rename(&folder_name)?;
    info!("Renamed sequence '{template_name}' to '{folder_name}'");

    Ok(Ok(folder_name))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "host script panicked".to_string()
    }
}

/// Host script runtime answering call expressions sent by the panel
#[derive(Debug, Clone)]
pub struct HostRuntime<P> {
    project: P,
}

impl<P: HostProject> HostRuntime<P> {
    pub fn new(project: P) -> Self {
        HostRuntime { project }
    }

    pub fn project(&self) -> &P {
        &self.project
    }

    pub fn rename_sequence(&self, template_name: &str, folder_depth: u32) -> RenameResult {
        rename_sequence(&self.project, template_name, folder_depth)
    }

    /// Whether a sequence named exactly `name` exists; faults read as absent
    pub fn has_sequence(&self, name: &str) -> bool {
        let found = self
            .project
            .sequences()
            .and_then(|sequences| find_sequence_by_name(sequences, name));
        match found {
            Ok(sequence) => sequence.is_some(),
            Err(fault) => {
                debug!("Sequence probe failed: {fault}");
                false
            }
        }
    }

    /// Number of open sequences, `-1` when no project is open or the host faults
    pub fn sequence_count(&self) -> i64 {
        let count = self.project.is_project_open().and_then(|open| {
            if open {
                self.project.sequences().map(|s| s.len() as i64)
            } else {
                Ok(-1)
            }
        });
        count.unwrap_or(-1)
    }

    /// JSON listing of every sequence name
    pub fn list_sequences(&self) -> String {
        match list_sequence_names(&self.project) {
            Ok(names) => {
                let count = names.len();
                json!({ "success": true, "sequences": names, "count": count }).to_string()
            }
            Err(fault) => json!({ "success": false, "error": fault.to_string() }).to_string(),
        }
    }

    /// Evaluate a call expression and return its textual answer
    pub fn evaluate(&self, source: &str) -> String {
        debug!("Evaluating {source}");

        let call = match ScriptCall::parse(source) {
            Ok(call) => call,
            Err(e) => {
                warn!("{e}");
                return host_fault_json(&e.to_string());
            }
        };

        match call.function.as_str() {
            FN_RENAME_SEQUENCE => self.evaluate_rename(&call),
            FN_HAS_SEQUENCE => {
                let name = call.arg(0).and_then(ScriptArg::as_str).unwrap_or_default();
                self.has_sequence(name).to_string()
            }
            FN_SEQUENCE_COUNT => self.sequence_count().to_string(),
            FN_LIST_SEQUENCES => self.list_sequences(),
            other => {
                warn!("Unknown host function '{other}'");
                host_fault_json(&format!("Unknown host function '{other}'"))
            }
        }
    }

    fn evaluate_rename(&self, call: &ScriptCall) -> String {
        let template_name = call.arg(0).and_then(ScriptArg::as_str).unwrap_or_default();

        let requested = match call.arg(1) {
            Some(ScriptArg::Int(depth)) => Some(*depth),
            Some(ScriptArg::Str(depth)) => depth.trim().parse::<i64>().ok(),
            None => None,
        };

        let depth = requested.unwrap_or_else(|| i64::from(DEFAULT_FOLDER_DEPTH));
        let result = rename_at_depth(&self.project, template_name, depth);

        RenameResponse::from(&result).to_json()
    }
}

fn host_fault_json(message: &str) -> String {
    RenameResponse::failed(&RenameError::HostFault {
        message: message.to_string(),
    })
    .to_json()
}
