//! Capability interface over the host application's object model
//!
//! The rename pipeline only ever sees a project through these traits, so it
//! runs the same against the editing application and an in-memory project.

use crate::errors::Result;

/// Handle to one sequence owned by the host project
pub trait SequenceHandle {
    /// Current display name
    fn name(&self) -> Result<String>;

    /// Replace the display name
    fn rename(&self, new_name: &str) -> Result<()>;
}

/// The project currently open in the host application
pub trait HostProject {
    type Sequence: SequenceHandle;

    fn is_project_open(&self) -> Result<bool>;

    /// Path of the project file, `None` until the project is first saved
    fn project_file_path(&self) -> Result<Option<String>>;

    /// Open sequences, in project order
    fn sequences(&self) -> Result<Vec<Self::Sequence>>;
}
