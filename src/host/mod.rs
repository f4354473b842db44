//! Host script runtime
//!
//! The part of the system that runs next to the editing application's project
//! model: path parsing, sequence lookup and the rename pipeline.

pub mod folder;
pub mod lookup;
pub mod memory;
pub mod project;
pub mod runtime;

pub use folder::{PathSeparator, derive_folder_name, derive_folder_name_with, normalize_separators};
pub use lookup::{find_sequence_by_name, list_sequence_names};
pub use memory::{MemoryProject, MemorySequence};
pub use project::{HostProject, SequenceHandle};
pub use runtime::{HostRuntime, rename_at_depth, rename_sequence};
