//! In-memory host project
//!
//! Thread-safe stand-in for the editing application's project model. Clones
//! share the same project, so a caller can keep a handle to inspect what the
//! runtime did on another thread.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::{host_error, Result};

use super::project::{HostProject, SequenceHandle};

#[derive(Debug, Default)]
struct ProjectState {
    open: bool,
    path: Option<String>,
    sequences: Vec<String>,
    fault: Option<String>,
}

/// Project kept entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryProject {
    state: Arc<Mutex<ProjectState>>,
}

impl MemoryProject {
    /// A host with no project open
    pub fn closed() -> Self {
        MemoryProject::default()
    }

    /// An open project that has never been saved
    pub fn unsaved() -> Self {
        let project = MemoryProject::default();
        project.with_state(|state| state.open = true);
        project
    }

    /// An open project saved at `path` with the given sequences
    pub fn saved(path: &str, sequences: &[&str]) -> Self {
        let project = MemoryProject::unsaved();
        project.with_state(|state| {
            state.path = Some(path.to_string());
            state.sequences = sequences.iter().map(|name| name.to_string()).collect();
        });
        project
    }

    pub fn close(&self) {
        self.with_state(|state| {
            state.open = false;
            state.path = None;
            state.sequences.clear();
        });
    }

    /// Save (or "save as") the project to `path`
    pub fn save_as(&self, path: &str) {
        self.with_state(|state| state.path = Some(path.to_string()));
    }

    pub fn add_sequence(&self, name: &str) {
        self.with_state(|state| state.sequences.push(name.to_string()));
    }

    /// Current sequence names, in project order
    pub fn sequence_names(&self) -> Vec<String> {
        self.with_state(|state| state.sequences.clone())
    }

    /// Make every subsequent host call fail with `message`
    pub fn inject_fault(&self, message: &str) {
        self.with_state(|state| state.fault = Some(message.to_string()));
    }

    pub fn clear_fault(&self) {
        self.with_state(|state| state.fault = None);
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut ProjectState) -> T) -> T {
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    fn checked(&self) -> Result<MutexGuard<'_, ProjectState>> {
        let guard = self
            .state
            .lock()
            .map_err(|_| host_error("project state is poisoned"))?;
        if let Some(message) = guard.fault.clone() {
            return Err(host_error(&message));
        }
        Ok(guard)
    }
}

/// Handle to one sequence of a [`MemoryProject`]
#[derive(Debug, Clone)]
pub struct MemorySequence {
    project: MemoryProject,
    index: usize,
}

impl SequenceHandle for MemorySequence {
    fn name(&self) -> Result<String> {
        let state = self.project.checked()?;
        state
            .sequences
            .get(self.index)
            .cloned()
            .ok_or_else(|| host_error("sequence no longer exists"))
    }

    fn rename(&self, new_name: &str) -> Result<()> {
        let mut state = self.project.checked()?;
        let slot = state
            .sequences
            .get_mut(self.index)
            .ok_or_else(|| host_error("sequence no longer exists"))?;
        *slot = new_name.to_string();
        Ok(())
    }
}

impl HostProject for MemoryProject {
    type Sequence = MemorySequence;

    fn is_project_open(&self) -> Result<bool> {
        Ok(self.checked()?.open)
    }

    fn project_file_path(&self) -> Result<Option<String>> {
        Ok(self.checked()?.path.clone())
    }

    fn sequences(&self) -> Result<Vec<MemorySequence>> {
        let count = self.checked()?.sequences.len();
        Ok((0..count)
            .map(|index| MemorySequence {
                project: self.clone(),
                index,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let project = MemoryProject::saved("/p/x.prproj", &["A"]);
        let other = project.clone();
        other.add_sequence("B");
        assert_eq!(project.sequence_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_rename_through_handle() {
        let project = MemoryProject::saved("/p/x.prproj", &["A", "B"]);
        let sequences = project.sequences().unwrap();
        sequences[1].rename("Renamed").unwrap();
        assert_eq!(project.sequence_names(), vec!["A", "Renamed"]);
        assert_eq!(sequences[1].name().unwrap(), "Renamed");
    }

    #[test]
    fn test_lifecycle() {
        let project = MemoryProject::closed();
        assert!(!project.is_project_open().unwrap());

        let project = MemoryProject::unsaved();
        assert!(project.is_project_open().unwrap());
        assert_eq!(project.project_file_path().unwrap(), None);

        project.save_as("/p/x.prproj");
        assert_eq!(
            project.project_file_path().unwrap().as_deref(),
            Some("/p/x.prproj")
        );

        project.close();
        assert!(!project.is_project_open().unwrap());
    }

    #[test]
    fn test_injected_fault() {
        let project = MemoryProject::saved("/p/x.prproj", &["A"]);
        let handle = project.sequences().unwrap().remove(0);

        project.inject_fault("host busy");
        assert_eq!(project.is_project_open().unwrap_err().to_string(), "host busy");
        assert!(handle.name().is_err());

        project.clear_fault();
        assert_eq!(handle.name().unwrap(), "A");
    }

    #[test]
    fn test_stale_handle() {
        let project = MemoryProject::saved("/p/x.prproj", &["A"]);
        let handle = project.sequences().unwrap().remove(0);
        project.close();
        assert!(handle.rename("B").is_err());
    }
}
