use sequence_renamer::errors::{Result, host_error};
use sequence_renamer::host::{
    HostProject, HostRuntime, MemoryProject, SequenceHandle, rename_sequence,
};
use sequence_renamer::protocol::RenameError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = "/Volumes/Drive/ClientX/2024-Project/file.prproj";

    /// Project double counting every call the pipeline makes
    #[derive(Default)]
    struct SpyProject {
        open: bool,
        path: Option<String>,
        names: Rc<RefCell<Vec<String>>>,
        open_calls: Cell<usize>,
        path_calls: Cell<usize>,
        sequence_calls: Cell<usize>,
        fail_rename: bool,
    }

    struct SpySequence {
        names: Rc<RefCell<Vec<String>>>,
        index: usize,
        fail_rename: bool,
    }

    impl SequenceHandle for SpySequence {
        fn name(&self) -> Result<String> {
            Ok(self.names.borrow()[self.index].clone())
        }

        fn rename(&self, new_name: &str) -> Result<()> {
            if self.fail_rename {
                return Err(host_error("sequence is locked"));
            }
            self.names.borrow_mut()[self.index] = new_name.to_string();
            Ok(())
        }
    }

    impl HostProject for SpyProject {
        type Sequence = SpySequence;

        fn is_project_open(&self) -> Result<bool> {
            self.open_calls.set(self.open_calls.get() + 1);
            Ok(self.open)
        }

        fn project_file_path(&self) -> Result<Option<String>> {
            self.path_calls.set(self.path_calls.get() + 1);
            Ok(self.path.clone())
        }

        fn sequences(&self) -> Result<Vec<SpySequence>> {
            self.sequence_calls.set(self.sequence_calls.get() + 1);
            let count = self.names.borrow().len();
            Ok((0..count)
                .map(|index| SpySequence {
                    names: Rc::clone(&self.names),
                    index,
                    fail_rename: self.fail_rename,
                })
                .collect())
        }
    }

    fn spy(names: &[&str]) -> SpyProject {
        SpyProject {
            open: true,
            path: Some(PROJECT.to_string()),
            names: Rc::new(RefCell::new(names.iter().map(|n| n.to_string()).collect())),
            ..SpyProject::default()
        }
    }

    #[test]
    fn test_blank_template_touches_nothing() {
        for template in ["", " ", "\t\n"] {
            let project = spy(&["TEMPLATE"]);
            assert_eq!(
                rename_sequence(&project, template, 2),
                Err(RenameError::EmptyTemplate)
            );
            assert_eq!(project.open_calls.get(), 0);
            assert_eq!(project.path_calls.get(), 0, "derivation must not run");
            assert_eq!(project.sequence_calls.get(), 0, "lookup must not run");
        }
    }

    #[test]
    fn test_no_project_stops_before_path() {
        let project = SpyProject::default();
        assert_eq!(
            rename_sequence(&project, "TEMPLATE", 2),
            Err(RenameError::NoProjectOpen)
        );
        assert_eq!(project.path_calls.get(), 0);
        assert_eq!(project.sequence_calls.get(), 0);
    }

    #[test]
    fn test_depth_out_of_range_skips_lookup() {
        let project = spy(&["TEMPLATE"]);
        let result = rename_sequence(&project, "TEMPLATE", 5);
        assert_eq!(result, Err(RenameError::FolderDepthOutOfRange { depth: 5 }));
        assert!(result.unwrap_err().to_string().contains('5'));
        assert_eq!(project.sequence_calls.get(), 0);
        assert_eq!(project.names.borrow().as_slice(), ["TEMPLATE"]);
    }

    #[test]
    fn test_not_found_names_the_template() {
        let project = spy(&["Intro", "template"]);
        let error = rename_sequence(&project, "TEMPLATE", 0).unwrap_err();
        assert_eq!(error.to_string(), "Sequence 'TEMPLATE' not found");
        assert_eq!(project.names.borrow().as_slice(), ["Intro", "template"]);
    }

    #[test]
    fn test_renames_only_the_first_exact_match() {
        let project = spy(&["Intro", "TEMPLATE", "TEMPLATE"]);
        assert_eq!(
            rename_sequence(&project, "TEMPLATE", 0),
            Ok("2024-Project".to_string())
        );
        assert_eq!(
            project.names.borrow().as_slice(),
            ["Intro", "2024-Project", "TEMPLATE"]
        );
    }

    #[test]
    fn test_second_rename_reports_not_found() {
        let project = spy(&["TEMPLATE"]);
        assert_eq!(
            rename_sequence(&project, "TEMPLATE", 1),
            Ok("ClientX".to_string())
        );
        assert_eq!(
            rename_sequence(&project, "TEMPLATE", 1),
            Err(RenameError::SequenceNotFound {
                template: "TEMPLATE".to_string()
            })
        );
        assert_eq!(project.names.borrow().as_slice(), ["ClientX"]);
    }

    #[test]
    fn test_failed_host_rename_is_host_fault() {
        let project = SpyProject {
            fail_rename: true,
            ..spy(&["TEMPLATE"])
        };
        assert_eq!(
            rename_sequence(&project, "TEMPLATE", 0),
            Err(RenameError::HostFault {
                message: "sequence is locked".to_string()
            })
        );
    }

    #[test]
    fn test_runtime_over_memory_project() {
        let project = MemoryProject::saved("C:\\Media\\Client\\Job\\cut.prproj", &["TEMPLATE"]);
        let runtime = HostRuntime::new(project.clone());
        assert_eq!(runtime.rename_sequence("TEMPLATE", 1), Ok("Client".to_string()));
        assert_eq!(project.sequence_names(), vec!["Client"]);
        assert!(!runtime.has_sequence("TEMPLATE"));
        assert_eq!(runtime.sequence_count(), 1);
    }
}
