//! Sequence lookup
//!
//! Linear scan in project order. Projects hold tens of sequences, so there is
//! no index to keep in sync with the host.

use log::trace;

use crate::errors::Result;

use super::project::{HostProject, SequenceHandle};

/// First sequence whose name equals `target` exactly
///
/// Comparison is case-sensitive and untrimmed. Later duplicates are never
/// returned.
pub fn find_sequence_by_name<S: SequenceHandle>(
    sequences: impl IntoIterator<Item = S>,
    target: &str,
) -> Result<Option<S>> {
    for (index, sequence) in sequences.into_iter().enumerate() {
        if sequence.name()? == target {
            trace!("Sequence '{target}' found at index {index}");
            return Ok(Some(sequence));
        }
    }
    Ok(None)
}

/// Names of every open sequence, in project order
pub fn list_sequence_names<P: HostProject>(project: &P) -> Result<Vec<String>> {
    project
        .sequences()?
        .iter()
        .map(SequenceHandle::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::host_error;
    use std::cell::Cell;

    struct Named<'a> {
        index: usize,
        name: &'static str,
        reads: &'a Cell<usize>,
    }

    impl SequenceHandle for Named<'_> {
        fn name(&self) -> Result<String> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.name.to_string())
        }

        fn rename(&self, _new_name: &str) -> Result<()> {
            Ok(())
        }
    }

    fn named<'a>(names: &[&'static str], reads: &'a Cell<usize>) -> Vec<Named<'a>> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| Named {
                index,
                name: *name,
                reads,
            })
            .collect()
    }

    #[test]
    fn test_first_match_wins() {
        let reads = Cell::new(0);
        let sequences = named(&["Intro", "TEMPLATE", "TEMPLATE"], &reads);
        let found = find_sequence_by_name(sequences, "TEMPLATE").unwrap();
        assert_eq!(found.map(|s| s.index), Some(1));
        assert_eq!(reads.get(), 2, "scan must stop at the first match");
    }

    #[test]
    fn test_exact_comparison() {
        let reads = Cell::new(0);
        for target in ["template", "TEMPLATE ", " TEMPLATE", "TEMPL"] {
            let sequences = named(&["Intro", "TEMPLATE"], &reads);
            assert!(find_sequence_by_name(sequences, target).unwrap().is_none());
        }
    }

    #[test]
    fn test_empty_collection() {
        let reads = Cell::new(0);
        assert!(
            find_sequence_by_name(named(&[], &reads), "TEMPLATE")
                .unwrap()
                .is_none()
        );
    }

    #[derive(Debug)]
    struct Broken;

    impl SequenceHandle for Broken {
        fn name(&self) -> Result<String> {
            Err(host_error("sequence was deleted"))
        }

        fn rename(&self, _new_name: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_host_fault_propagates() {
        let error = find_sequence_by_name(vec![Broken], "TEMPLATE").unwrap_err();
        assert_eq!(error.to_string(), "sequence was deleted");
    }
}
