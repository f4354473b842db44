use sequence_renamer::constants::FN_RENAME_SEQUENCE;
use sequence_renamer::host::{HostRuntime, MemoryProject};
use sequence_renamer::protocol::{ErrorKind, RenameResponse, ScriptCall};
use serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = "/Volumes/Drive/ClientX/2024-Project/file.prproj";

    fn rename_call(template: &str, depth: u32) -> String {
        ScriptCall::new(FN_RENAME_SEQUENCE)
            .string(template)
            .integer(depth)
            .to_source()
    }

    #[test]
    fn test_template_with_quotes_reaches_the_host_intact() {
        let template = r#"Edit "v2" \ final"#;
        let project = MemoryProject::saved(PROJECT, &["Intro", template]);
        let runtime = HostRuntime::new(project.clone());

        let answer = runtime.evaluate(&rename_call(template, 0));
        let response = RenameResponse::from_json(&answer).unwrap();
        assert!(response.success);
        assert_eq!(response.new_name.as_deref(), Some("2024-Project"));
        assert_eq!(project.sequence_names(), vec!["Intro", "2024-Project"]);
    }

    #[test]
    fn test_every_answer_has_a_boolean_success() {
        let project = MemoryProject::saved(PROJECT, &["TEMPLATE"]);
        let runtime = HostRuntime::new(project.clone());
        let sources = [
            rename_call("", 2),
            rename_call("TEMPLATE", 7),
            rename_call("Missing", 2),
            rename_call("TEMPLATE", 2),
            rename_call("TEMPLATE", 2),
            "not a call".to_string(),
        ];

        for source in &sources {
            let value: Value = serde_json::from_str(&runtime.evaluate(source)).unwrap();
            assert!(value["success"].is_boolean(), "{source}");
            if value["success"] == Value::Bool(true) {
                assert!(value["newName"].is_string());
            } else {
                assert!(value["error"].is_string());
            }
        }
    }

    #[test]
    fn test_error_kinds_cross_the_bridge() {
        let runtime = HostRuntime::new(MemoryProject::closed());
        let response = RenameResponse::from_json(&runtime.evaluate(&rename_call("T", 0))).unwrap();
        assert_eq!(response.error_kind, Some(ErrorKind::NoProjectOpen));
        assert_eq!(response.error.as_deref(), Some("No project open"));

        let runtime = HostRuntime::new(MemoryProject::unsaved());
        let response = RenameResponse::from_json(&runtime.evaluate(&rename_call("T", 0))).unwrap();
        assert_eq!(response.error_kind, Some(ErrorKind::UnsavedProject));

        let runtime = HostRuntime::new(MemoryProject::saved(PROJECT, &[]));
        let response = RenameResponse::from_json(&runtime.evaluate(&rename_call("T", 0))).unwrap();
        assert!(response.is_sequence_not_found());
    }

    #[test]
    fn test_reads_answers_without_extras() {
        let response = RenameResponse::from_json(
            r#"{"success":true,"newName":"ClientX","message":"Sequence renamed successfully"}"#,
        )
        .unwrap();
        assert_eq!(response.new_name.as_deref(), Some("ClientX"));
        assert_eq!(response.error_kind, None);
    }
}
