use dts_core::errors::{ErrorInfo, SyncError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "tokens/mode.json")
        .with_context("reason", "example")
}

#[test]
fn input_error_surface() {
    let err = SyncError::missing_input("tokens/mode.json");
    assert_eq!(err.info().code, "missing_input");
    assert_eq!(err.info().context["path"], "tokens/mode.json");
    assert!(err.is_missing_input());
}

#[test]
fn document_error_surface() {
    let err = SyncError::Document(sample_info("D001", "leaf value is an array"));
    assert_eq!(err.info().code, "D001");
    assert!(err.info().context.contains_key("reason"));
    assert!(!err.is_missing_input());
}

#[test]
fn display_includes_context_and_hint() {
    let err = SyncError::Config(sample_info("C001", "bad field").with_hint("check the yaml"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("config error: bad field (code: C001)"));
    assert!(rendered.contains("path=tokens/mode.json"));
    assert!(rendered.ends_with("hint: check the yaml"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = SyncError::Serde(ErrorInfo::new("S001", "schema mismatch"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Serde");
    assert_eq!(json["detail"]["code"], "S001");
    let decoded: SyncError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn hints_attach_to_any_family() {
    let err = SyncError::missing_input("analysis/delta-report.json").with_hint("run analyze first");
    assert!(err.is_missing_input());
    assert_eq!(err.info().hint.as_deref(), Some("run analyze first"));
}
