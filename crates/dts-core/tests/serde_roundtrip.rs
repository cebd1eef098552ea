use std::collections::BTreeMap;

use dts_core::{Mode, PerMode, RunProvenance, ThemePackage};

#[test]
fn per_mode_serializes_with_mode_names() {
    let mut table = PerMode::<BTreeMap<String, String>>::default();
    table
        .get_mut(Mode::Dark)
        .insert("colorBrandBackground".into(), "#0f6cbd".into());

    let json = serde_json::to_value(&table).expect("serialize");
    assert_eq!(json["dark"]["colorBrandBackground"], "#0f6cbd");
    assert!(json["light"].as_object().expect("object").is_empty());

    let decoded: PerMode<BTreeMap<String, String>> =
        serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, table);
}

#[test]
fn provenance_uses_camel_case_fields() {
    let provenance = RunProvenance::new("abc123", "dts-core", "0.1.0");
    let json = serde_json::to_value(&provenance).expect("serialize");
    assert_eq!(json["inputHash"], "abc123");
    assert_eq!(json["toolVersions"]["dts-core"], "0.1.0");
}

#[test]
fn theme_package_version_defaults_to_unknown() {
    let package: ThemePackage =
        serde_json::from_str(r#"{"name":"@fluentui/react-theme"}"#).expect("deserialize");
    assert_eq!(package.version, "unknown");
}

#[test]
fn modes_parse_only_their_own_segment() {
    assert_eq!(Mode::from_segment("light"), Some(Mode::Light));
    assert_eq!(Mode::from_segment("dark"), Some(Mode::Dark));
    assert_eq!(Mode::from_segment("Light"), None);
    assert_eq!(Mode::ALL.map(|mode| mode.as_str()), ["light", "dark"]);
}
