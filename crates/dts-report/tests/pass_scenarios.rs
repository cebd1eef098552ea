use std::collections::BTreeMap;

use dts_core::{Mode, PerMode, ThemePackage, TokenValue};
use dts_graph::{ResolutionDiagnostic, TokenDocument};
use dts_report::{
    build_overrides, build_update_plan, compute_mode_delta, run_pass, to_canonical_json_pretty,
    MappedEntry, ModeTable, PassOptions, ReferenceTheme,
};
use serde_json::json;

fn document(id: &str, root: serde_json::Value) -> TokenDocument {
    TokenDocument::from_value(id, root).expect("valid document")
}

fn fixture_documents() -> Vec<TokenDocument> {
    vec![
        document(
            "brand",
            json!({
                "Brand-80": { "value": "#0F6CBD", "kind": "color" },
                "Brand-90": { "value": "#2886DE", "kind": "color" }
            }),
        ),
        document(
            "global",
            json!({
                "Typography": {
                    "Weight": { "Semibold": { "value": "SemiBold" } },
                    "Font size": { "300": { "value": 14 } }
                }
            }),
        ),
        document(
            "layout",
            json!({
                "Spacing": { "Horizontal": { "M": { "value": 12 } } },
                "Corner radius": { "Medium": { "value": "{Spacing.Horizontal.M}" } }
            }),
        ),
        document(
            "mode",
            json!({
                "light": {
                    "Brand": { "Background": { "1": { "value": "{Brand-80}" } } },
                    "Neutral": {
                        "Background": { "1": { "Hover": { "value": "#F5F5F5" } } },
                        "Card": { "Background": { "value": "#FAFAFA" } }
                    }
                },
                "dark": {
                    "Brand": { "Background": { "1": { "value": "{Brand-90}" } } },
                    "Neutral": { "Foreground": { "1": { "value": "{Missing.Token}" } } }
                },
                "shared": { "Ignored": { "value": "#000000" } }
            }),
        ),
    ]
}

fn fixture_reference() -> ReferenceTheme {
    let mut light = BTreeMap::new();
    light.insert("colorBrandBackground".to_string(), TokenValue::text("#0f6cbd"));
    light.insert("colorNeutralBackground1Hover".to_string(), TokenValue::text("#f0f0f0"));
    light.insert("spacingHorizontalM".to_string(), TokenValue::text("12px"));
    light.insert("borderRadiusMedium".to_string(), TokenValue::text("4px"));
    light.insert("fontWeightSemibold".to_string(), TokenValue::int(600));
    let mut dark = light.clone();
    dark.insert("colorBrandBackground".to_string(), TokenValue::text("#115ea3"));
    let mut brand = BTreeMap::new();
    brand.insert("80".to_string(), TokenValue::text("#0f6cbd"));
    brand.insert("90".to_string(), TokenValue::text("#115ea3"));
    ReferenceTheme {
        package: ThemePackage {
            name: "theme-lib".to_string(),
            version: "9.0.0".to_string(),
        },
        themes: PerMode { light, dark },
        brand,
    }
}

#[test]
fn repeated_passes_serialize_identically() {
    let documents = fixture_documents();
    let reference = fixture_reference();
    let options = PassOptions::default();
    let first = run_pass(&documents, &reference, &options).expect("pass");
    let second = run_pass(&documents, &reference, &options).expect("pass");
    assert_eq!(
        to_canonical_json_pretty(&first).expect("json"),
        to_canonical_json_pretty(&second).expect("json")
    );
    assert_eq!(first.provenance.input_hash.len(), 64);
}

#[test]
fn pass_maps_statics_and_mode_tokens() {
    let report = run_pass(&fixture_documents(), &fixture_reference(), &PassOptions::default())
        .expect("pass");

    let light = &report.mapped_themes.light;
    assert_eq!(light["spacingHorizontalM"], "12px");
    assert_eq!(light["borderRadiusMedium"], "12px");
    assert_eq!(light["fontWeightSemibold"], "600");
    assert_eq!(light["fontSizeBase300"], "14px");
    assert_eq!(light["colorBrandBackground"], "#0F6CBD");
    assert_eq!(light["colorNeutralBackground1Hover"], "#F5F5F5");
    assert_eq!(report.mapped_themes.dark["spacingHorizontalM"], "12px");
    assert!(!report.mapped_themes.dark.contains_key("colorNeutralForeground1"));

    let light_delta = report.deltas.mode(Mode::Light);
    let delta_keys: Vec<&str> = light_delta.deltas.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(delta_keys, ["borderRadiusMedium", "colorNeutralBackground1Hover"]);
    assert_eq!(light_delta.deltas[0].provenance, "layout.Corner radius.Medium");
    let unknown: Vec<&str> = light_delta.unknown_theme_keys.iter().map(|k| k.key.as_str()).collect();
    assert_eq!(unknown, ["fontSizeBase300"]);

    assert_eq!(report.unmapped_mode_paths.len(), 1);
    assert_eq!(report.unmapped_mode_paths[0].path, "light.Neutral.Card.Background");

    assert!(report.unresolved_references.iter().any(|diagnostic| matches!(
        diagnostic,
        ResolutionDiagnostic::MissingReference { path, stack }
            if path == "Missing.Token" && stack == &["dark.Neutral.Foreground.1".to_string()]
    )));

    assert_eq!(report.deltas.brand.len(), 1);
    assert_eq!(report.deltas.brand[0].token, "Brand-90");
    assert_eq!(report.summary.brand_deltas, 1);
    assert!(report
        .unresolved_references
        .iter()
        .all(|diagnostic| !diagnostic.path().starts_with("Brand-")));
    assert_eq!(report.summary.light_deltas, 2);
    assert_eq!(report.reference_package.name, "theme-lib");
}

#[test]
fn conflicting_sources_keep_the_first_value() {
    let documents = vec![document(
        "mode",
        json!({
            "light": {
                "Status": {
                    "Danger": {
                        "Background": { "3": { "Hover": { "value": "#0000FF" } } },
                        "Foreground": { "3": { "Hover": { "value": "#00FF00" } } }
                    }
                }
            }
        }),
    )];
    let report = run_pass(&documents, &ReferenceTheme::default(), &PassOptions::default())
        .expect("pass");
    assert_eq!(report.mapping_conflicts.len(), 1);
    let conflict = &report.mapping_conflicts[0];
    assert_eq!(conflict.key, "colorStatusDangerBackground3Hover");
    assert_eq!(conflict.kept_value, "#0000FF");
    assert_eq!(conflict.kept_provenance, "light.Status.Danger.Background.3.Hover");
    assert_eq!(conflict.incoming_value, "#00FF00");
    assert_eq!(report.mapped_themes.light["colorStatusDangerBackground3Hover"], "#0000FF");
}

#[test]
fn duplicate_paths_across_documents_are_reported() {
    let documents = vec![
        document("layout", json!({ "Spacing": { "Horizontal": { "S": { "value": "1px" } } } })),
        document("global", json!({ "Spacing": { "Horizontal": { "S": { "value": "2px" } } } })),
    ];
    let report = run_pass(&documents, &ReferenceTheme::default(), &PassOptions::default())
        .expect("pass");
    assert_eq!(report.duplicate_token_paths.len(), 1);
    assert_eq!(report.duplicate_token_paths[0].kept_source_document, "layout");
    assert_eq!(report.mapped_themes.light["spacingHorizontalS"], "1px");
}

fn table(entries: &[(&str, &str)]) -> ModeTable {
    let mut table = ModeTable::new();
    for (key, value) in entries {
        table.insert(MappedEntry {
            key: key.to_string(),
            mode: Mode::Light,
            normalized_value: value.to_string(),
            provenance: format!("light.{key}"),
        });
    }
    table
}

#[test]
fn deltas_compare_canonical_forms() {
    let computed = table(&[("spacingM", "12px")]);
    let mut reference = BTreeMap::new();
    reference.insert("spacingM".to_string(), TokenValue::text("16px"));
    let delta = compute_mode_delta(&computed, &reference);
    assert_eq!(delta.delta_count, 1);
    assert_eq!(delta.deltas[0].computed_value, "12px");
    assert_eq!(delta.deltas[0].reference_value, "16px");

    reference.insert("spacingM".to_string(), TokenValue::text("12"));
    assert!(compute_mode_delta(&computed, &reference).deltas.is_empty());
}

#[test]
fn overrides_port_unmapped_paths_as_custom_keys() {
    let report = run_pass(&fixture_documents(), &fixture_reference(), &PassOptions::default())
        .expect("pass");
    let overrides = build_overrides(&report, "cic").expect("overrides");
    assert_eq!(overrides.modes.light["cicNeutralCardBackground"], "#FAFAFA");
    assert_eq!(overrides.modes.light["colorBrandBackground"], "#0F6CBD");
    let custom = &overrides.custom_modes.light["cicNeutralCardBackground"];
    assert_eq!(custom.token_path, "light.Neutral.Card.Background");
    assert!(overrides.custom_modes.dark.is_empty());
    assert_eq!(overrides.source_report_hash.len(), 64);
}

#[test]
fn update_plan_groups_deltas_by_target() {
    let report = run_pass(&fixture_documents(), &fixture_reference(), &PassOptions::default())
        .expect("pass");
    let plan = build_update_plan(&report, &BTreeMap::new()).expect("plan");
    let targets: Vec<&str> = plan
        .update_targets
        .light
        .iter()
        .map(|group| group.target.as_str())
        .collect();
    assert_eq!(targets, ["borderRadius", "color.light"]);
    assert_eq!(plan.update_targets.brand.delta_count, 1);
    assert_eq!(plan.summary, report.summary);
}
