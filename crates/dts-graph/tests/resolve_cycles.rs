use dts_core::TokenValue;
use dts_graph::{ResolutionDiagnostic, Resolver, TokenGraph, TokenRecord};
use proptest::prelude::*;

fn graph(entries: &[(String, TokenValue)]) -> TokenGraph {
    let mut graph = TokenGraph::new();
    for (path, value) in entries {
        graph.insert(TokenRecord {
            path: path.clone(),
            source_document: "mode".into(),
            raw_value: value.clone(),
            kind: "color".into(),
        });
    }
    graph
}

fn entry(path: &str, value: &str) -> (String, TokenValue) {
    (path.to_string(), TokenValue::text(value))
}

#[test]
fn two_node_cycle_returns_absent_with_one_diagnostic() {
    let graph = graph(&[entry("A", "{B}"), entry("B", "{A}")]);
    let mut resolver = Resolver::new(&graph);

    assert_eq!(resolver.resolve("A"), None);
    assert_eq!(
        resolver.diagnostics(),
        &[ResolutionDiagnostic::CircularReference {
            path: "A".into(),
            stack: vec!["A".into(), "B".into()],
        }]
    );

    // B was memoized as absent while unwinding A.
    assert_eq!(resolver.resolve("B"), None);
    assert_eq!(resolver.diagnostics().len(), 1);
}

#[test]
fn missing_target_returns_absent_with_one_diagnostic() {
    let graph = graph(&[entry("light.Brand.Background.1.Rest", "{missing.path}")]);
    let mut resolver = Resolver::new(&graph);

    assert_eq!(resolver.resolve("light.Brand.Background.1.Rest"), None);
    assert_eq!(
        resolver.into_diagnostics(),
        vec![ResolutionDiagnostic::MissingReference {
            path: "missing.path".into(),
            stack: vec!["light.Brand.Background.1.Rest".into()],
        }]
    );
}

#[test]
fn looking_up_an_absent_path_directly_is_missing() {
    let graph = graph(&[]);
    let mut resolver = Resolver::new(&graph);
    assert_eq!(resolver.resolve("Spacing.Horizontal.S"), None);
    assert_eq!(resolver.diagnostics()[0].stack(), &[] as &[String]);
}

#[test]
fn diagnostics_serialize_with_type_tag() {
    let diagnostic = ResolutionDiagnostic::CircularReference {
        path: "A".into(),
        stack: vec!["A".into(), "B".into()],
    };
    let json = serde_json::to_value(&diagnostic).unwrap();
    assert_eq!(json["type"], "circular");
    assert_eq!(json["tokenPath"], "A");
    assert_eq!(json["stack"][1], "B");
}

fn arbitrary_graph() -> impl Strategy<Value = Vec<(String, TokenValue)>> {
    // Eight paths; each either a literal or a reference to one of ten
    // candidate paths, two of which never exist.
    prop::collection::vec(
        prop_oneof![
            (0u8..100).prop_map(|n| TokenValue::int(i64::from(n))),
            (0usize..10).prop_map(|target| TokenValue::text(format!("{{t{target}}}"))),
        ],
        8,
    )
    .prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| (format!("t{idx}"), value))
            .collect()
    })
}

proptest! {
    #[test]
    fn resolution_is_independent_of_visit_order(entries in arbitrary_graph(), reversed in any::<bool>()) {
        let graph = graph(&entries);

        let mut forward = Resolver::new(&graph);
        let mut order: Vec<String> = entries.iter().map(|(path, _)| path.clone()).collect();
        let expected: Vec<Option<TokenValue>> = order.iter().map(|path| forward.resolve(path)).collect();

        if reversed {
            order.reverse();
        } else {
            order.rotate_left(3);
        }
        let mut other = Resolver::new(&graph);
        for path in &order {
            other.resolve(path);
        }
        let again: Vec<Option<TokenValue>> = entries.iter().map(|(path, _)| other.resolve(path)).collect();
        prop_assert_eq!(expected, again);
    }

    #[test]
    fn resolved_values_are_never_references(entries in arbitrary_graph()) {
        let graph = graph(&entries);
        let mut resolver = Resolver::new(&graph);
        for (path, _) in &entries {
            if let Some(value) = resolver.resolve(path) {
                prop_assert!(value.reference().is_none());
            }
        }
    }
}
