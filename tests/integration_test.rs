// Integration tests for segtrain
use segtrain_core::{
    build_graph_from_edge_table, build_sample_network, detect_violations, score_annotations,
    violation_strings, Annotation, EdgeKey, EdgeRow, Error, LevelDefaults, NetworkGraph,
    SegmentationScorer, Session, Verdict,
};

const SAMPLE_VIOLATION: &str = "Enterprise-1 -> PLC-2";

fn perfect_annotations(graph: &NetworkGraph) -> Vec<Annotation> {
    let truth = violation_strings(graph);
    graph
        .edge_strings()
        .into_iter()
        .map(|edge| {
            let verdict = if truth.contains(&edge) { Verdict::Yes } else { Verdict::No };
            Annotation::new(edge, verdict)
        })
        .collect()
}

#[test]
fn test_sample_network_is_deterministic() {
    let a = build_sample_network();
    let b = build_sample_network();

    assert_eq!(a.to_view(), b.to_view());
    assert_eq!(a.edge_strings(), b.edge_strings());
    for node in a.nodes() {
        let other = b.node(&node.id).unwrap();
        assert_eq!(node.level, other.level);
        assert_eq!(node.role, other.role);
    }
}

#[test]
fn test_sample_violation_set() {
    let graph = build_sample_network();

    // every sample node has an explicit level, so the rule needs no defaults
    assert!(graph.nodes().all(|n| n.level.is_some()));

    let violations = detect_violations(&graph);
    let expected: EdgeKey = SAMPLE_VIOLATION.parse().unwrap();
    assert_eq!(violations.len(), 1);
    assert!(violations.contains(&expected));
}

#[test]
fn test_perfect_detection_scores_100() {
    let graph = build_sample_network();
    let report = score_annotations(&graph, &perfect_annotations(&graph));

    assert_eq!(report.score_percent, 100.0);
    assert_eq!(report.details.false_positives, 0);
    assert_eq!(report.details.false_negatives, 0);
    assert_eq!(report.details.true_violations, vec![SAMPLE_VIOLATION]);
    assert_eq!(report.details.detected, vec![SAMPLE_VIOLATION]);
}

#[test]
fn test_no_detection_scores_zero() {
    let graph = build_sample_network();
    let report = score_annotations(&graph, &[]);

    assert_eq!(report.score_percent, 0.0);
    assert_eq!(report.details.true_positives, 0);
    assert_eq!(report.details.false_positives, 0);
    assert_eq!(report.details.false_negatives, violation_strings(&graph).len());
}

#[test]
fn test_miss_and_false_alarm_lower_score() {
    // two true violations so a single miss still leaves a true positive
    let rows = vec![
        EdgeRow::new("Enterprise-1", "PLC-1").with_levels(Some(4), Some(1)),
        EdgeRow::new("DMZ-1", "PLC-2").with_levels(Some(3), Some(1)),
        EdgeRow::new("HMI-1", "PLC-1").with_levels(Some(2), None),
        EdgeRow::new("PLC-2", "Historian").with_levels(None, Some(2)),
    ];
    let graph = build_graph_from_edge_table(&rows).unwrap();
    assert_eq!(violation_strings(&graph).len(), 2);

    let perfect = score_annotations(&graph, &perfect_annotations(&graph));

    let degraded = vec![
        Annotation::new("Enterprise-1 -> PLC-1", Verdict::Yes),
        Annotation::new("DMZ-1 -> PLC-2", Verdict::No),
        Annotation::new("HMI-1 -> PLC-1", Verdict::Yes),
        Annotation::new("PLC-2 -> Historian", Verdict::No),
    ];
    let degraded = score_annotations(&graph, &degraded);

    assert_eq!(degraded.details.false_negatives, 1);
    assert_eq!(degraded.details.false_positives, 1);
    assert!(degraded.score_percent < perfect.score_percent);
    assert!(degraded.score_percent > 0.0);
}

#[test]
fn test_repeated_row_single_edge() {
    let rows = vec![EdgeRow::new("HMI-1", "PLC-1"), EdgeRow::new("HMI-1", "PLC-1")];
    let graph = build_graph_from_edge_table(&rows).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_strings(), vec!["HMI-1 -> PLC-1"]);
}

#[test]
fn test_unlevelled_edge_not_violation() {
    let rows = vec![EdgeRow::new("Unknown-A", "Unknown-B")];
    let graph = build_graph_from_edge_table(&rows).unwrap();

    assert_eq!(graph.level("Unknown-A"), None);
    assert_eq!(graph.level("Unknown-B"), None);
    assert!(detect_violations(&graph).is_empty());
    assert_eq!(LevelDefaults::default(), LevelDefaults { source: 2, target: 1 });
}

#[test]
fn test_malformed_table_rejected() {
    let rows: Vec<EdgeRow> = serde_json::from_str(
        r#"[
            {"source": "A", "target": "B"},
            {"source_level": 3, "target_level": 1}
        ]"#,
    )
    .unwrap();

    assert!(matches!(
        build_graph_from_edge_table(&rows),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_session_workflow() {
    let mut session = Session::with_scorer(SegmentationScorer::default());
    session.load_sample();

    for edge in session.graph().unwrap().edge_strings() {
        let verdict = if edge == SAMPLE_VIOLATION { Verdict::Yes } else { Verdict::Unknown };
        session
            .append_annotation(Annotation::new(edge, verdict).with_comment("reviewed"))
            .unwrap();
    }

    let report = session.score().unwrap();
    assert_eq!(report.to_string(), "100.0%");
    assert_eq!(session.annotations().len(), 7);
}

#[test]
fn test_score_report_json_shape() {
    let graph = build_sample_network();
    let report = score_annotations(&graph, &[Annotation::new("PLC-1 -> Historian", Verdict::Yes)]);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["score_percent"], 0.0);
    assert_eq!(json["details"]["tp"], 0);
    assert_eq!(json["details"]["fp"], 1);
    assert_eq!(json["details"]["fn"], 1);
    assert_eq!(json["details"]["detected"][0], "PLC-1 -> Historian");
}
