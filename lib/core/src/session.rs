use crate::annotation::Annotation;
use crate::graph::EdgeKey;
use crate::network::NetworkGraph;
use crate::sample::build_sample_network;
use crate::scoring::{ScoreReport, SegmentationScorer};
use crate::table::{build_graph_from_edge_table, EdgeRow};
use crate::{Error, Result};

/// Per-trainee working state: the loaded network and the judgements made on it.
///
/// Loading a new network keeps earlier annotations; they are scored against
/// whatever network is current. Nothing outlives the session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    graph: Option<NetworkGraph>,
    annotations: Vec<Annotation>,
    scorer: SegmentationScorer,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scorer(scorer: SegmentationScorer) -> Self {
        Self {
            scorer,
            ..Self::default()
        }
    }

    pub fn scorer(&self) -> &SegmentationScorer {
        &self.scorer
    }

    pub fn graph(&self) -> Option<&NetworkGraph> {
        self.graph.as_ref()
    }

    pub fn set_graph(&mut self, graph: NetworkGraph) -> &NetworkGraph {
        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "network loaded"
        );
        self.graph.insert(graph)
    }

    pub fn load_sample(&mut self) -> &NetworkGraph {
        self.set_graph(build_sample_network())
    }

    /// Replace the network from edge-table rows. On error the previous
    /// network stays in place.
    pub fn load_edge_table(&mut self, rows: &[EdgeRow]) -> Result<&NetworkGraph> {
        let graph = build_graph_from_edge_table(rows).map_err(|e| {
            tracing::warn!(error = %e, "edge table rejected");
            e
        })?;
        Ok(self.set_graph(graph))
    }

    /// Record a judgement on one of the current network's edges.
    pub fn append_annotation(&mut self, annotation: Annotation) -> Result<()> {
        if annotation.edge.trim().is_empty() {
            return Err(Error::Validation("pick an edge first".to_string()));
        }
        let graph = self.graph.as_ref().ok_or(Error::NoGraph)?;
        let key: EdgeKey = annotation.edge.parse()?;
        if !graph.contains_edge_key(&key) {
            return Err(Error::UnknownEdge(annotation.edge));
        }

        tracing::debug!(edge = %key, verdict = %annotation.verdict, "annotation recorded");
        self.annotations.push(annotation);
        Ok(())
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    pub fn score(&self) -> Result<ScoreReport> {
        let graph = self.graph.as_ref().ok_or(Error::NoGraph)?;
        let report = self.scorer.score(graph, &self.annotations);
        tracing::info!(
            score = %report,
            annotations = self.annotations.len(),
            "segmentation compliance computed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Verdict;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.graph().is_none());
        assert!(session.annotations().is_empty());
        assert!(matches!(session.score(), Err(Error::NoGraph)));
    }

    #[test]
    fn test_annotation_requires_graph() {
        let mut session = Session::new();
        let err = session
            .append_annotation(Annotation::new("A -> B", Verdict::Yes))
            .unwrap_err();
        assert!(matches!(err, Error::NoGraph));
    }

    #[test]
    fn test_annotation_guards() {
        let mut session = Session::new();
        session.load_sample();

        assert!(matches!(
            session.append_annotation(Annotation::new("", Verdict::Yes)),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            session.append_annotation(Annotation::new("PLC-2 -> Enterprise-1", Verdict::Yes)),
            Err(Error::UnknownEdge(_))
        ));
        assert!(matches!(
            session.append_annotation(Annotation::new("Enterprise-1->PLC-2", Verdict::Yes)),
            Err(Error::InvalidEdgeRef(_))
        ));
        assert!(session.annotations().is_empty());
    }

    #[test]
    fn test_annotations_accumulate() {
        let mut session = Session::new();
        session.load_sample();
        session
            .append_annotation(Annotation::new("Enterprise-1 -> PLC-2", Verdict::Yes))
            .unwrap();
        session
            .append_annotation(Annotation::new("Enterprise-1 -> PLC-2", Verdict::Yes))
            .unwrap();
        session
            .append_annotation(Annotation::new("PLC-1 -> Historian", Verdict::No))
            .unwrap();

        assert_eq!(session.annotations().len(), 3);
        let report = session.score().unwrap();
        assert_eq!(report.score_percent, 100.0);

        session.clear_annotations();
        assert_eq!(session.score().unwrap().score_percent, 0.0);
    }

    #[test]
    fn test_failed_load_keeps_previous_graph() {
        let mut session = Session::new();
        session.load_sample();

        let rows = vec![EdgeRow::new("A", "B"), EdgeRow::default()];
        assert!(session.load_edge_table(&rows).is_err());
        assert_eq!(session.graph().unwrap().node_count(), 7);
    }

    #[test]
    fn test_reload_keeps_annotations() {
        let mut session = Session::new();
        session.load_sample();
        session
            .append_annotation(Annotation::new("Enterprise-1 -> PLC-2", Verdict::Yes))
            .unwrap();

        let rows = vec![EdgeRow::new("A", "B").with_levels(Some(4), Some(0))];
        let graph = session.load_edge_table(&rows).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(session.annotations().len(), 1);

        let report = session.score().unwrap();
        assert_eq!(report.details.false_positives, 1);
        assert_eq!(report.details.false_negatives, 1);
        assert_eq!(report.score_percent, 0.0);
    }
}
