//! Segmentation scoring.
//!
//! Ground truth comes from a single fixed rule: an edge is a violation when
//! its endpoints' Purdue levels differ by more than one. It looks at nothing
//! else (not role, protocol or direction).
//!
//! Unset levels are filled from [`LevelDefaults`] at scoring time. The
//! defaults are asymmetric, source 2 and target 1, so an edge between two
//! unlevelled nodes has a difference of exactly 1 and is **not** flagged.
//!
//! Trainee claims are compared to the ground truth with precision, recall
//! and F1:
//!
//! ```text
//! precision = tp / (tp + fp)        (0.0 when tp + fp == 0)
//! recall    = tp / (tp + fn)        (0.0 when tp + fn == 0)
//! f1        = 2pr / (p + r)         (0.0 when p + r == 0)
//! score     = f1 * 100
//! ```

use crate::annotation::Annotation;
use crate::graph::{EdgeKey, Level};
use crate::network::NetworkGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Levels assumed for endpoints without an explicit level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefaults {
    pub source: Level,
    pub target: Level,
}

impl LevelDefaults {
    pub const STANDARD: LevelDefaults = LevelDefaults { source: 2, target: 1 };
}

impl Default for LevelDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Contingency counts and the two sets they were computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub true_violations: Vec<String>,
    pub detected: Vec<String>,
    #[serde(rename = "tp")]
    pub true_positives: usize,
    #[serde(rename = "fp")]
    pub false_positives: usize,
    #[serde(rename = "fn")]
    pub false_negatives: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// F1 as a percentage in [0, 100]
    pub score_percent: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub details: ScoreDetails,
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.score_percent)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentationScorer {
    defaults: LevelDefaults,
}

impl SegmentationScorer {
    #[inline]
    #[must_use]
    pub fn new(defaults: LevelDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> LevelDefaults {
        self.defaults
    }

    #[inline]
    pub fn is_violation(&self, source_level: Option<Level>, target_level: Option<Level>) -> bool {
        let lu = source_level.unwrap_or(self.defaults.source);
        let lv = target_level.unwrap_or(self.defaults.target);
        lu.abs_diff(lv) > 1
    }

    pub fn detect_violations(&self, graph: &NetworkGraph) -> BTreeSet<EdgeKey> {
        graph
            .edges()
            .filter(|(u, v)| self.is_violation(u.level, v.level))
            .map(|(u, v)| EdgeKey {
                source: u.id.clone(),
                target: v.id.clone(),
            })
            .collect()
    }

    pub fn score(&self, graph: &NetworkGraph, annotations: &[Annotation]) -> ScoreReport {
        let true_set: BTreeSet<String> = self
            .detect_violations(graph)
            .iter()
            .map(EdgeKey::encode)
            .collect();
        // any Yes counts, even if the same edge was also marked No elsewhere
        let detected: BTreeSet<String> = annotations
            .iter()
            .filter(|a| a.is_violation_claim())
            .map(|a| a.edge.clone())
            .collect();

        let tp = true_set.intersection(&detected).count();
        let fp = detected.difference(&true_set).count();
        let fn_ = true_set.difference(&detected).count();

        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        tracing::debug!(tp, fp, fn_, f1, "segmentation scored");

        ScoreReport {
            score_percent: f1 * 100.0,
            precision,
            recall,
            f1,
            details: ScoreDetails {
                true_violations: true_set.into_iter().collect(),
                detected: detected.into_iter().collect(),
                true_positives: tp,
                false_positives: fp,
                false_negatives: fn_,
            },
        }
    }
}

#[inline]
fn ratio(num: usize, den: usize) -> f64 {
    if den > 0 {
        num as f64 / den as f64
    } else {
        0.0
    }
}

/// Edges whose levels (after defaults) differ by more than one
pub fn detect_violations(graph: &NetworkGraph) -> BTreeSet<EdgeKey> {
    SegmentationScorer::default().detect_violations(graph)
}

/// [`detect_violations`] in the external `"source -> target"` form
pub fn violation_strings(graph: &NetworkGraph) -> BTreeSet<String> {
    detect_violations(graph).iter().map(EdgeKey::encode).collect()
}

pub fn score_annotations(graph: &NetworkGraph, annotations: &[Annotation]) -> ScoreReport {
    SegmentationScorer::default().score(graph, annotations)
}
