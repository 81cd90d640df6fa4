//! # segtrain Core
//!
//! Core library for the segtrain network segmentation trainer.
//!
//! This crate provides the network model and the scoring engine:
//!
//! - [`NetworkGraph`] - Directed device network with optional Purdue levels
//! - [`GraphBuilder`] - Incremental, validating graph construction
//! - [`build_sample_network`] / [`build_graph_from_edge_table`] - Graph sources
//! - [`SegmentationScorer`] - Level-jump violation rule and F1 scoring
//! - [`Session`] - One trainee's loaded network and annotations
//!
//! ## Example
//!
//! ```rust
//! use segtrain_core::{build_sample_network, score_annotations, Annotation, Verdict};
//!
//! let graph = build_sample_network();
//! let annotations = vec![
//!     Annotation::new("Enterprise-1 -> PLC-2", Verdict::Yes),
//!     Annotation::new("PLC-1 -> Historian", Verdict::No),
//! ];
//!
//! let report = score_annotations(&graph, &annotations);
//! assert_eq!(report.score_percent, 100.0);
//! assert_eq!(report.to_string(), "100.0%");
//! ```

pub mod annotation;
pub mod error;
pub mod graph;
pub mod network;
pub mod sample;
pub mod scoring;
pub mod session;
pub mod table;

pub use annotation::{Annotation, Verdict};
pub use error::{Error, Result};
pub use graph::{validate_node_id, EdgeKey, Level, Node, EDGE_SEPARATOR};
pub use network::{GraphBuilder, GraphView, NetworkGraph};
pub use sample::build_sample_network;
pub use scoring::{
    detect_violations, score_annotations, violation_strings, LevelDefaults, ScoreDetails,
    ScoreReport, SegmentationScorer,
};
pub use session::Session;
pub use table::{build_graph_from_edge_table, EdgeRow};
