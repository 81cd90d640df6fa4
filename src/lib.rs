//! # segtrain
//!
//! Scoring core for an OT/ICS network segmentation trainer.
//!
//! A trainee is shown a small plant network whose devices carry Purdue
//! levels, marks the links they believe break segmentation, and is scored
//! against a fixed rule: any link whose endpoints sit more than one level
//! apart is a violation.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! segtrain serve --port 8501
//! curl -X POST localhost:8501/graph/sample
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use segtrain::prelude::*;
//!
//! let mut session = Session::new();
//! session.load_sample();
//! session
//!     .append_annotation(Annotation::new("Enterprise-1 -> PLC-2", Verdict::Yes))
//!     .unwrap();
//!
//! let report = session.score().unwrap();
//! assert_eq!(report.details.true_positives, 1);
//! ```
//!
//! ## Crate Structure
//!
//! - `segtrain-core` - Network model, violation rule, scoring, session state
//! - `segtrain-api` - REST API over one session

// Re-export core types
pub use segtrain_core::{
    build_graph_from_edge_table, build_sample_network, detect_violations, score_annotations,
    violation_strings, Annotation, EdgeKey, EdgeRow, Error, GraphBuilder, GraphView, Level,
    LevelDefaults, NetworkGraph, Node, Result, ScoreDetails, ScoreReport, SegmentationScorer,
    Session, Verdict, EDGE_SEPARATOR,
};

// Re-export API
pub use segtrain_api::{RestApi, SharedSession};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_graph_from_edge_table, build_sample_network, score_annotations, Annotation,
        EdgeRow, Error, NetworkGraph, Result, ScoreReport, SegmentationScorer, Session, Verdict,
    };
}
