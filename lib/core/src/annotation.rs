use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trainee's judgement on whether an edge is a segmentation violation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[default]
    Unknown,
    Yes,
    No,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Unknown => "Unknown",
            Verdict::Yes => "Yes",
            Verdict::No => "No",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unknown" => Ok(Verdict::Unknown),
            "Yes" => Ok(Verdict::Yes),
            "No" => Ok(Verdict::No),
            other => Err(Error::Validation(format!("unknown verdict: {}", other))),
        }
    }
}

/// One submitted judgement.
///
/// `edge` is the external `"source -> target"` form. The comment is kept
/// for the trainee's remediation notes and plays no part in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub edge: String,
    #[serde(default)]
    pub verdict: Verdict,
    #[serde(default)]
    pub comment: String,
}

impl Annotation {
    #[inline]
    #[must_use]
    pub fn new(edge: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            edge: edge.into(),
            verdict,
            comment: String::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    #[inline]
    pub fn is_violation_claim(&self) -> bool {
        self.verdict == Verdict::Yes
    }
}
