// Network graph primitives - Purdue-levelled nodes and directed edge keys
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Purdue hierarchy level. Conventionally 0-4, higher is closer to the enterprise.
pub type Level = u32;

/// Separator between source and target in the external edge form `"source -> target"`
pub const EDGE_SEPARATOR: &str = " -> ";

// Any id containing the arrow could make the joined form ambiguous, even
// without the surrounding spaces (e.g. "a ->" + "b" vs "a" + "-> b").
const ARROW: &str = "->";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// `None` when no level was ever given; distinct from level 0
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level: None,
            role: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Check that a node id survives the `"source -> target"` round trip.
pub fn validate_node_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::Validation("node id must not be empty".to_string()));
    }
    if id.contains(ARROW) {
        return Err(Error::Validation(format!(
            "node id {:?} must not contain {:?}",
            id, ARROW
        )));
    }
    Ok(())
}

/// Structured identity of a directed edge.
///
/// Ordering is lexicographic on (source, target), which keeps violation
/// sets and score details in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
}

impl EdgeKey {
    /// Build a key from two ids, rejecting ids that would break the string form.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let target = target.into();
        validate_node_id(&source)?;
        validate_node_id(&target)?;
        Ok(Self { source, target })
    }

    /// Encode as `"source -> target"`
    #[inline]
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.source, EDGE_SEPARATOR, self.target)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source, EDGE_SEPARATOR, self.target)
    }
}

impl FromStr for EdgeKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (source, target) = s
            .split_once(EDGE_SEPARATOR)
            .ok_or_else(|| Error::InvalidEdgeRef(s.to_string()))?;
        EdgeKey::new(source, target).map_err(|_| Error::InvalidEdgeRef(s.to_string()))
    }
}

impl From<EdgeKey> for String {
    fn from(key: EdgeKey) -> Self {
        key.encode()
    }
}

impl TryFrom<String> for EdgeKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
