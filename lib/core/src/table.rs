// Edge-table import - builds a network from uploaded row records
use crate::graph::{validate_node_id, Level};
use crate::network::{GraphBuilder, NetworkGraph};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One row of an uploaded edge table.
///
/// `source` and `target` are required; every other column may be absent
/// or null. Fields are optional at the type level so a missing id is
/// reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRow {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub source_level: Option<Level>,
    #[serde(default)]
    pub target_level: Option<Level>,
    #[serde(default)]
    pub source_role: Option<String>,
    #[serde(default)]
    pub target_role: Option<String>,
}

impl EdgeRow {
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_levels(mut self, source_level: Option<Level>, target_level: Option<Level>) -> Self {
        self.source_level = source_level;
        self.target_level = target_level;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_roles(mut self, source_role: Option<String>, target_role: Option<String>) -> Self {
        self.source_role = source_role;
        self.target_role = target_role;
        self
    }

    fn endpoints(&self, row: usize) -> Result<(&str, &str)> {
        let source = required(row, "source", self.source.as_deref())?;
        let target = required(row, "target", self.target.as_deref())?;
        Ok((source, target))
    }
}

fn required<'a>(row: usize, field: &str, value: Option<&'a str>) -> Result<&'a str> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Validation(format!("row {}: missing {}", row, field)))?;
    validate_node_id(value).map_err(|e| Error::Validation(format!("row {}: {}", row, e)))?;
    Ok(value)
}

/// Build a network from edge-table rows.
///
/// The whole batch is rejected on the first malformed row, so a failed
/// import never produces a partial graph. Repeated (source, target) pairs
/// yield a single edge; level and role values from later rows overwrite
/// earlier ones.
pub fn build_graph_from_edge_table(rows: &[EdgeRow]) -> Result<NetworkGraph> {
    let endpoints = rows
        .iter()
        .enumerate()
        .map(|(i, row)| row.endpoints(i))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = GraphBuilder::new();
    for (row, (source, target)) in rows.iter().zip(endpoints) {
        builder.push_edge(source, target);
        builder.node(source, row.source_level, row.source_role.as_deref())?;
        builder.node(target, row.target_level, row.target_role.as_deref())?;
    }

    tracing::debug!(rows = rows.len(), "edge table imported");
    Ok(builder.build())
}
