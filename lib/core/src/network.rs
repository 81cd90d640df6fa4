use crate::graph::{validate_node_id, EdgeKey, Level, Node};
use crate::Result;
use ahash::AHashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

/// A directed device network with Purdue levels on its nodes.
///
/// Immutable once built; use [`GraphBuilder`] to construct one. Nodes and
/// edges iterate in insertion order, and there is at most one edge per
/// ordered (source, target) pair.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    graph: DiGraph<Node, ()>,
    node_indices: AHashMap<String, NodeIndex>,
}

/// Serializable snapshot of a network for presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeKey>,
}

impl NetworkGraph {
    #[inline]
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_indices.get(id).map(|&idx| &self.graph[idx])
    }

    /// Explicit level of a node, `None` when unset or when the node is unknown
    pub fn level(&self, id: &str) -> Option<Level> {
        self.node(id).and_then(|n| n.level)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.graph.node_weights()
    }

    /// Edge endpoints in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
        self.graph
            .edge_indices()
            .filter_map(move |e| self.graph.edge_endpoints(e))
            .map(move |(a, b)| (&self.graph[a], &self.graph[b]))
    }

    pub fn edge_keys(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges().map(|(u, v)| EdgeKey {
            source: u.id.clone(),
            target: v.id.clone(),
        })
    }

    /// Edges in their external `"source -> target"` form, in insertion order
    pub fn edge_strings(&self) -> Vec<String> {
        self.edge_keys().map(|k| k.encode()).collect()
    }

    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        match (self.node_indices.get(source), self.node_indices.get(target)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    #[inline]
    pub fn contains_edge_key(&self, key: &EdgeKey) -> bool {
        self.contains_edge(&key.source, &key.target)
    }

    pub fn to_view(&self) -> GraphView {
        GraphView {
            nodes: self.nodes().cloned().collect(),
            edges: self.edge_keys().collect(),
        }
    }
}

/// Incremental constructor for [`NetworkGraph`].
///
/// Endpoints named by [`GraphBuilder::edge`] are created on first reference.
/// Attribute setters overwrite, so the last value given for a node wins.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DiGraph<Node, ()>,
    node_indices: AHashMap<String, NodeIndex>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node, setting whichever attributes are given
    pub fn node(&mut self, id: &str, level: Option<Level>, role: Option<&str>) -> Result<&mut Self> {
        validate_node_id(id)?;
        let idx = self.ensure_node(id);
        let node = &mut self.graph[idx];
        if let Some(level) = level {
            node.level = Some(level);
        }
        if let Some(role) = role {
            node.role = Some(role.to_string());
        }
        Ok(self)
    }

    pub fn set_level(&mut self, id: &str, level: Level) -> Result<&mut Self> {
        self.node(id, Some(level), None)
    }

    pub fn set_role(&mut self, id: &str, role: &str) -> Result<&mut Self> {
        self.node(id, None, Some(role))
    }

    /// Add a directed edge. Re-adding an existing pair does not duplicate it.
    pub fn edge(&mut self, source: &str, target: &str) -> Result<&mut Self> {
        validate_node_id(source)?;
        validate_node_id(target)?;
        self.push_edge(source, target);
        Ok(self)
    }

    pub fn build(self) -> NetworkGraph {
        tracing::debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "network graph built"
        );
        NetworkGraph {
            graph: self.graph,
            node_indices: self.node_indices,
        }
    }

    // Unchecked variants for ids already known to be valid

    pub(crate) fn push_node(&mut self, node: Node) {
        debug_assert!(validate_node_id(&node.id).is_ok());
        match self.node_indices.get(&node.id) {
            Some(&idx) => self.graph[idx] = node,
            None => {
                let id = node.id.clone();
                let idx = self.graph.add_node(node);
                self.node_indices.insert(id, idx);
            }
        }
    }

    pub(crate) fn push_edge(&mut self, source: &str, target: &str) {
        let a = self.ensure_node(source);
        let b = self.ensure_node(target);
        self.graph.update_edge(a, b, ());
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(Node::new(id));
        self.node_indices.insert(id.to_string(), idx);
        idx
    }
}
