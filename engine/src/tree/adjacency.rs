use super::{Edge, Node, NodeId};
use std::collections::{HashMap, HashSet};

/// Explicit parent-to-children map built once per run from the edge list.
///
/// Children keep the order their edges were authored in. An edge whose
/// target names no existing node is dropped here; this is the one place
/// the lenient dangling-edge policy lives.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl Adjacency {
    pub fn from_edges(edges: &[Edge], nodes: &[Node]) -> Adjacency {
        let known: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();
        let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for edge in edges {
            if !known.contains(&edge.target) {
                continue;
            }
            children
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
        }
        Adjacency { children }
    }

    /// Ordered children of a node. A node with no outgoing edges has none;
    /// that is a valid state, not an error.
    pub fn children_of(&self, id: &NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
