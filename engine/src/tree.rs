mod adjacency;
mod layout;

pub use adjacency::Adjacency;
pub use layout::{Position, SPACING_X, SPACING_Y};

use crate::values;
use core::fmt;
use thiserror::Error;

pub const DEFAULT_LEVEL_WIDTH: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub const ROOT: &'static str = "node-root";

    #[inline]
    pub fn root() -> NodeId {
        NodeId(Self::ROOT.to_owned())
    }

    #[inline]
    pub fn numbered(index: usize) -> NodeId {
        NodeId(format!("node-{index}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> NodeId {
        NodeId(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> NodeId {
        NodeId(s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Max,
    Min,
    Leaf,
}

impl NodeKind {
    /// Kind of a generated internal level. Level counting starts at the
    /// first level below the root, which the display labels `max` like the
    /// root itself.
    #[inline]
    pub fn for_level(level: usize) -> NodeKind {
        if level % 2 == 0 {
            NodeKind::Max
        } else {
            NodeKind::Min
        }
    }

    #[inline]
    pub fn is_leaf(self) -> bool {
        self == NodeKind::Leaf
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Max => "max",
            NodeKind::Min => "min",
            NodeKind::Leaf => "leaf",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub position: Position,
    /// Fixed value assigned at build time; `Some` only for leaves. A run
    /// never overwrites it, and clearing restores the display from it.
    pub static_value: Option<String>,
    pub value: Option<String>,
    pub alpha: Option<String>,
    pub beta: Option<String>,
    pub pruned: bool,
}

impl Node {
    pub fn internal(id: NodeId, kind: NodeKind, position: Position) -> Node {
        Node {
            id,
            kind,
            position,
            static_value: None,
            value: None,
            alpha: None,
            beta: None,
            pruned: false,
        }
    }

    pub fn leaf(id: NodeId, position: Position, value: f64) -> Node {
        let display = values::display_number(value);
        Node {
            id,
            kind: NodeKind::Leaf,
            position,
            static_value: Some(display.clone()),
            value: Some(display),
            alpha: None,
            beta: None,
            pruned: false,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Resets everything a run may have written. Internal nodes go back to
    /// an unset value, leaves back to their stored static value, so a
    /// pruning marker from a previous run never leaks into the next one.
    pub fn clear_annotations(&mut self) {
        self.value = self.static_value.clone();
        self.alpha = None;
        self.beta = None;
        self.pruned = false;
    }

    /// Overwrites a leaf's stored value after the build. The new value is
    /// deliberately not validated here; an unparsable value evaluates as 0.
    pub fn set_static_value(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        self.static_value = Some(raw.clone());
        self.value = Some(raw);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Edge {
        Edge {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeConfig {
    /// Number of edges from the root to the leaf layer.
    pub depth: u32,
    /// Node counts for the generated internal levels, top to bottom.
    /// Missing (or zero) entries fall back to [`DEFAULT_LEVEL_WIDTH`].
    pub widths: Vec<usize>,
    pub leaf_values: Vec<f64>,
}

impl TreeConfig {
    /// Parses the comma-separated leaf-value form input. All-or-nothing:
    /// a single bad entry fails the whole parse.
    pub fn parse_leaves(raw: &str) -> Result<Vec<f64>, BuildError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        raw.split(',')
            .map(|entry| {
                let entry = entry.trim();
                entry
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| BuildError::InvalidLeafValue(entry.to_owned()))
            })
            .collect()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("tree depth must be at least 1, got {0}")]
    InvalidDepth(u32),
    #[error("leaf value '{0}' is not a finite number")]
    InvalidLeafValue(String),
}

/// Builds the full node set for a tree shape: one root, `depth - 1`
/// generated internal levels, then one leaf per value. Edges are authored
/// separately; the builder never creates any.
pub fn build(config: &TreeConfig) -> Result<Vec<Node>, BuildError> {
    if config.depth < 1 {
        return Err(BuildError::InvalidDepth(config.depth));
    }
    if let Some(bad) = config.leaf_values.iter().find(|v| !v.is_finite()) {
        return Err(BuildError::InvalidLeafValue(bad.to_string()));
    }

    let mut nodes = Vec::new();
    let mut next_id = 0;

    for level in 0..(config.depth as usize - 1) {
        let width = config
            .widths
            .get(level)
            .copied()
            .filter(|&w| w > 0)
            .unwrap_or(DEFAULT_LEVEL_WIDTH);
        for i in 0..width {
            nodes.push(Node::internal(
                NodeId::numbered(next_id),
                NodeKind::for_level(level),
                Position::centered(i, width, level as i64),
            ));
            next_id += 1;
        }
    }

    nodes.insert(
        0,
        Node::internal(NodeId::root(), NodeKind::Max, Position::root()),
    );

    let leaf_level = config.depth as i64 - 1;
    let leaf_count = config.leaf_values.len();
    for (i, &value) in config.leaf_values.iter().enumerate() {
        nodes.push(Node::leaf(
            NodeId::numbered(next_id),
            Position::centered(i, leaf_count, leaf_level),
            value,
        ));
        next_id += 1;
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::{BuildError, NodeId, NodeKind, TreeConfig, build};

    #[test]
    fn depth_three_shape() {
        let config = TreeConfig {
            depth: 3,
            widths: vec![2, 4],
            leaf_values: vec![1.0, 2.0, 3.0, 4.0],
        };
        let nodes = build(&config).unwrap();

        assert_eq!(nodes.len(), 1 + 2 + 4 + 4);
        assert_eq!(nodes[0].id, NodeId::root());
        assert_eq!(nodes[0].kind, NodeKind::Max);

        let leaves: Vec<_> = nodes.iter().filter(|n| n.is_leaf()).collect();
        assert_eq!(leaves.len(), 4);
        for leaf in &leaves {
            assert_eq!(leaf.position.y, 200.0);
        }
        assert_eq!(leaves[0].value.as_deref(), Some("1"));
        assert_eq!(leaves[3].value.as_deref(), Some("4"));
    }

    #[test]
    fn internal_kinds_alternate_by_level() {
        let config = TreeConfig {
            depth: 4,
            widths: vec![1, 1, 1],
            leaf_values: vec![0.0],
        };
        let nodes = build(&config).unwrap();

        assert_eq!(nodes[1].kind, NodeKind::Max);
        assert_eq!(nodes[2].kind, NodeKind::Min);
        assert_eq!(nodes[3].kind, NodeKind::Max);
    }

    #[test]
    fn internal_ids_are_sequential() {
        let config = TreeConfig {
            depth: 3,
            widths: vec![2],
            leaf_values: vec![5.0, 6.0],
        };
        let nodes = build(&config).unwrap();

        let ids: Vec<_> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            ["node-root", "node-0", "node-1", "node-2", "node-3", "node-4", "node-5"]
        );
    }

    #[test]
    fn missing_widths_default_to_two() {
        let config = TreeConfig {
            depth: 3,
            widths: Vec::new(),
            leaf_values: vec![1.0],
        };
        let nodes = build(&config).unwrap();
        let internal = nodes.iter().filter(|n| !n.is_leaf() && !n.id.is_root());
        assert_eq!(internal.count(), 4);
    }

    #[test]
    fn depth_one_has_no_internal_levels() {
        let config = TreeConfig {
            depth: 1,
            widths: Vec::new(),
            leaf_values: vec![3.0, 5.0],
        };
        let nodes = build(&config).unwrap();
        assert_eq!(nodes.len(), 3);
        assert!(nodes[0].id.is_root());
        assert!(nodes[1].is_leaf());
        assert_eq!(nodes[1].position.y, 0.0);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = TreeConfig {
            depth: 0,
            widths: Vec::new(),
            leaf_values: vec![1.0],
        };
        assert_eq!(build(&config), Err(BuildError::InvalidDepth(0)));
    }

    #[test]
    fn non_finite_leaf_is_rejected() {
        let config = TreeConfig {
            depth: 1,
            widths: Vec::new(),
            leaf_values: vec![1.0, f64::NAN],
        };
        assert!(matches!(
            build(&config),
            Err(BuildError::InvalidLeafValue(_))
        ));
    }

    #[test]
    fn parse_leaves_is_all_or_nothing() {
        assert_eq!(
            TreeConfig::parse_leaves("1, 2, 3.5"),
            Ok(vec![1.0, 2.0, 3.5])
        );
        assert_eq!(
            TreeConfig::parse_leaves("1, 2, x"),
            Err(BuildError::InvalidLeafValue("x".to_owned()))
        );
        assert_eq!(
            TreeConfig::parse_leaves("1, inf"),
            Err(BuildError::InvalidLeafValue("inf".to_owned()))
        );
        assert_eq!(TreeConfig::parse_leaves("  "), Ok(Vec::new()));
    }
}
