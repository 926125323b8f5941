use crate::tree::Node;
use crate::values;
use serde::Serialize;

/// Full-array publish format for a rendering surface: the whole node set,
/// replaced wholesale after a run rather than patched incrementally.
#[derive(Clone, Debug, Serialize)]
pub struct TreeSnapshot {
    pub node_count: usize,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NodeSnapshot {
    pub id: String,
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<String>,
    pub pruned: bool,
}

impl TreeSnapshot {
    pub fn capture(nodes: &[Node]) -> TreeSnapshot {
        TreeSnapshot {
            node_count: nodes.len(),
            nodes: nodes.iter().map(NodeSnapshot::of).collect(),
        }
    }
}

impl NodeSnapshot {
    fn of(node: &Node) -> NodeSnapshot {
        NodeSnapshot {
            id: node.id.as_str().to_owned(),
            kind: node.kind.to_string(),
            x: node.position.x,
            y: node.position.y,
            value: node
                .value
                .clone()
                .unwrap_or_else(|| values::UNSET_LABEL.to_owned()),
            alpha: node.alpha.clone(),
            beta: node.beta.clone(),
            pruned: node.pruned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TreeSnapshot;
    use crate::tree::{Node, NodeId, NodeKind, Position};

    #[test]
    fn unset_values_render_as_question_mark() {
        let nodes = [
            Node::internal(NodeId::root(), NodeKind::Max, Position::root()),
            Node::leaf(NodeId::numbered(0), Position::default(), 4.0),
        ];
        let snapshot = TreeSnapshot::capture(&nodes);

        assert_eq!(snapshot.node_count, 2);
        assert_eq!(snapshot.nodes[0].value, "?");
        assert_eq!(snapshot.nodes[0].kind, "max");
        assert_eq!(snapshot.nodes[1].value, "4");
        assert!(!snapshot.nodes[1].pruned);
    }
}
