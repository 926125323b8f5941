use super::window::Window;
use crate::tree::{Node, NodeId};
use crate::values;
use std::collections::HashMap;

/// One per-node display change produced during evaluation. Fields that are
/// `None` leave the node's current state untouched when applied.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeUpdate {
    pub id: NodeId,
    pub value: Option<String>,
    pub alpha: Option<String>,
    pub beta: Option<String>,
    pub pruned: bool,
}

impl NodeUpdate {
    pub fn value(id: &NodeId, value: f64) -> NodeUpdate {
        NodeUpdate {
            id: id.clone(),
            value: Some(values::display_number(value)),
            alpha: None,
            beta: None,
            pruned: false,
        }
    }

    pub fn with_bounds(id: &NodeId, value: f64, window: Window) -> NodeUpdate {
        NodeUpdate {
            id: id.clone(),
            value: Some(values::display_number(value)),
            alpha: Some(values::display_number(window.alpha)),
            beta: Some(values::display_number(window.beta)),
            pruned: false,
        }
    }

    pub fn pruned(id: &NodeId) -> NodeUpdate {
        NodeUpdate {
            id: id.clone(),
            value: Some(values::PRUNED_LABEL.to_owned()),
            alpha: None,
            beta: None,
            pruned: true,
        }
    }
}

type Observer = Box<dyn FnMut(&NodeUpdate)>;

/// Ordered log of updates from one evaluation pass. Entries are pushed as
/// the recursion produces them and applied to the tree in one batch at the
/// end; an observer sees each entry as it is appended (the best-effort
/// incremental push towards a display surface).
pub struct UpdateLog {
    entries: Vec<NodeUpdate>,
    observer: Option<Observer>,
}

impl UpdateLog {
    pub fn new() -> UpdateLog {
        UpdateLog {
            entries: Vec::new(),
            observer: None,
        }
    }

    pub fn with_observer(observer: Observer) -> UpdateLog {
        UpdateLog {
            entries: Vec::new(),
            observer: Some(observer),
        }
    }

    pub fn push(&mut self, update: NodeUpdate) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&update);
        }
        self.entries.push(update);
    }

    pub fn entries(&self) -> &[NodeUpdate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pruned_count(&self) -> usize {
        self.entries.iter().filter(|u| u.pruned).count()
    }

    /// Applies the log in order. Later entries win for the same node, so a
    /// value published for a child and a pruning marker written afterwards
    /// by its parent resolve the way the recursion saw them.
    pub fn apply(&self, nodes: &mut [Node]) {
        let slots: Vec<Option<usize>> = {
            let mut index: HashMap<&NodeId, usize> = HashMap::with_capacity(nodes.len());
            for (i, node) in nodes.iter().enumerate() {
                index.insert(&node.id, i);
            }
            self.entries
                .iter()
                .map(|update| index.get(&update.id).copied())
                .collect()
        };

        for (update, slot) in self.entries.iter().zip(slots) {
            let Some(i) = slot else { continue };
            let node = &mut nodes[i];
            if let Some(value) = &update.value {
                node.value = Some(value.clone());
            }
            if let Some(alpha) = &update.alpha {
                node.alpha = Some(alpha.clone());
            }
            if let Some(beta) = &update.beta {
                node.beta = Some(beta.clone());
            }
            if update.pruned {
                node.pruned = true;
            }
        }
    }
}

impl Default for UpdateLog {
    fn default() -> UpdateLog {
        UpdateLog::new()
    }
}
