mod alphabeta;
mod minimax;
mod update;
mod window;

pub use update::{NodeUpdate, UpdateLog};
pub use window::Window;

use crate::tree::{Adjacency, Edge, Node, NodeId};
use core::fmt;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Minimax,
    AlphaBeta,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm: '{0}' (expected 'minimax' or 'alphabeta')")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
        match s {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" => Ok(Algorithm::AlphaBeta),
            other => Err(ParseAlgorithmError(other.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("tree has no root node (expected id '{root}')", root = NodeId::ROOT)]
    MissingRoot,
}

type OnUpdate = Box<dyn FnMut(&NodeUpdate)>;

#[derive(Default)]
pub struct RunOptions {
    on_update: Option<OnUpdate>,
}

impl RunOptions {
    /// Observes each per-node update as the recursion produces it. Best
    /// effort only; the batch applied after the run is authoritative.
    pub fn set_on_update(&mut self, f: impl FnMut(&NodeUpdate) + 'static) {
        self.on_update = Some(Box::new(f));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub root_value: f64,
    pub updates_published: usize,
    pub nodes_pruned: usize,
}

/// Everything one evaluation pass reads: the node set, an id index, the
/// adjacency built once from the edge list, and the configured depth that
/// decides the terminal condition.
pub(crate) struct SearchCtx<'a> {
    nodes: &'a [Node],
    index: HashMap<&'a NodeId, usize>,
    adjacency: Adjacency,
    pub(crate) tree_depth: u32,
}

impl<'a> SearchCtx<'a> {
    pub(crate) fn new(nodes: &'a [Node], edges: &[Edge], tree_depth: u32) -> SearchCtx<'a> {
        let index = nodes.iter().enumerate().map(|(i, n)| (&n.id, i)).collect();
        SearchCtx {
            nodes,
            index,
            adjacency: Adjacency::from_edges(edges, nodes),
            tree_depth,
        }
    }

    pub(crate) fn children(&self, id: &NodeId) -> Vec<&'a Node> {
        self.adjacency
            .children_of(id)
            .iter()
            .filter_map(|child| self.index.get(child).map(|&i| &self.nodes[i]))
            .collect()
    }
}

/// Clears prior annotations, runs the chosen evaluator from the root, and
/// applies every produced update to the node set in one batch. Fails before
/// touching anything beyond the clear if no root node exists; nothing
/// partial is ever published.
pub fn run(
    nodes: &mut [Node],
    edges: &[Edge],
    tree_depth: u32,
    algorithm: Algorithm,
    options: RunOptions,
) -> Result<RunReport, RunError> {
    for node in nodes.iter_mut() {
        node.clear_annotations();
    }

    let root = nodes
        .iter()
        .find(|n| n.id.is_root())
        .ok_or(RunError::MissingRoot)?;
    let root_id = root.id.clone();

    let mut log = match options.on_update {
        Some(observer) => UpdateLog::with_observer(observer),
        None => UpdateLog::new(),
    };

    let ctx = SearchCtx::new(nodes, edges, tree_depth);
    let root_value = match algorithm {
        Algorithm::Minimax => minimax::evaluate(&ctx, root, 0, true, &mut log),
        Algorithm::AlphaBeta => {
            alphabeta::evaluate(&ctx, root, 0, true, Window::FULL, &mut log)
        }
    };
    drop(ctx);

    // The root already published itself inside the recursion (when it had
    // an improving child); re-asserting keeps the final state right even
    // when it did not.
    log.push(NodeUpdate::value(&root_id, root_value));

    let report = RunReport {
        algorithm,
        root_value,
        updates_published: log.len(),
        nodes_pruned: log.pruned_count(),
    };
    log.apply(nodes);

    Ok(report)
}
