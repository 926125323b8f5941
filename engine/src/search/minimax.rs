use super::SearchCtx;
use super::update::{NodeUpdate, UpdateLog};
use crate::tree::Node;
use crate::values;

/// Plain minimax. Terminal is depth-based: once the recursion reaches the
/// configured tree depth the node's display value is read directly, whatever
/// its kind. A node with no children before that evaluates to 0.
pub(super) fn evaluate(
    ctx: &SearchCtx<'_>,
    node: &Node,
    depth: u32,
    maximizing: bool,
    log: &mut UpdateLog,
) -> f64 {
    if depth == ctx.tree_depth {
        return values::leaf_value(node.value.as_deref());
    }

    let children = ctx.children(&node.id);
    if children.is_empty() {
        return 0.0;
    }

    let mut value = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for child in children {
        let child_value = evaluate(ctx, child, depth + 1, !maximizing, log);
        value = if maximizing {
            value.max(child_value)
        } else {
            value.min(child_value)
        };
    }

    log.push(NodeUpdate::value(&node.id, value));
    value
}
