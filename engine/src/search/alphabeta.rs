use super::SearchCtx;
use super::update::{NodeUpdate, UpdateLog};
use super::window::Window;
use crate::tree::Node;
use crate::values;

/// Alpha-beta variant of the minimax walk. Terminal and no-children
/// handling match `minimax::evaluate`; siblings at one node share a single
/// running window. On a cutoff every child except the one holding the best
/// value is marked pruned, including children already fully evaluated:
/// the marker records "did not decide this node", not "was skipped".
pub(super) fn evaluate(
    ctx: &SearchCtx<'_>,
    node: &Node,
    depth: u32,
    maximizing: bool,
    mut window: Window,
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
    let mut best_child: Option<usize> = None;

    for (n, child) in children.iter().enumerate() {
        let child_value = evaluate(ctx, child, depth + 1, !maximizing, window, log);

        if maximizing {
            if child_value > value {
                value = child_value;
                best_child = Some(n);
            }
            window.raise_alpha(value);
        } else {
            if child_value < value {
                value = child_value;
                best_child = Some(n);
            }
            window.lower_beta(value);
        }

        if window.is_cutoff() {
            for (i, sibling) in children.iter().enumerate() {
                if best_child != Some(i) {
                    log.push(NodeUpdate::pruned(&sibling.id));
                }
            }
            break;
        }
    }

    // No improving child means nothing is published for this node.
    if best_child.is_some() {
        log.push(NodeUpdate::with_bounds(&node.id, value, window));
    }

    value
}
