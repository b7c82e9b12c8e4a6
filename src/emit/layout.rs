use super::catalog::GeneratedNodeKind;
use crate::workflow::Position;

/// Vertical distance between stacked nodes.
pub(crate) const ROW_STEP: f64 = 100.0;
/// Y coordinate of the first node, keeping a margin above the stack.
pub(crate) const ROW_START: f64 = 100.0;

/// Canvas position for the node at `index` in input order: nodes stack
/// top-to-bottom 100 units apart, with a per-kind base X and a small id
/// jitter to reduce visual overlap.
pub(crate) fn node_position(kind: GeneratedNodeKind, node_id: &str, index: usize) -> Position {
    Position {
        x: kind.base_x() + id_jitter(node_id),
        y: ROW_START + ROW_STEP * index as f64,
    }
}

/// Deterministic horizontal offset (0, 50 or 100 units) derived from the
/// numeric suffix of the node id. Purely cosmetic.
pub(crate) fn id_jitter(node_id: &str) -> f64 {
    (numeric_suffix(node_id) % 3) as f64 * 50.0
}

fn numeric_suffix(node_id: &str) -> u64 {
    let digits: Vec<char> = node_id
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits
        .into_iter()
        .rev()
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

/// Max depth derived purely from the spread of Y coordinates — a layout
/// artifact, not a graph-theoretic depth. Zero for an empty graph.
pub fn layout_depth<I>(ys: I) -> u32
where
    I: IntoIterator<Item = f64>,
{
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut seen = false;
    for y in ys {
        seen = true;
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if !seen {
        return 0;
    }
    ((max_y - min_y) / ROW_STEP).ceil() as u32 + 1
}
