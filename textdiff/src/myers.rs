//! Myers' O(ND) minimal edit script.
//!
//! Works on the edit graph of the region left after trimming the common prefix and suffix:
//! a move right deletes an old element, a move down inserts a new one, a diagonal move
//! matches. Iteration `d` records, per diagonal `k = x - y`, the furthest `x` reachable with
//! `d` non-diagonal moves. Rows are kept in a flat arena so the path can be walked back
//! from `(n, m)` without recursion.
//!
//! Tie-break: the predecessor with the larger `x` wins, and on equal `x` the deletion
//! predecessor (diagonal `k - 1`) wins, so old elements are consumed first. Paths never
//! leave the graph, so every recorded point is a real prefix of an edit script.

use crate::script::push_op;
use crate::{DiffConfig, EditOp, EditScript, Sequence, Span, Strategy};

const UNREACHED: usize = usize::MAX;

/// Computes the edit script turning `old` into `new`.
///
/// Between two matching runs all deleted elements come first (one `Delete`), then all
/// inserted ones (one `Insert`). Never fails; when the edit distance exceeds the
/// configured ceiling the differing region is replaced wholesale and the script reports
/// [`Strategy::FullReplace`].
pub fn compute_edits(old: &Sequence<'_>, new: &Sequence<'_>, config: &DiffConfig) -> EditScript {
    let (n, m) = (old.len(), new.len());
    let prefix = common_prefix(old, new);
    let suffix = common_suffix(old, new, prefix);
    let old_mid = Span::new(prefix, n - suffix);
    let new_mid = Span::new(prefix, m - suffix);

    let mut ops = Vec::new();
    push_op(&mut ops, EditOp::equal(Span::new(0, prefix), Span::new(0, prefix)));

    let mut strategy = Strategy::Myers;
    if old_mid.is_empty() || new_mid.is_empty() {
        push_gap(&mut ops, old_mid, new_mid);
    } else {
        let ceiling = config.ceiling.resolve(old_mid.len(), new_mid.len());
        let graph = Graph {
            old,
            new,
            old_mid,
            new_mid,
        };
        match graph.search(ceiling) {
            Some((trace, d)) => {
                let snakes = graph.backtrack(&trace, d);
                push_snakes(&mut ops, old_mid, new_mid, &snakes);
            }
            None => {
                tracing::warn!(
                    ceiling,
                    old_len = old_mid.len(),
                    new_len = new_mid.len(),
                    unit = %old.unit(),
                    "edit distance exceeds ceiling, replacing the differing region"
                );
                strategy = Strategy::FullReplace;
                push_gap(&mut ops, old_mid, new_mid);
            }
        }
    }

    push_op(
        &mut ops,
        EditOp::equal(Span::new(n - suffix, n), Span::new(m - suffix, m)),
    );

    let script = EditScript::with_strategy(ops, strategy);
    tracing::debug!(
        old_len = n,
        new_len = m,
        distance = script.distance(),
        ops = script.len(),
        strategy = ?script.strategy(),
        "computed edit script"
    );
    script
}

fn common_prefix(old: &Sequence<'_>, new: &Sequence<'_>) -> usize {
    let limit = old.len().min(new.len());
    (0..limit)
        .find(|&i| !old.eq_at(i, new, i))
        .unwrap_or(limit)
}

fn common_suffix(old: &Sequence<'_>, new: &Sequence<'_>, prefix: usize) -> usize {
    let (n, m) = (old.len(), new.len());
    let limit = n.min(m) - prefix;
    (0..limit)
        .find(|&i| !old.eq_at(n - 1 - i, new, m - 1 - i))
        .unwrap_or(limit)
}

/// A run of matching elements, in coordinates local to the searched region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snake {
    x: usize,
    y: usize,
    len: usize,
}

/// Furthest-reaching `x` per diagonal for every iteration.
///
/// Row `d` holds `d + 1` cells for `k = -d, -d + 2, ..., d` and starts at `d * (d + 1) / 2`.
#[derive(Debug, Default)]
struct Trace {
    cells: Vec<usize>,
}

impl Trace {
    fn row_start(d: usize) -> usize {
        d * (d + 1) / 2
    }

    fn get(&self, d: usize, k: isize) -> usize {
        let di = d as isize;
        if k < -di || k > di {
            return UNREACHED;
        }
        let idx = Self::row_start(d) + ((k + di) / 2) as usize;
        self.cells.get(idx).copied().unwrap_or(UNREACHED)
    }

    fn push(&mut self, x: usize) {
        self.cells.push(x);
    }
}

struct Graph<'s, 'a> {
    old: &'s Sequence<'a>,
    new: &'s Sequence<'a>,
    old_mid: Span,
    new_mid: Span,
}

impl Graph<'_, '_> {
    fn n(&self) -> usize {
        self.old_mid.len()
    }

    fn m(&self) -> usize {
        self.new_mid.len()
    }

    /// Forward pass. Returns the trace and the edit distance, or `None` once `d` passes
    /// `ceiling`.
    fn search(&self, ceiling: usize) -> Option<(Trace, usize)> {
        let (n, m) = (self.n(), self.m());
        let max_d = (n + m).min(ceiling);
        let mut trace = Trace::default();

        for d in 0..=max_d {
            let di = d as isize;
            for k in (-di..=di).step_by(2) {
                let moved = if d == 0 {
                    Some(0)
                } else {
                    self.step(&trace, d, k).map(|(_, x)| x)
                };
                let Some(x) = moved else {
                    trace.push(UNREACHED);
                    continue;
                };
                let x = self.slide(x, k);
                trace.push(x);
                if x == n && x as isize - k == m as isize {
                    return Some((trace, d));
                }
            }
        }
        None
    }

    /// Chooses the predecessor for diagonal `k` on iteration `d > 0`.
    ///
    /// Returns the predecessor's diagonal and the `x` reached after the single
    /// non-diagonal move, or `None` if neither neighbour can move onto `k` inside the graph.
    fn step(&self, trace: &Trace, d: usize, k: isize) -> Option<(isize, usize)> {
        let (n, m) = (self.n(), self.m());

        let down = match trace.get(d - 1, k + 1) {
            UNREACHED => None,
            x if x as isize - k <= m as isize => Some(x),
            _ => None,
        };
        let right = match trace.get(d - 1, k - 1) {
            UNREACHED => None,
            x if x < n => Some(x),
            _ => None,
        };

        // Compare the predecessors' `x`, before the move right adds one.
        match (down, right) {
            (Some(xd), Some(xr)) if xr >= xd => Some((k - 1, xr + 1)),
            (Some(xd), _) => Some((k + 1, xd)),
            (None, Some(xr)) => Some((k - 1, xr + 1)),
            (None, None) => None,
        }
    }

    /// Follows matching elements along diagonal `k` starting at `x`.
    fn slide(&self, mut x: usize, k: isize) -> usize {
        let (n, m) = (self.n(), self.m());
        let mut y = (x as isize - k) as usize;
        while x < n
            && y < m
            && self
                .old
                .eq_at(self.old_mid.start + x, self.new, self.new_mid.start + y)
        {
            x += 1;
            y += 1;
        }
        x
    }

    /// Walks the trace back from `(n, m)` and returns the matching runs in forward order.
    fn backtrack(&self, trace: &Trace, d_end: usize) -> Vec<Snake> {
        let (mut x, mut y) = (self.n(), self.m());
        let mut snakes = Vec::new();

        for d in (1..=d_end).rev() {
            let k = x as isize - y as isize;
            let Some((prev_k, moved_x)) = self.step(trace, d, k) else {
                unreachable!("diagonal {k} was reached on iteration {d} without a predecessor");
            };
            let moved_y = (moved_x as isize - k) as usize;
            if x > moved_x {
                snakes.push(Snake {
                    x: moved_x,
                    y: moved_y,
                    len: x - moved_x,
                });
            }
            x = trace.get(d - 1, prev_k);
            y = (x as isize - prev_k) as usize;
        }

        if x > 0 {
            snakes.push(Snake { x: 0, y: 0, len: x });
        }
        snakes.reverse();
        snakes
    }
}

fn push_snakes(ops: &mut Vec<EditOp>, old_mid: Span, new_mid: Span, snakes: &[Snake]) {
    let (mut x, mut y) = (old_mid.start, new_mid.start);
    for snake in snakes {
        let (sx, sy) = (old_mid.start + snake.x, new_mid.start + snake.y);
        push_gap(ops, Span::new(x, sx), Span::new(y, sy));
        push_op(
            ops,
            EditOp::equal(Span::new(sx, sx + snake.len), Span::new(sy, sy + snake.len)),
        );
        x = sx + snake.len;
        y = sy + snake.len;
    }
    push_gap(ops, Span::new(x, old_mid.end), Span::new(y, new_mid.end));
}

/// Emits an unmatched region: deletions first, then insertions.
fn push_gap(ops: &mut Vec<EditOp>, old: Span, new: Span) {
    push_op(ops, EditOp::delete(old, new.start));
    push_op(ops, EditOp::insert(old.end, new));
}
