//! Sortedness prescan: detects already-ascending or already-descending
//! ranges so the full sort can be skipped (or replaced by an O(n)
//! reversal).
//!
//! Three tiers by range size:
//! - small ranges get one exact sequential scan;
//! - mid-size ranges are gated by a cheap three-window heuristic before the
//!   exact scan, so the common unsorted case pays O(1);
//! - large ranges confirm the heuristic with a parallel recursive scan that
//!   forks one half at each level and ANDs the per-half verdicts. The
//!   halves overlap by one element so the pair straddling each split point
//!   is compared too.

use crate::TUNED_PARAMS;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    Ascending,
    Descending,
    Unsorted,
}

/// Classifies a NaN-free range. `parallel` gates the forked confirmation
/// scan; it is only consulted above the exact-scan limit.
pub fn detect(data: &[f64], parallel: bool) -> Order {
    let len = data.len();
    if len <= TUNED_PARAMS.insertion_threshold {
        return order_from(directions(data));
    }

    if !window_heuristic(data) {
        return Order::Unsorted;
    }

    let flags = if parallel && len > TUNED_PARAMS.exact_scan_limit {
        directions_parallel(data)
    } else {
        directions(data)
    };
    order_from(flags)
}

#[inline]
fn order_from((ascending, descending): (bool, bool)) -> Order {
    if ascending {
        Order::Ascending
    } else if descending {
        Order::Descending
    } else {
        Order::Unsorted
    }
}

/// Exact scan, both directions in one pass, short-circuiting once both are
/// disproved. The negated comparisons make a NaN disprove both directions
/// instead of vacuously satisfying them.
fn directions(data: &[f64]) -> (bool, bool) {
    let mut ascending = true;
    let mut descending = true;
    for pair in data.windows(2) {
        if !(pair[0] <= pair[1]) {
            ascending = false;
        }
        if !(pair[0] >= pair[1]) {
            descending = false;
        }
        if !ascending && !descending {
            break;
        }
    }
    (ascending, descending)
}

/// Recursive forked scan. Halves share the element at the split point, so
/// every adjacent pair of the range is covered by exactly one leaf.
fn directions_parallel(data: &[f64]) -> (bool, bool) {
    if data.len() <= TUNED_PARAMS.scan_leaf_size {
        return directions(data);
    }

    let mid = data.len() / 2;
    let (left, right) = rayon::join(
        || directions_parallel(&data[..=mid]),
        || directions_parallel(&data[mid..]),
    );
    (left.0 && right.0, left.1 && right.1)
}

/// Samples three 5-element windows (head, middle, tail). Each window must
/// be internally monotone and the windows mutually consistent; anything
/// else means the range cannot be fully sorted in either direction.
fn window_heuristic(data: &[f64]) -> bool {
    let len = data.len();
    debug_assert!(len > TUNED_PARAMS.insertion_threshold);

    let mid_start = (len - 1) / 2 - 2;
    if !window_monotone(&data[..5])
        || !window_monotone(&data[mid_start..mid_start + 5])
        || !window_monotone(&data[len - 5..])
    {
        return false;
    }

    let head_last = data[4];
    let center = data[mid_start + 2];
    let tail_first = data[len - 5];
    (head_last <= center && center <= tail_first)
        || (head_last >= center && center >= tail_first)
}

#[inline]
fn window_monotone(window: &[f64]) -> bool {
    let (ascending, descending) = directions(window);
    ascending || descending
}
