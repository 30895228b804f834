//! Median-of-five pivot selection.
//!
//! Five positions are sampled at a stride of `(len / 8) * 3 + 3`, which
//! spreads them across the range while keeping the middle three clustered
//! around the center. A fixed compare-and-swap network orders the outer
//! four samples, then the saved middle value is slotted back among them so
//! the returned index holds the median of the five. Compared to single- or
//! triple-sample pivoting this keeps partitions balanced on patterned
//! inputs (organ pipes, rotations, staggered runs) that defeat simpler
//! heuristics.

/// Picks a pivot for a range above the insertion-sort threshold and returns
/// its index. The five sampled positions end up mutually ordered as a side
/// effect.
pub fn median_of_five(data: &mut [f64]) -> usize {
    let len = data.len();
    debug_assert!(len > 100, "sampling stride requires a large range");

    let step = (len >> 3) * 3 + 3;
    let e1 = step;
    let e5 = len - 1 - step;
    let e3 = (e1 + e5) >> 1;
    let e2 = (e1 + e3) >> 1;
    let e4 = (e3 + e5) >> 1;
    debug_assert!(e1 < e2 && e2 < e3 && e3 < e4 && e4 < e5);

    let a3 = data[e3];

    if data[e5] < data[e2] {
        data.swap(e5, e2);
    }
    if data[e4] < data[e1] {
        data.swap(e4, e1);
    }
    if data[e5] < data[e4] {
        data.swap(e5, e4);
    }
    if data[e2] < data[e1] {
        data.swap(e2, e1);
    }
    if data[e4] < data[e2] {
        data.swap(e4, e2);
    }

    // e1, e2, e4, e5 are now ascending; place the saved middle sample so
    // that e3 holds the median of all five.
    if a3 < data[e2] {
        if a3 < data[e1] {
            data[e3] = data[e2];
            data[e2] = data[e1];
            data[e1] = a3;
        } else {
            data[e3] = data[e2];
            data[e2] = a3;
        }
    } else if a3 > data[e4] {
        if a3 > data[e5] {
            data[e3] = data[e4];
            data[e4] = data[e5];
            data[e5] = a3;
        } else {
            data[e3] = data[e4];
            data[e4] = a3;
        }
    }

    e3
}
