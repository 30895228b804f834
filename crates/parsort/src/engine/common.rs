//! Shared helpers for the engine: small-range sorting and depth accounting.
//!
//! Every function here runs on NaN-free data; the normalizer has already
//! moved NaNs out of the sortable range, so plain `f64` comparisons are
//! total over the values that reach these loops.

#[inline]
pub fn insertion_sort(data: &mut [f64]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        // Hot loop: unchecked accesses remove repeated bounds checks.
        unsafe {
            while j > 0 {
                let prev = *data.get_unchecked(j - 1);
                if prev <= key {
                    break;
                }
                *data.get_unchecked_mut(j) = prev;
                j -= 1;
            }
            *data.get_unchecked_mut(j) = key;
        }
    }
}

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

/// Recursion budget for a range of `n` elements: `2 * floor(log2(n))`
/// quicksort splits before the engine falls back to heap sort.
#[inline]
pub fn depth_budget(n: usize) -> usize {
    2 * floor_log2(n)
}
