//! The recursive sort task: insertion sort, heap sort, or a quicksort
//! split, keyed on range size and remaining depth budget.

use crate::TUNED_PARAMS;

use super::{common, heap, pivot};

/// Sorts one range. In parallel mode each quicksort split runs one side
/// inline and hands the sibling to the work-stealing pool via
/// `rayon::join`; sequential mode recurses on the calling thread.
///
/// The depth budget is decremented on every split; at zero the range falls
/// back to heap sort, bounding total work to O(n log n) no matter how the
/// pivots land.
pub fn sort_range(data: &mut [f64], depth_budget: usize, parallel: bool) {
    let len = data.len();
    if len <= TUNED_PARAMS.insertion_threshold {
        common::insertion_sort(data);
        return;
    }
    if depth_budget == 0 {
        heap::heap_sort(data);
        return;
    }

    let pivot_index = pivot::median_of_five(data);
    let split = partition(data, pivot_index);

    let (left, rest) = data.split_at_mut(split);
    let right = &mut rest[1..];

    if parallel {
        rayon::join(
            || sort_range(left, depth_budget - 1, true),
            || sort_range(right, depth_budget - 1, true),
        );
    } else {
        sort_range(left, depth_budget - 1, false);
        sort_range(right, depth_budget - 1, false);
    }
}

/// Single-pass moving-boundary partition. Parks the pivot at the last
/// index, sweeps left to right swapping anything below the pivot value down
/// to the advancing store index, then swaps the pivot into the store slot.
/// Returns the pivot's final index; everything before it is `< pivot`,
/// everything after is `>= pivot`.
#[inline]
fn partition(data: &mut [f64], pivot_index: usize) -> usize {
    let last = data.len() - 1;
    data.swap(pivot_index, last);
    let pivot_value = data[last];

    let ptr = data.as_mut_ptr();
    let mut store = 0usize;
    // Hot loop: unchecked accesses remove repeated bounds checks.
    unsafe {
        for i in 0..last {
            if *ptr.add(i) < pivot_value {
                std::ptr::swap(ptr.add(i), ptr.add(store));
                store += 1;
            }
        }
    }

    data.swap(store, last);
    store
}
