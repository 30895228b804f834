//! Engine pipeline: normalize special values, prescan for sortedness, run
//! the adaptive task tree, restore signed zeros.

pub(crate) mod adaptive;
pub(crate) mod common;
pub(crate) mod heap;
pub(crate) mod pivot;
pub(crate) mod prescan;
pub(crate) mod special;

use self::prescan::Order;

/// Sorts `data` ascending in place. `parallel` selects whether quicksort
/// splits and the large-range prescan fork onto the surrounding rayon
/// pool; the caller decides based on total size and installs the pool.
pub(crate) fn sort(data: &mut [f64], parallel: bool) {
    if data.len() < 2 {
        return;
    }

    let (sortable, negative_zeros) = special::partition_special(data);
    let core = &mut data[..sortable];

    if core.len() > 1 {
        match prescan::detect(core, parallel) {
            Order::Ascending => {}
            Order::Descending => core.reverse(),
            Order::Unsorted => {
                adaptive::sort_range(core, common::depth_budget(core.len()), parallel);
            }
        }
    }

    special::restore_negative_zeros(core, negative_zeros);
}
