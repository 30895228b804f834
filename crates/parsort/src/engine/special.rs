//! IEEE-754 special-value handling: NaN compaction before the sort and
//! signed-zero restoration after it.
//!
//! NaN defeats comparison-based sorting (`x != x`), so every NaN is moved
//! to the tail and excluded from the sortable range. Negative zero compares
//! equal to positive zero (`-0.0 == 0.0`), so it is detected by raw bit
//! pattern, rewritten as `+0.0` for the duration of the sort, and written
//! back at the head of the zero block afterwards.

const NEG_ZERO_BITS: u64 = (-0.0_f64).to_bits();

/// Single right-to-left pass. NaNs are swapped behind a shrinking right
/// boundary; negative zeros are rewritten as `+0.0` and counted. Returns
/// the sortable length (everything at or past it is NaN) and the
/// negative-zero count.
pub fn partition_special(data: &mut [f64]) -> (usize, usize) {
    let mut sortable = data.len();
    let mut negative_zeros = 0usize;

    let mut k = data.len();
    while k > 0 {
        k -= 1;
        let ak = data[k];
        if ak != ak {
            // The value pulled in from the boundary was scanned already,
            // so it is never itself a NaN or an unrecorded negative zero.
            sortable -= 1;
            data[k] = data[sortable];
            data[sortable] = ak;
        } else if ak.to_bits() == NEG_ZERO_BITS {
            negative_zeros += 1;
            data[k] = 0.0;
        }
    }

    (sortable, negative_zeros)
}

/// Rewrites the first `count` entries of the zero block as bit-exact
/// `-0.0`. `data` must be the sorted, NaN-free range that
/// [`partition_special`] was run over; it then contains at least `count`
/// zeros, all positive.
pub fn restore_negative_zeros(data: &mut [f64], count: usize) {
    if count == 0 {
        return;
    }

    // Sign-based binary search: negatives left, zeros and positives right.
    let first_zero = data.partition_point(|&x| x < 0.0);
    debug_assert!(first_zero + count <= data.len());
    debug_assert!(data[first_zero] == 0.0);

    for slot in &mut data[first_zero..first_zero + count] {
        *slot = -0.0;
    }
}
