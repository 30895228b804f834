//! Adaptive, parallel, in-place sorting of `f64` slices under a total
//! order.
//!
//! The engine combines fork/join task decomposition over a work-stealing
//! pool, algorithm selection by range size and depth budget (insertion
//! sort / heap sort / quicksort), median-of-five pivot sampling, a
//! sortedness prescan that skips or reverses already-ordered input, and
//! bit-exact handling of NaN and signed zero: NaNs end up at the tail in
//! unspecified relative order, negative zeros lead the zero block.
//!
//! ```
//! let mut data = [3.0, 1.0, -0.0, 0.0, f64::NAN, 2.0];
//! parsort::sort(&mut data);
//! assert_eq!(data[0].to_bits(), (-0.0_f64).to_bits());
//! assert_eq!(&data[1..5], &[0.0, 1.0, 2.0, 3.0]);
//! assert!(data[5].is_nan());
//! ```

use std::error::Error;
use std::fmt;

mod engine;

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges at or below this size use insertion sort; also the boundary
    /// between the prescan's direct scan and its windowed heuristic.
    pub insertion_threshold: usize,
    /// Total sizes above this run the task tree on the worker pool;
    /// anything smaller recurses synchronously on the calling thread.
    pub parallel_threshold: usize,
    /// Largest range whose prescan confirmation is a plain sequential
    /// scan; above it the confirmation forks.
    pub exact_scan_limit: usize,
    /// Leaf size of the forked prescan recursion.
    pub scan_leaf_size: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 100,
    parallel_threshold: 4096,
    exact_scan_limit: 10_000,
    scan_leaf_size: 1024,
};

/// Sorts `data` ascending in place.
///
/// Above the parallel threshold the sort runs on rayon's shared global
/// pool; use a [`Sorter`] to control pool size or isolate the workload on
/// a dedicated pool. A panic inside any forked subtask propagates to this
/// call; the slice contents are then unspecified but still a permutation
/// of the input.
pub fn sort(data: &mut [f64]) {
    engine::sort(data, data.len() > TUNED_PARAMS.parallel_threshold);
}

/// A sort engine bound to its own fixed-size worker pool.
///
/// The pool is created once, sized at construction, and reused across
/// calls; callers that sort many buffers amortize pool startup to zero.
pub struct Sorter {
    pool: rayon::ThreadPool,
}

impl Sorter {
    /// Creates a sorter with one worker per available hardware thread.
    pub fn new() -> Result<Self, SorterBuildError> {
        Self::with_num_threads(0)
    }

    /// Creates a sorter with an explicit worker count. Zero means one
    /// worker per available hardware thread.
    pub fn with_num_threads(num_threads: usize) -> Result<Self, SorterBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(SorterBuildError)?;
        Ok(Self { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Sorts `data` ascending in place, on the owned pool when the size
    /// justifies fork/join coordination and synchronously otherwise.
    pub fn sort(&self, data: &mut [f64]) {
        if data.len() > TUNED_PARAMS.parallel_threshold {
            self.pool.install(|| engine::sort(data, true));
        } else {
            engine::sort(data, false);
        }
    }
}

impl fmt::Debug for Sorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}

/// The worker pool could not be spawned.
#[derive(Debug)]
pub struct SorterBuildError(rayon::ThreadPoolBuildError);

impl fmt::Display for SorterBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to build sort worker pool: {}", self.0)
    }
}

impl Error for SorterBuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn bits(data: &[f64]) -> Vec<u64> {
        data.iter().map(|x| x.to_bits()).collect()
    }

    /// For inputs whose NaNs (if any) share one positive payload, the
    /// engine's contract coincides bit-for-bit with `f64::total_cmp`
    /// ordering: NaNs at the tail, negative zeros leading the zero block.
    fn assert_sorts_like_total_order(data: &[f64]) {
        let mut actual = data.to_vec();
        sort(&mut actual);

        let mut expected = data.to_vec();
        expected.sort_unstable_by(f64::total_cmp);

        assert_eq!(bits(&actual), bits(&expected), "input_len={}", data.len());
    }

    #[test]
    fn edge_cases() {
        let cases: [&[f64]; 8] = [
            &[],
            &[42.0],
            &[2.0, 1.0],
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
            &[7.0; 128],
            &[f64::NEG_INFINITY, 1.0, f64::INFINITY, 0.0, f64::MAX, f64::MIN],
            &[5.0, 5.0, 3.0, 3.0, 1.0, 1.0, 4.0, 4.0, 2.0, 2.0],
        ];

        for case in cases {
            assert_sorts_like_total_order(case);
        }
    }

    #[test]
    fn readme_example() {
        let mut data = [3.0, 1.0, -0.0, 0.0, f64::NAN, 2.0];
        sort(&mut data);

        assert_eq!(data[0].to_bits(), (-0.0_f64).to_bits());
        assert_eq!(bits(&data[1..5]), bits(&[0.0, 1.0, 2.0, 3.0]));
        assert!(data[5].is_nan());
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[
            2_usize, 3, 8, 31, 64, 100, 101, 127, 511, 2048, 4096, 4097, 8192, 20_000,
        ] {
            let data: Vec<f64> = (0..size).map(|_| rng.random_range(-1e9..1e9)).collect();
            assert_sorts_like_total_order(&data);
        }
    }

    #[test]
    fn fixed_seed_special_value_mix() {
        let mut rng = StdRng::seed_from_u64(0x5EC1_2026);
        for &size in &[64_usize, 1024, 10_000] {
            let data: Vec<f64> = (0..size)
                .map(|_| match rng.random_range(0_u32..10) {
                    0 => f64::NAN,
                    1 => -0.0,
                    2 => 0.0,
                    3 => f64::INFINITY,
                    4 => f64::NEG_INFINITY,
                    _ => rng.random_range(-1e6..1e6),
                })
                .collect();
            assert_sorts_like_total_order(&data);
        }
    }

    #[test]
    fn nan_payloads_end_up_in_the_tail() {
        let mut rng = StdRng::seed_from_u64(0x5EC2_2026);
        let mut data: Vec<f64> = (0..2000).map(|_| rng.random_range(-1e3..1e3)).collect();
        for i in 0..50 {
            data[i * 37] = f64::from_bits(0x7FF8_0000_0000_0001 + i as u64);
        }
        let original = data.clone();

        sort(&mut data);

        let split = data.len() - 50;
        assert!(data[..split].windows(2).all(|w| w[0] <= w[1]));
        assert!(data[split..].iter().all(|x| x.is_nan()));

        // Same bit multiset in and out, payloads included.
        let mut before = bits(&original);
        let mut after = bits(&data);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn negative_zeros_lead_the_zero_block() {
        let mut data = vec![1.0, -0.0, 3.0, 0.0, -0.0, -2.0, 0.0, -0.0];
        sort(&mut data);

        let expected = [-2.0, -0.0, -0.0, -0.0, 0.0, 0.0, 1.0, 3.0];
        assert_eq!(bits(&data), bits(&expected));
    }

    #[test]
    fn lone_negative_zero_is_not_erased() {
        let mut data = vec![4.0, 0.0, -0.0, 0.0, -4.0];
        sort(&mut data);

        let expected = [-4.0, -0.0, 0.0, 0.0, 4.0];
        assert_eq!(bits(&data), bits(&expected));
    }

    #[test]
    fn presorted_input_is_left_bit_identical() {
        let data: Vec<f64> = (0..50_000).map(|i| i as f64 * 0.5).collect();
        let mut sorted = data.clone();
        sort(&mut sorted);
        assert_eq!(bits(&sorted), bits(&data));
    }

    #[test]
    fn reverse_sorted_input_takes_the_reversal_path() {
        let mut data: Vec<f64> = (0..50_000).rev().map(|i| i as f64 * 0.5).collect();
        sort(&mut data);

        let expected: Vec<f64> = (0..50_000).map(|i| i as f64 * 0.5).collect();
        assert_eq!(bits(&data), bits(&expected));
    }

    #[test]
    fn all_nan_input() {
        let mut data = vec![f64::NAN; 300];
        sort(&mut data);
        assert!(data.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn parallel_runs_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(0xDE7E_2026);
        let base: Vec<f64> = (0..1_000_000).map(|_| rng.random_range(-1e12..1e12)).collect();

        let mut first = base.clone();
        sort(&mut first);
        for _ in 0..3 {
            let mut run = base.clone();
            sort(&mut run);
            assert_eq!(bits(&run), bits(&first));
        }
    }

    #[test]
    fn sorter_matches_free_function() {
        let sorter = Sorter::with_num_threads(2).unwrap();
        assert_eq!(sorter.num_threads(), 2);

        let mut rng = StdRng::seed_from_u64(0x50B7_2026);
        for &size in &[100_usize, 5000, 30_000] {
            let data: Vec<f64> = (0..size).map(|_| rng.random_range(-1e6..1e6)).collect();

            let mut via_sorter = data.clone();
            sorter.sort(&mut via_sorter);
            let mut via_free = data.clone();
            sort(&mut via_free);

            assert_eq!(bits(&via_sorter), bits(&via_free));
        }
    }

    #[test]
    fn sorter_is_reusable_across_calls() {
        let sorter = Sorter::new().unwrap();
        let mut rng = StdRng::seed_from_u64(0x50B8_2026);
        for _ in 0..5 {
            let mut data: Vec<f64> = (0..10_000).map(|_| rng.random_range(-1.0..1.0)).collect();
            sorter.sort(&mut data);
            assert!(data.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
