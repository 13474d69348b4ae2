//! Sorted-slice search and permutation helpers.

/// First index `i` with `xs[i] >= target`, or `xs.len()` if none.
///
/// `xs` must be sorted ascending.
#[inline]
pub fn lower_bound(xs: &[f64], target: f64) -> usize {
    xs.partition_point(|&x| x < target)
}

/// First index `i` with `xs[i] > target`, or `xs.len()` if none.
///
/// `xs` must be sorted ascending.
#[inline]
pub fn upper_bound(xs: &[f64], target: f64) -> usize {
    xs.partition_point(|&x| x <= target)
}

/// Indices that would sort `xs` ascending. Stable: equal elements keep their
/// relative order.
pub fn argsort<T: PartialOrd>(xs: &[T]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..xs.len()).collect();
    idx.sort_by(|&a, &b| xs[a].partial_cmp(&xs[b]).unwrap_or(std::cmp::Ordering::Equal));
    idx
}

/// Stable argsort for floats using the IEEE total order.
pub fn argsort_f64(xs: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..xs.len()).collect();
    idx.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));
    idx
}

/// Scatter values computed in sorted order back to the original order.
///
/// `zs` is aligned with `keys` sorted ascending; the result is aligned with
/// `keys` as given: `out[argsort(keys)[k]] = zs[k]`.
pub fn undo_sort_by<Z: Clone, T: PartialOrd>(zs: &[Z], keys: &[T]) -> Vec<Z> {
    scatter(zs, &argsort(keys))
}

/// Place `zs[k]` at position `order[k]`.
pub(crate) fn scatter<Z: Clone>(zs: &[Z], order: &[usize]) -> Vec<Z> {
    debug_assert_eq!(zs.len(), order.len());
    let mut out: Vec<Option<Z>> = vec![None; zs.len()];
    for (z, &pos) in zs.iter().zip(order) {
        out[pos] = Some(z.clone());
    }
    out.into_iter().flatten().collect()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().sum::<f64>() / xs.len() as f64)
    }
}

/// Remove consecutive duplicates from an already-sorted vector.
pub fn dedup_sorted(mut xs: Vec<f64>) -> Vec<f64> {
    xs.dedup();
    xs
}

#[cfg(test)]
mod tests {
    use super::*;

    const XS: [f64; 10] = [1.0, 14.0, 32.0, 51.0, 51.0, 51.0, 243.0, 419.0, 750.0, 910.0];

    #[test]
    fn test_lower_bound() {
        assert_eq!(lower_bound(&XS, 51.0), 3);
        assert_eq!(lower_bound(&XS, 1.0), 0);
        assert_eq!(lower_bound(&XS, 910.0), 9);
        assert_eq!(lower_bound(&XS, 0.0), 0);
        assert_eq!(lower_bound(&XS, 52.0), 6);
        assert_eq!(lower_bound(&XS, 912.0), 10);
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(upper_bound(&XS, 51.0), 6);
        assert_eq!(upper_bound(&XS, 1.0), 1);
        assert_eq!(upper_bound(&XS, 910.0), 10);
        assert_eq!(upper_bound(&XS, 0.0), 0);
    }

    #[test]
    fn test_bounds_on_empty() {
        assert_eq!(lower_bound(&[], 3.0), 0);
        assert_eq!(upper_bound(&[], 3.0), 0);
    }

    #[test]
    fn test_argsort() {
        let xs = ["c", "a", "k", "xx", "bb", "k"];
        let mut idx = argsort(&xs);
        assert_eq!(idx, vec![1, 4, 0, 2, 5, 3]);
        idx.sort();
        assert_eq!(idx, vec![0, 1, 2, 3, 4, 5]);

        assert_eq!(argsort(&["c", "a", "b"]), vec![1, 2, 0]);
        assert!(argsort::<f64>(&[]).is_empty());
        assert_eq!(argsort(&["x"]), vec![0]);
    }

    #[test]
    fn test_argsort_of_sorted_is_identity() {
        let mut xs = vec!["c", "a", "k", "xx", "bb", "k"];
        xs.sort();
        assert_eq!(argsort(&xs), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_argsort_rearranges_into_sorted() {
        let xs = [3.5, -1.0, 7.0, 3.5, 0.0];
        let rearranged: Vec<f64> = argsort(&xs).into_iter().map(|i| xs[i]).collect();
        let mut sorted = xs.to_vec();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(rearranged, sorted);
        assert_eq!(argsort_f64(&xs), argsort(&xs));
    }

    #[test]
    fn test_undo_sort_by() {
        let xs = ["c", "a", "k", "xx", "bb", "k"];
        assert_eq!(undo_sort_by(&argsort(&xs), &xs), vec![0, 1, 2, 3, 4, 5]);

        let mut sorted = xs.to_vec();
        sorted.sort();
        assert_eq!(undo_sort_by(&sorted, &xs), xs.to_vec());

        assert_eq!(undo_sort_by(&[0, 1, 2], &["c", "a", "b"]), vec![2, 0, 1]);
        assert!(undo_sort_by::<i32, &str>(&[], &[]).is_empty());
        assert_eq!(undo_sort_by(&[-3], &["x"]), vec![-3]);
    }

    #[test]
    fn test_argsort_undo_round_trip() {
        let xs = [9.0, -2.5, 4.0, 4.0, 0.0, 100.0, -7.0];
        let n = xs.len();
        assert_eq!(undo_sort_by(&argsort(&xs), &xs), (0..n).collect::<Vec<_>>());

        let mut sorted = xs.to_vec();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(undo_sort_by(&sorted, &xs), xs.to_vec());
    }

    #[test]
    fn test_argsort_undo_round_trip_random() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        for _ in 0..50 {
            let n = rng.gen_range(0..40);
            // Small integer grid so duplicates show up.
            let xs: Vec<f64> = (0..n).map(|_| rng.gen_range(-10..10) as f64 * 0.5).collect();

            assert_eq!(undo_sort_by(&argsort(&xs), &xs), (0..n).collect::<Vec<_>>());

            let mut sorted = xs.clone();
            sorted.sort_by(f64::total_cmp);
            assert_eq!(undo_sort_by(&sorted, &xs), xs);
            assert_eq!(argsort(&xs), argsort_f64(&xs));
        }
    }

    #[test]
    fn test_mean_and_dedup() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4.0, 5.0]), Some(4.5));
        assert_eq!(dedup_sorted(vec![1.0, 1.0, 2.0, 5.0, 5.0]), vec![1.0, 2.0, 5.0]);
    }
}
