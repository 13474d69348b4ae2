//! Greedy 1-D fixed-radius clustering.
//!
//! Values are sorted, then repeatedly the largest run of not-yet-clustered
//! neighbours whose span is at most `radius` is collapsed onto its mean.
//! Runs are grown around every free position both leftwards and rightwards;
//! on equal run length the tighter span wins. The scan restarts after each
//! collapse and stops once no run longer than one remains.
//!
//! The result is reported in input order. Slots that never joined a run of
//! two or more values are `None`.

use super::search::{argsort_f64, dedup_sorted, lower_bound, mean, scatter, upper_bound};
use crate::geometry::{Axis, Block};

/// Cluster `xs` with the given radius.
///
/// Non-finite values never join a cluster. A negative or NaN radius yields
/// no clusters at all.
pub fn fixed_radius_clustering(xs: &[f64], radius: f64) -> Vec<Option<f64>> {
    let mut out = vec![None; xs.len()];
    if !(radius >= 0.0) {
        return out;
    }

    let finite: Vec<usize> = (0..xs.len()).filter(|&i| xs[i].is_finite()).collect();
    let values: Vec<f64> = finite.iter().map(|&i| xs[i]).collect();
    for (slot, z) in finite.into_iter().zip(cluster_finite(&values, radius)) {
        out[slot] = z;
    }
    out
}

fn cluster_finite(xs: &[f64], radius: f64) -> Vec<Option<f64>> {
    let n = xs.len();
    let order = argsort_f64(xs);
    let ys: Vec<f64> = order.iter().map(|&i| xs[i]).collect();
    let mut zs: Vec<Option<f64>> = vec![None; n];

    // Positions past the end count as free.
    let taken = |zs: &[Option<f64>], k: usize| zs.get(k).is_some_and(Option::is_some);

    loop {
        let mut chunk = 1usize;
        // Half-open [start, end) into `ys`.
        let mut range = (0usize, 0usize);

        for i in 0..n {
            if zs[i].is_some() {
                continue;
            }

            let mut left = lower_bound(&ys, ys[i] - radius);
            while taken(&zs, left) {
                left += 1;
            }
            let size = i - left + 1;
            if size > chunk {
                chunk = size;
                range = (left, i + 1);
            } else if chunk > 1 && size == chunk {
                let (a, b) = range;
                if ys[i] - ys[left] < ys[b - 1] - ys[a] {
                    range = (left, i + 1);
                }
            }

            let mut right = upper_bound(&ys, ys[i] + radius);
            while taken(&zs, right) {
                right -= 1;
            }
            let size = right - i;
            if size > chunk {
                chunk = size;
                range = (i, right);
            } else if chunk > 1 && size == chunk {
                let (a, b) = range;
                if ys[right - 1] - ys[i] < ys[b - 1] - ys[a] {
                    range = (i, right);
                }
            }
        }

        if chunk <= 1 {
            break;
        }
        let (a, b) = range;
        let centroid = mean(&ys[a..b]);
        for z in &mut zs[a..b] {
            *z = centroid;
        }
    }

    scatter(&zs, &order)
}

/// Shared alignment lines among a set of coordinates.
///
/// Clusters the values, keeps the clustered centroids, rounds them to whole
/// pixels and returns them sorted and deduplicated.
pub fn attractors(xs: &[f64], radius: f64) -> Vec<f64> {
    let mut lines: Vec<f64> = fixed_radius_clustering(xs, radius)
        .into_iter()
        .flatten()
        .map(f64::round)
        .collect();
    lines.sort_by(f64::total_cmp);
    dedup_sorted(lines)
}

/// Alignment lines shared by block boundaries along `axis`.
///
/// Every block contributes its low and high boundary coordinate.
pub fn boundary_attractors(blocks: &[Block], axis: Axis, radius: f64) -> Vec<f64> {
    let edges: Vec<f64> = blocks
        .iter()
        .flat_map(|b| {
            let (lo, hi) = b.boundary_coords(axis);
            [lo, hi]
        })
        .collect();
    attractors(&edges, radius)
}
