//! Nearest-neighbor selection for one distance row.

use std::cmp::Ordering;

/// Returns the indices of the `k` smallest distances, ascending.
///
/// Ties in distance break toward the lower original index, making the result
/// fully deterministic. Full sort on (distance, index) pairs — cache-friendly
/// for typical training-set sizes; a partial select can replace it if
/// profiling ever warrants.
///
/// Callers validate `1 <= k <= dist_row.len()` before entry.
///
/// # Panics
///
/// Debug-asserts the `k` bounds above.
pub(crate) fn select_nearest(dist_row: &[f64], k: usize) -> Vec<usize> {
    debug_assert!(k >= 1);
    debug_assert!(k <= dist_row.len());

    let mut pairs: Vec<(f64, usize)> = dist_row
        .iter()
        .copied()
        .enumerate()
        .map(|(i, d)| (d, i))
        .collect();

    // NaN-safe comparator; the index component makes tie order explicit, so
    // an unstable sort still yields a deterministic result.
    pairs.sort_unstable_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });
    pairs.truncate(k);

    pairs.into_iter().map(|(_, i)| i).collect()
}
