//! Top-k nearest neighbor selection.

/// Keeps the `k_eff` nearest entries of `pairs`, sorted ascending.
///
/// Entries are `(distance, dataset_index)`. Equal distances are ordered by
/// dataset index, so the neighbors chosen at the k boundary are the ones that
/// appear first in the dataset.
///
/// # Panics
///
/// Debug-asserts that `k_eff >= 1` and `k_eff <= pairs.len()`.
pub(crate) fn select_k_nearest(pairs: &mut Vec<(f64, usize)>, k_eff: usize) {
    debug_assert!(k_eff >= 1);
    debug_assert!(k_eff <= pairs.len());

    pairs.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    pairs.truncate(k_eff);
}
