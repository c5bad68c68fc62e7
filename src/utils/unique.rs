// ============================================================================
// Keyed De-duplication
// ============================================================================

use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first item for each key, preserving input order.
///
/// ```
/// use decimal_display::utils::unique_by;
///
/// let rows = vec![(1, "a"), (2, "b"), (1, "c")];
/// assert_eq!(unique_by(rows, |r| r.0), vec![(1, "a"), (2, "b")]);
/// ```
pub fn unique_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
