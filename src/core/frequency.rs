//! Counting helpers shared by the reducers.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences and returns `(item, count)` pairs, most frequent first.
///
/// Ties keep the order in which items were first seen.
///
/// ```
/// use chatlens::core::frequency::rank;
///
/// let ranked = rank(["b", "a", "b", "c", "a"]);
/// assert_eq!(ranked, vec![("b", 2), ("a", 2), ("c", 1)]);
/// ```
pub fn rank<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// `count` as a share of `total`, in percent, rounded to two decimals.
/// Zero when `total` is zero.
///
/// ```
/// use chatlens::core::frequency::percent;
///
/// assert_eq!(percent(1, 3), 33.33);
/// assert_eq!(percent(2, 3), 66.67);
/// assert_eq!(percent(0, 0), 0.0);
/// ```
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
