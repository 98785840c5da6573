//! Grouped counts and small numeric helpers shared by the analyses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One value and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count<K> {
    pub value: K,
    pub count: usize,
}

/// Counts `values` and returns them most common first. Ties keep the
/// natural order of the value.
pub fn most_common<K, I>(values: I) -> Vec<Count<K>>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut out: Vec<Count<K>> = counts
        .into_iter()
        .map(|(value, count)| Count { value, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean_u64<I>(values: I) -> f64
where
    I: IntoIterator<Item = u64>,
{
    mean(values.into_iter().map(|v| v as f64)).unwrap_or(0.0)
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn pct(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round_to(part as f64 / whole as f64 * 100.0, 1)
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_common_orders_by_count_then_value() {
        let counts = most_common(["b", "a", "b", "c", "a", "b"]);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.value, c.count)).collect();
        assert_eq!(pairs, [("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(mean([1.0, 2.0, 6.0]), Some(3.0));
    }

    #[test]
    fn pct_handles_zero_whole() {
        assert!((pct(1, 3) - 33.3).abs() < f64::EPSILON);
        assert!(pct(1, 0).abs() < f64::EPSILON);
    }
}
