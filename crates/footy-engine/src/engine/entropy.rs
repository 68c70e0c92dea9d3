//! Shannon entropy and information gain over candidate sets.
//!
//! These are the measures driving question selection: each round the
//! selector asks "which attribute, if we split the remaining candidates by
//! its values, reduces label entropy the most?". The reduction is the
//! information gain of that attribute.

use std::{collections::HashMap, hash::Hash};

use crate::core::Dataset;

/// Shannon entropy of a label distribution, in bits.
///
/// Computes `-Σ p_i·log2(p_i)` over the distinct-label frequencies of the
/// input. Labels with zero probability never occur in the frequency map, so
/// `log2(0)` is never evaluated.
///
/// Labels may be anything hashable; the game measures player-name strings,
/// the decision tree integer label codes.
///
/// # Returns
///
/// * `0.0` for an empty or single-valued input
/// * the maximum, `log2(n)`, when `n` distinct labels are uniformly
///   distributed
///
/// # Examples
///
/// ```
/// use footy_engine::entropy;
///
/// assert_eq!(entropy(["a", "a", "a"]), 0.0);
/// assert_eq!(entropy(["a", "b"]), 1.0);
/// ```
#[must_use]
pub fn entropy<I>(labels: I) -> f64
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut counts: HashMap<I::Item, usize> = HashMap::new();
    let mut total = 0_usize;
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    #[expect(clippy::cast_precision_loss)]
    let total = total as f64;
    counts
        .values()
        .map(|&count| {
            #[expect(clippy::cast_precision_loss)]
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Information gain of splitting `candidates` by `attribute`.
///
/// The gain is the label entropy of the whole candidate set minus the
/// size-weighted average label entropy of the partitions induced by the
/// attribute's distinct values, each partition weighted by
/// `|partition| / |candidates|`.
///
/// # Returns
///
/// * `0.0` for an empty candidate set or an attribute not present in the
///   dataset
/// * `0.0` when the attribute has a single distinct value among the
///   candidates (the degenerate partition)
/// * a non-negative value otherwise: partitioning never increases the
///   expected label entropy
///
/// # Examples
///
/// ```
/// use footy_engine::{Dataset, information_gain};
///
/// let columns = ["name", "club"].map(str::to_owned).to_vec();
/// let rows = vec![
///     ["messi", "inter miami"].map(str::to_owned).to_vec(),
///     ["ronaldo", "al nassr"].map(str::to_owned).to_vec(),
/// ];
/// let dataset = Dataset::new(columns, rows, &["club"], "name").unwrap();
/// assert_eq!(information_gain(&dataset, &[0, 1], "club"), 1.0);
/// ```
#[must_use]
pub fn information_gain(dataset: &Dataset, candidates: &[usize], attribute: &str) -> f64 {
    let Some(column) = dataset.column_index(attribute) else {
        return 0.0;
    };
    if candidates.is_empty() {
        return 0.0;
    }

    let before_split = entropy(candidates.iter().map(|&row| dataset.label_of(row)));

    let mut partitions: HashMap<&str, Vec<usize>> = HashMap::new();
    for &row in candidates {
        partitions
            .entry(dataset.value_at(row, column))
            .or_default()
            .push(row);
    }

    #[expect(clippy::cast_precision_loss)]
    let total = candidates.len() as f64;
    let after_split: f64 = partitions
        .values()
        .map(|subset| {
            #[expect(clippy::cast_precision_loss)]
            let weight = subset.len() as f64 / total;
            weight * entropy(subset.iter().map(|&row| dataset.label_of(row)))
        })
        .sum();

    before_split - after_split
}
