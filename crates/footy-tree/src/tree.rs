//! A deterministic ID3 decision tree over integer-coded features.

use std::collections::BTreeMap;

use footy_engine::entropy;
use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;

use crate::EmptyTrainingSetError;

/// Fixed tie-breaking seed; training the same data always yields the same tree.
const TREE_SEED: u64 = 42;

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        label: usize,
    },
    Split {
        feature: usize,
        /// Fallback label for feature values never seen at this node.
        majority: usize,
        branches: BTreeMap<usize, Node>,
    },
}

/// A decision tree fit on encoded feature/label pairs.
///
/// Standard ID3: each node splits on the feature with the highest
/// information gain over the rows that reach it, recursing until the rows
/// are label-pure or no feature gains anything, where a majority-label leaf
/// is placed. Equal-gain ties are broken by a seeded RNG, so fitting is
/// deterministic across runs.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Fits a tree on row-major feature vectors and their labels.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTrainingSetError`] when there are no rows.
    pub fn fit(features: &[Vec<usize>], labels: &[usize]) -> Result<Self, EmptyTrainingSetError> {
        assert_eq!(
            features.len(),
            labels.len(),
            "one label per feature vector"
        );
        if labels.is_empty() {
            return Err(EmptyTrainingSetError);
        }

        let mut rng = Pcg32::seed_from_u64(TREE_SEED);
        let rows: Vec<usize> = (0..labels.len()).collect();
        let root = build_node(features, labels, &rows, &mut rng);
        Ok(Self { root })
    }

    /// The predicted label code for one feature vector.
    ///
    /// A feature value with no branch at some node, or a vector shorter than
    /// the splitting feature's index, falls back to that node's majority
    /// label.
    #[must_use]
    pub fn predict(&self, vector: &[usize]) -> usize {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Split {
                    feature,
                    majority,
                    branches,
                } => {
                    let Some(child) = vector.get(*feature).and_then(|value| branches.get(value))
                    else {
                        return *majority;
                    };
                    node = child;
                }
            }
        }
    }
}

#[expect(clippy::float_cmp)]
fn build_node(
    features: &[Vec<usize>],
    labels: &[usize],
    rows: &[usize],
    rng: &mut Pcg32,
) -> Node {
    let mut label_counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &row in rows {
        *label_counts.entry(labels[row]).or_insert(0) += 1;
    }
    // Ties go to the smallest label code; BTreeMap iteration makes that
    // deterministic without touching the RNG.
    let majority = label_counts
        .iter()
        .max_by_key(|(label, count)| (**count, std::cmp::Reverse(**label)))
        .map(|(&label, _)| label)
        .unwrap_or_default();
    if label_counts.len() <= 1 {
        return Node::Leaf { label: majority };
    }

    let feature_count = rows.first().map_or(0, |&row| features[row].len());
    let mut best_gain = 0.0_f64;
    let mut best_features: Vec<usize> = Vec::new();
    for feature in 0..feature_count {
        let gain = split_gain(features, labels, rows, feature);
        if gain > best_gain {
            best_gain = gain;
            best_features = vec![feature];
        } else if gain > 0.0 && gain == best_gain {
            best_features.push(feature);
        }
    }
    let Some(&feature) = best_features.choose(rng) else {
        // No feature discriminates the rows; a deeper split cannot help.
        return Node::Leaf { label: majority };
    };

    let mut partitions: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &row in rows {
        partitions.entry(features[row][feature]).or_default().push(row);
    }
    let branches = partitions
        .into_iter()
        .map(|(value, subset)| (value, build_node(features, labels, &subset, rng)))
        .collect();

    Node::Split {
        feature,
        majority,
        branches,
    }
}

/// Information gain of splitting `rows` on `feature`.
fn split_gain(features: &[Vec<usize>], labels: &[usize], rows: &[usize], feature: usize) -> f64 {
    let before = entropy(rows.iter().map(|&row| labels[row]));

    let mut partitions: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &row in rows {
        partitions.entry(features[row][feature]).or_default().push(row);
    }

    #[expect(clippy::cast_precision_loss)]
    let total = rows.len() as f64;
    let after: f64 = partitions
        .values()
        .map(|subset| {
            #[expect(clippy::cast_precision_loss)]
            let weight = subset.len() as f64 / total;
            weight * entropy(subset.iter().map(|&row| labels[row]))
        })
        .sum();

    before - after
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_on_empty_input_fails() {
        assert!(DecisionTree::fit(&[], &[]).is_err());
    }

    #[test]
    fn test_pure_input_yields_a_constant_tree() {
        let features = vec![vec![0, 1], vec![1, 0], vec![0, 0]];
        let labels = vec![7, 7, 7];
        let tree = DecisionTree::fit(&features, &labels).unwrap();
        assert_eq!(tree.predict(&[0, 0]), 7);
        assert_eq!(tree.predict(&[9, 9]), 7);
    }

    #[test]
    fn test_separable_training_rows_are_reproduced() {
        // Feature 1 perfectly separates the labels; feature 0 is noise.
        let features = vec![vec![0, 0], vec![0, 1], vec![1, 2], vec![1, 3]];
        let labels = vec![0, 1, 2, 3];
        let tree = DecisionTree::fit(&features, &labels).unwrap();
        for (vector, &label) in features.iter().zip(&labels) {
            assert_eq!(tree.predict(vector), label);
        }
    }

    #[test]
    fn test_unseen_value_falls_back_to_majority() {
        let features = vec![vec![0], vec![1], vec![2], vec![3]];
        let labels = vec![5, 5, 5, 9];
        let tree = DecisionTree::fit(&features, &labels).unwrap();
        assert_eq!(tree.predict(&[42]), 5);
        assert_eq!(tree.predict(&[]), 5);
    }

    #[test]
    fn test_fitting_is_deterministic() {
        // Both features carry identical gain; the seeded tie-break must make
        // repeated fits agree.
        let features = vec![vec![0, 0], vec![0, 0], vec![1, 1], vec![1, 1]];
        let labels = vec![0, 0, 1, 1];
        let a = DecisionTree::fit(&features, &labels).unwrap();
        let b = DecisionTree::fit(&features, &labels).unwrap();
        for vector in [[0, 0], [0, 1], [1, 0], [1, 1]] {
            assert_eq!(a.predict(&vector), b.predict(&vector));
        }
    }

    #[test]
    fn test_indistinguishable_rows_collapse_to_majority_leaf() {
        let features = vec![vec![0, 0], vec![0, 0], vec![0, 0]];
        let labels = vec![1, 2, 2];
        let tree = DecisionTree::fit(&features, &labels).unwrap();
        assert_eq!(tree.predict(&[0, 0]), 2);
    }
}
