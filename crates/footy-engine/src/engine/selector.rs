//! Question selection by information-gain ranking.

use std::collections::HashSet;

use crate::{core::Dataset, engine::entropy::information_gain};

/// Picks the most discriminating attribute for the current candidate set.
///
/// Considers every feature attribute of the dataset, in declaration order,
/// that still has more than one distinct value among the candidates, and
/// returns the one with strictly maximal information gain. The running
/// maximum starts at zero and is only beaten by a strict improvement, so
/// ties go to the earliest attribute and zero-gain attributes never win.
///
/// Returns `None` when no attribute discriminates (all are constant within
/// the candidate set, or the set is empty): the plateau signal.
///
/// Cost is O(|attributes| x |candidates|); callers re-run this every round
/// on the shrunken candidate set.
#[must_use]
pub fn select_question<'a>(dataset: &'a Dataset, candidates: &[usize]) -> Option<&'a str> {
    select_question_column(dataset, candidates).map(|(attribute, _)| attribute)
}

/// Like [`select_question`], but also yields the winning column index.
pub(crate) fn select_question_column<'a>(
    dataset: &'a Dataset,
    candidates: &[usize],
) -> Option<(&'a str, usize)> {
    let mut best_attribute = None;
    let mut max_gain = 0.0;

    for (attribute, column) in dataset.feature_columns() {
        let distinct: HashSet<&str> = candidates
            .iter()
            .map(|&row| dataset.value_at(row, column))
            .collect();
        if distinct.len() <= 1 {
            continue;
        }

        let gain = information_gain(dataset, candidates, attribute);
        if gain > max_gain {
            max_gain = gain;
            best_attribute = Some((attribute, column));
        }
    }

    best_attribute
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[[&str; 4]]) -> Dataset {
        let columns = ["name", "nationality", "club", "preferred_foot"]
            .map(str::to_owned)
            .to_vec();
        let rows = rows
            .iter()
            .map(|row| row.map(str::to_owned).to_vec())
            .collect();
        Dataset::new(columns, rows, &["nationality", "club", "preferred_foot"], "name").unwrap()
    }

    #[test]
    fn test_only_discriminating_attribute_is_selected() {
        // Two rows differing only in club: club is the only candidate
        // question and must carry positive gain.
        let dataset = dataset(&[
            ["a", "brazil", "real madrid", "right"],
            ["b", "brazil", "liverpool", "right"],
        ]);
        let candidates = dataset.all_rows();
        assert_eq!(select_question(&dataset, &candidates), Some("club"));
        assert!(information_gain(&dataset, &candidates, "club") > 0.0);
        assert_eq!(information_gain(&dataset, &candidates, "nationality"), 0.0);
    }

    #[test]
    fn test_single_valued_attributes_are_never_returned() {
        let dataset = dataset(&[
            ["a", "brazil", "real madrid", "right"],
            ["b", "france", "real madrid", "left"],
            ["c", "spain", "real madrid", "right"],
        ]);
        // club is constant; only nationality or preferred_foot may win.
        let selected = select_question(&dataset, &dataset.all_rows()).unwrap();
        assert_ne!(selected, "club");
    }

    #[test]
    fn test_plateau_when_nothing_discriminates() {
        let dataset = dataset(&[
            ["a", "brazil", "real madrid", "right"],
            ["b", "brazil", "real madrid", "right"],
        ]);
        assert_eq!(select_question(&dataset, &dataset.all_rows()), None);
        assert_eq!(select_question(&dataset, &[]), None);
        assert_eq!(select_question(&dataset, &[0]), None);
    }

    #[test]
    fn test_ties_break_by_attribute_order() {
        // nationality and club split the pair equally well; nationality is
        // declared first and must win the tie.
        let dataset = dataset(&[
            ["a", "brazil", "real madrid", "right"],
            ["b", "france", "liverpool", "right"],
        ]);
        assert_eq!(
            select_question(&dataset, &dataset.all_rows()),
            Some("nationality")
        );
    }

    #[test]
    fn test_highest_gain_attribute_wins() {
        // nationality is a 4-way perfect split (gain 2 bits), club only a
        // 2-way split (gain 1 bit).
        let dataset = dataset(&[
            ["a", "brazil", "real madrid", "right"],
            ["b", "france", "real madrid", "right"],
            ["c", "spain", "liverpool", "right"],
            ["d", "england", "liverpool", "right"],
        ]);
        assert_eq!(
            select_question(&dataset, &dataset.all_rows()),
            Some("nationality")
        );
    }
}
