//! The game-facing train-once / predict-anywhere facade.

use footy_engine::Dataset;

use crate::{
    EmptyTrainingSetError,
    encode::{CategoryEncoder, EncodedDataset},
    tree::DecisionTree,
};

/// A trained fallback guesser.
///
/// Trained once, before the game loop, on the entire dataset; from then on
/// it is an immutable function from a candidate subset to a player name and
/// can be shared by reference across sessions.
#[derive(Debug, Clone)]
pub struct PlayerPredictor {
    tree: DecisionTree,
    labels: CategoryEncoder,
}

impl PlayerPredictor {
    /// Encodes the full dataset and fits the decision tree on it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTrainingSetError`] for a dataset with no rows.
    pub fn train(dataset: &Dataset) -> Result<Self, EmptyTrainingSetError> {
        let encoded = EncodedDataset::fit(dataset, &dataset.all_rows());
        let tree = DecisionTree::fit(encoded.features(), encoded.labels())?;
        Ok(Self {
            tree,
            labels: encoded.into_label_encoder(),
        })
    }

    /// Best-effort guess for the first row of the remaining candidates.
    ///
    /// Returns `None` when no candidate remains. The candidate rows are
    /// re-encoded with fresh per-column encoders before classification, so
    /// when the subset's distinct values differ from the full dataset's, the
    /// codes can disagree with the ones the tree was trained on (see the
    /// crate-level known limitation). The predicted label code is decoded
    /// through the training-time label encoder.
    #[must_use]
    pub fn predict(&self, dataset: &Dataset, candidates: &[usize]) -> Option<String> {
        if candidates.is_empty() {
            return None;
        }
        let encoded = EncodedDataset::fit(dataset, candidates);
        let vector = encoded.features().first()?;
        let code = self.tree.predict(vector);
        self.labels.decode(code).map(str::to_owned)
    }
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
    fn test_train_on_empty_dataset_fails() {
        assert!(PlayerPredictor::train(&dataset(&[])).is_err());
    }

    #[test]
    fn test_predict_on_no_candidates_is_none() {
        let dataset = dataset(&[["a", "brazil", "real madrid", "right"]]);
        let predictor = PlayerPredictor::train(&dataset).unwrap();
        assert_eq!(predictor.predict(&dataset, &[]), None);
    }

    #[test]
    fn test_full_dataset_prediction_recovers_the_first_row() {
        // Over the full candidate set the fresh encoders agree with the
        // training-time ones, so the separable tree reproduces row labels.
        let dataset = dataset(&[
            ["kroos", "germany", "real madrid", "right"],
            ["salah", "egypt", "liverpool", "left"],
            ["vinicius", "brazil", "real madrid", "right"],
        ]);
        let predictor = PlayerPredictor::train(&dataset).unwrap();
        assert_eq!(
            predictor.predict(&dataset, &dataset.all_rows()),
            Some("kroos".to_owned())
        );
        assert_eq!(
            predictor.predict(&dataset, &[1, 0, 2]),
            Some("salah".to_owned())
        );
    }

    #[test]
    fn test_prediction_always_names_a_known_player() {
        // Even when subset re-encoding skews the codes, the decoded guess is
        // some player from the training label set.
        let dataset = dataset(&[
            ["kroos", "germany", "real madrid", "right"],
            ["musiala", "germany", "bayern", "right"],
            ["salah", "egypt", "liverpool", "left"],
            ["vinicius", "brazil", "real madrid", "right"],
        ]);
        let predictor = PlayerPredictor::train(&dataset).unwrap();
        let names = ["kroos", "musiala", "salah", "vinicius"];
        for candidates in [vec![3], vec![2, 3], vec![1, 2]] {
            let guess = predictor.predict(&dataset, &candidates).unwrap();
            assert!(names.contains(&guess.as_str()), "unknown guess {guess}");
        }
    }
}
