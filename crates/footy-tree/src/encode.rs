//! Categorical-to-integer encoding of dataset columns.

use footy_engine::Dataset;

/// A reversible string-to-integer mapping for one categorical column.
///
/// Codes are assigned by sorted distinct value, so a fit over the same set
/// of values always produces the same codes. Fits over different subsets of
/// a column generally do not agree.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    classes: Vec<String>,
}

impl CategoryEncoder {
    /// Fits an encoder over the distinct values of the input.
    pub fn fit<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = values.into_iter().map(str::to_owned).collect();
        classes.sort_unstable();
        classes.dedup();
        Self { classes }
    }

    /// The code of `value`, if it was seen during the fit.
    #[must_use]
    pub fn encode(&self, value: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .ok()
    }

    /// The value behind `code`, if the code is in range.
    #[must_use]
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// An integer-coded projection of (a subset of) a [`Dataset`].
///
/// A pure function of the rows it was fit on: every feature column and the
/// label column get an independent [`CategoryEncoder`], and each input row
/// becomes one code vector. Row order follows the candidate order passed to
/// [`fit`](Self::fit), so row 0 corresponds to the first candidate.
#[derive(Debug, Clone)]
pub struct EncodedDataset {
    features: Vec<Vec<usize>>,
    labels: Vec<usize>,
    label_encoder: CategoryEncoder,
}

impl EncodedDataset {
    /// Encodes the given candidate rows of `dataset`.
    #[must_use]
    pub fn fit(dataset: &Dataset, candidates: &[usize]) -> Self {
        let feature_encoders: Vec<(usize, CategoryEncoder)> = dataset
            .feature_columns()
            .map(|(_, column)| {
                let encoder = CategoryEncoder::fit(
                    candidates.iter().map(|&row| dataset.value_at(row, column)),
                );
                (column, encoder)
            })
            .collect();
        let label_encoder =
            CategoryEncoder::fit(candidates.iter().map(|&row| dataset.label_of(row)));

        // Every value below was part of the fit above, so encoding cannot miss.
        let features = candidates
            .iter()
            .map(|&row| {
                feature_encoders
                    .iter()
                    .map(|(column, encoder)| {
                        encoder
                            .encode(dataset.value_at(row, *column))
                            .expect("encoder was fit over these rows")
                    })
                    .collect()
            })
            .collect();
        let labels = candidates
            .iter()
            .map(|&row| {
                label_encoder
                    .encode(dataset.label_of(row))
                    .expect("encoder was fit over these rows")
            })
            .collect();

        Self {
            features,
            labels,
            label_encoder,
        }
    }

    /// Code vectors, one per input row, in candidate order.
    #[must_use]
    pub fn features(&self) -> &[Vec<usize>] {
        &self.features
    }

    /// Label codes, one per input row, in candidate order.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    #[must_use]
    pub fn label_encoder(&self) -> &CategoryEncoder {
        &self.label_encoder
    }

    #[must_use]
    pub fn into_label_encoder(self) -> CategoryEncoder {
        self.label_encoder
    }
}
