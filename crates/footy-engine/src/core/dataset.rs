use crate::DatasetError;

/// An immutable table of players.
///
/// Rows are addressed by index, columns by name. A fixed subset of columns
/// are the feature attributes the game may ask about; one column is the
/// label (the player's name, assumed distinct per row though not enforced).
///
/// The dataset never changes after construction. Candidate sets are plain
/// `Vec<usize>` row-index vectors that borrow nothing and are re-assigned,
/// never mutated in place, as the game narrows.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    feature_columns: Vec<usize>,
    label_column: usize,
}

impl Dataset {
    /// Builds a dataset from a header, rows, and the column roles.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if a feature or label column is not present
    /// in the header, a column name repeats, or a row's arity does not match
    /// the header.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
        feature_attributes: &[&str],
        label_attribute: &str,
    ) -> Result<Self, DatasetError> {
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(DatasetError::DuplicateColumn { name: name.clone() });
            }
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != columns.len() {
                return Err(DatasetError::RowArity {
                    row,
                    actual: values.len(),
                    expected: columns.len(),
                });
            }
        }

        let column_index = |name: &str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| DatasetError::UnknownColumn {
                    name: name.to_owned(),
                })
        };
        let feature_columns = feature_attributes
            .iter()
            .map(|name| column_index(name))
            .collect::<Result<Vec<_>, _>>()?;
        let label_column = column_index(label_attribute)?;

        Ok(Self {
            columns,
            rows,
            feature_columns,
            label_column,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row indices of the full dataset, the initial candidate set.
    #[must_use]
    pub fn all_rows(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }

    /// The feature attribute names, in selection-priority order.
    pub fn feature_attributes(&self) -> impl Iterator<Item = &str> {
        self.feature_columns
            .iter()
            .map(|&col| self.columns[col].as_str())
    }

    /// The feature attributes with their column indices, in the same order
    /// as [`feature_attributes`](Self::feature_attributes).
    pub fn feature_columns(&self) -> impl Iterator<Item = (&str, usize)> {
        self.feature_columns
            .iter()
            .map(|&col| (self.columns[col].as_str(), col))
    }

    #[must_use]
    pub fn label_attribute(&self) -> &str {
        &self.columns[self.label_column]
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The value of `column` (by index) in row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of bounds. Both always come from
    /// this dataset (candidate indices, `column_index`), so in-bounds access
    /// is the caller's invariant.
    #[must_use]
    pub fn value_at(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }

    /// The value of the named column in row `row`, if the column exists.
    #[must_use]
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        Some(self.value_at(row, self.column_index(column)?))
    }

    /// The label of row `row`.
    #[must_use]
    pub fn label_of(&self, row: usize) -> &str {
        self.value_at(row, self.label_column)
    }
}
