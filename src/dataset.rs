use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::s;

/// Feature matrix plus one label per row. Always holds at least one sample.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() == 0 {
            return Err(Error::EmptyDataset("dataset must have at least one sample"));
        }
        if features.nrows() != labels.len() {
            return Err(Error::mismatch("labels", features.nrows(), labels.len()));
        }

        Ok(Self { features, labels })
    }

    /// Builds a dataset from row-major feature vectors. Every row must be as
    /// wide as the first one.
    pub fn from_rows(rows: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Self> {
        let n_features = rows
            .first()
            .map(Vec::len)
            .ok_or(Error::EmptyDataset("dataset must have at least one sample"))?;

        let mut flat = Vec::with_capacity(rows.len() * n_features);
        for row in &rows {
            if row.len() != n_features {
                return Err(Error::mismatch("feature row", n_features, row.len()));
            }
            flat.extend_from_slice(row);
        }

        let features = Matrix::from_shape_vec((rows.len(), n_features), flat)
            .map_err(|e| Error::InvalidParameter(e.to_string()))?;
        Self::new(features, Vector::from(labels))
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Single-feature matrix holding only column `j`.
    pub fn column(&self, j: usize) -> Result<Matrix> {
        if j >= self.n_features() {
            return Err(Error::mismatch("column index", self.n_features(), j));
        }
        Ok(self.features.slice(s![.., j..j + 1]).to_owned())
    }

    /// Ordered split: the leading rows train, the trailing `test_size` share tests.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self)> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err(Error::InvalidParameter(format!(
                "test_size must be between 0 and 1, got {test_size}"
            )));
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;

        let train_features = self.features.slice(s![..n_train, ..]).to_owned();
        let train_labels = self.labels.slice(s![..n_train]).to_owned();

        let test_features = self.features.slice(s![n_train.., ..]).to_owned();
        let test_labels = self.labels.slice(s![n_train..]).to_owned();

        let train_dataset = Dataset::new(train_features, train_labels)?;
        let test_dataset = Dataset::new(test_features, test_labels)?;

        Ok((train_dataset, test_dataset))
    }
}
