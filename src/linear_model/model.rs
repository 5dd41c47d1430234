use super::gradient_descent::{EpochReport, GradientDescent, Link, Parameters};
use crate::error::{Error, Result};
use crate::preprocessing::{FittedNormalizer, Normalization};
use crate::{Matrix, Vector};
use ndarray::{ArrayView1, Axis};

/// Parameters together with the normalization they were trained under.
///
/// Raw rows passed to [`TrainedModel::predict`] are normalized with the stored
/// statistics, never refitted.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainedModel {
    pub params: Parameters,
    pub normalizer: FittedNormalizer,
    pub link: Link,
}

impl TrainedModel {
    pub(crate) fn fit<F>(
        trainer: &GradientDescent,
        normalization: Normalization,
        link: Link,
        x: &Matrix,
        y: &Vector,
        on_report: F,
    ) -> Result<Self>
    where
        F: FnMut(EpochReport),
    {
        if x.nrows() != y.len() {
            return Err(Error::mismatch("labels", x.nrows(), y.len()));
        }

        let normalizer = normalization.fit(x)?;
        let x_normalized = normalizer.transform(x)?;
        let params = trainer.train_with(&x_normalized, y, link, on_report)?;

        Ok(Self {
            params,
            normalizer,
            link,
        })
    }

    pub fn n_features(&self) -> usize {
        self.params.n_features()
    }

    pub fn predict(&self, row: ArrayView1<f64>) -> Result<f64> {
        let row = self.normalizer.apply(row)?;
        self.params.predict(row.view(), self.link)
    }

    pub fn predict_normalized(&self, row: ArrayView1<f64>) -> Result<f64> {
        self.params.predict(row, self.link)
    }

    pub fn predict_batch(&self, x: &Matrix) -> Result<Vector> {
        let x_normalized = self.normalizer.transform(x)?;
        self.params.predict_batch(&x_normalized, self.link)
    }

    /// `1` when the predicted probability is at least 0.5.
    pub fn predict_class(&self, row: ArrayView1<f64>) -> Result<u8> {
        Ok(u8::from(self.predict(row)? >= 0.5))
    }

    /// R² for regression models, accuracy for classifiers.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict_batch(x)?;
        match self.link {
            Link::Identity => crate::metrics::r2_score(y, &y_pred),
            Link::Sigmoid => {
                let classes = y_pred.mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 });
                crate::metrics::accuracy_score(y, &classes)
            }
        }
    }

    /// Predictions for every row, paired with the row's index.
    pub fn predict_rows<'a>(&'a self, x: &'a Matrix) -> impl Iterator<Item = (usize, Result<f64>)> + 'a {
        x.axis_iter(Axis(0))
            .enumerate()
            .map(move |(i, row)| (i, self.predict(row)))
    }
}
