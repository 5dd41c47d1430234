use super::gradient_descent::{EpochReport, GradientDescent, Init, Link};
use super::model::TrainedModel;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::preprocessing::Normalization;
use crate::{Matrix, Vector};

/// Least-squares regression fitted by batch gradient descent on normalized
/// features.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    trainer: GradientDescent,
    normalization: Normalization,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            trainer: GradientDescent::with_params(0.03, 1000),
            normalization: Normalization::ZScore,
        }
    }

    pub fn with_params(learning_rate: f64, epochs: usize) -> Self {
        Self::new().learning_rate(learning_rate).epochs(epochs)
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.trainer = self.trainer.learning_rate(learning_rate);
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.trainer = self.trainer.epochs(epochs);
        self
    }

    pub fn init(mut self, init: Init) -> Self {
        self.trainer = self.trainer.init(init);
        self
    }

    pub fn report_every(mut self, report_every: usize) -> Self {
        self.trainer = self.trainer.report_every(report_every);
        self
    }

    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn fit(&self, x: &Matrix, y: &Vector) -> Result<TrainedModel> {
        TrainedModel::fit(&self.trainer, self.normalization, Link::Identity, x, y, |report| {
            log::info!("epoch {} mse={:.4}", report.epoch, report.metric);
        })
    }

    pub fn fit_with<F>(&self, x: &Matrix, y: &Vector, on_report: F) -> Result<TrainedModel>
    where
        F: FnMut(EpochReport),
    {
        TrainedModel::fit(&self.trainer, self.normalization, Link::Identity, x, y, on_report)
    }

    pub fn fit_dataset(&self, dataset: &Dataset) -> Result<TrainedModel> {
        self.fit(&dataset.features, &dataset.labels)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
