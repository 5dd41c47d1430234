//! Per-column ensemble: one independent single-feature model per column,
//! combined by a plain average.
//!
//! Columns tagged binary get a logistic sub-model, the rest a linear one. Every
//! sub-model is fitted against the full label vector and sees only its own
//! column. The average is unweighted regardless of how well each sub-model fits.

use std::fmt;

use crate::error::{Error, Result};
use crate::linear_model::{GradientDescent, Link, TrainedModel};
use crate::preprocessing::Normalization;
use crate::{Matrix, Vector};
use ndarray::{ArrayView1, Axis, array};

/// A fitted model over a single scalar feature.
pub trait ColumnModel: fmt::Debug {
    fn predict(&self, value: f64) -> Result<f64>;
}

/// Single-feature [`TrainedModel`] used as an ensemble member.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarModel {
    pub model: TrainedModel,
}

impl ColumnModel for ScalarModel {
    fn predict(&self, value: f64) -> Result<f64> {
        self.model.predict(array![value].view())
    }
}

#[derive(Clone, Debug)]
pub struct PerColumnEnsemble {
    binary: Vec<bool>,
    trainer: GradientDescent,
    normalization: Normalization,
}

impl PerColumnEnsemble {
    /// `binary[j]` selects a logistic sub-model for column `j`.
    pub fn new(binary: Vec<bool>) -> Self {
        Self {
            binary,
            trainer: GradientDescent::with_params(0.01, 500),
            normalization: Normalization::None,
        }
    }

    pub fn trainer(mut self, trainer: GradientDescent) -> Self {
        self.trainer = trainer;
        self
    }

    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.binary
            .iter()
            .map(|&binary| if binary { Link::Sigmoid } else { Link::Identity })
    }

    pub fn fit(&self, x: &Matrix, y: &Vector) -> Result<FittedEnsemble> {
        if self.binary.is_empty() {
            return Err(Error::InvalidParameter(
                "ensemble needs at least one column".to_string(),
            ));
        }
        if x.ncols() != self.binary.len() {
            return Err(Error::mismatch("column tags", self.binary.len(), x.ncols()));
        }

        let mut members: Vec<Box<dyn ColumnModel>> = Vec::with_capacity(x.ncols());
        for (j, (column, link)) in x.axis_iter(Axis(1)).zip(self.links()).enumerate() {
            let column = column.to_owned().insert_axis(Axis(1));
            let model = TrainedModel::fit(&self.trainer, self.normalization, link, &column, y, |report| {
                log::debug!(
                    "column {j} epoch {} {}={:.4}",
                    report.epoch,
                    link.metric_name(),
                    report.metric
                );
            })?;
            log::info!(
                "column {j}: {:?} sub-model bias={:.4} weight={:.4}",
                link,
                model.params.bias,
                model.params.weights[0]
            );
            members.push(Box::new(ScalarModel { model }));
        }

        Ok(FittedEnsemble { members })
    }
}

#[derive(Debug)]
pub struct FittedEnsemble {
    members: Vec<Box<dyn ColumnModel>>,
}

impl FittedEnsemble {
    pub fn from_models(members: Vec<Box<dyn ColumnModel>>) -> Result<Self> {
        if members.is_empty() {
            return Err(Error::InvalidParameter(
                "ensemble needs at least one column model".to_string(),
            ));
        }
        Ok(Self { members })
    }

    pub fn n_columns(&self) -> usize {
        self.members.len()
    }

    /// Each member's prediction on its own column of `row`.
    pub fn member_predictions(&self, row: ArrayView1<f64>) -> Result<Vector> {
        if row.len() != self.members.len() {
            return Err(Error::mismatch("ensemble row", self.members.len(), row.len()));
        }
        self.members
            .iter()
            .zip(row.iter())
            .map(|(member, &value)| member.predict(value))
            .collect::<Result<Vec<_>>>()
            .map(Vector::from)
    }

    /// Arithmetic mean of the member predictions.
    pub fn predict(&self, row: ArrayView1<f64>) -> Result<f64> {
        let predictions = self.member_predictions(row)?;
        Ok(predictions.sum() / predictions.len() as f64)
    }
}
