//! Batch gradient descent for linear and logistic models over dense feature
//! matrices, with z-score / min-max feature normalization and a per-column
//! ensemble that averages independent single-feature sub-models.
//!
//! ```rust
//! use gdtrain::{LinearRegression, Normalization};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0, 10.0];
//!
//! let model = LinearRegression::new()
//!     .normalization(Normalization::None)
//!     .fit(&x, &y)
//!     .unwrap();
//! let prediction = model.predict(array![7.0].view()).unwrap();
//! assert!((prediction - 14.0).abs() < 0.1);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod ensemble;
pub mod error;
pub mod io;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub use dataset::Dataset;
pub use ensemble::{ColumnModel, FittedEnsemble, PerColumnEnsemble, ScalarModel};
pub use error::{Error, Result};
pub use io::CsvOptions;
pub use linear_model::{
    EpochReport, GradientDescent, Init, LinearRegression, Link, LogisticRegression, Parameters,
    TrainedModel,
};
pub use preprocessing::{FittedNormalizer, MinMaxStats, Normalization, ZScoreStats};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
