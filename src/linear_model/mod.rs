//! Linear models trained by batch gradient descent.
//!
//! [`GradientDescent`] holds the single training loop; the link function
//! decides whether it fits a regression (`Identity`, mean squared error) or a
//! binary classifier (`Sigmoid`, cross-entropy).
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use gdtrain::LinearRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let model = LinearRegression::new().fit(&x, &y).unwrap();
//! let predictions = model.predict_batch(&x).unwrap();
//! assert_eq!(predictions.len(), 3);
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use gdtrain::LogisticRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let model = LogisticRegression::new().fit(&x, &y).unwrap();
//! let probability = model.predict(array![3.5].view()).unwrap();
//! let class = model.predict_class(array![3.5].view()).unwrap();
//! assert!(probability > 0.5 && class == 1);
//! ```

mod gradient_descent;
mod linear_regression;
mod logistic_regression;
mod model;

pub use gradient_descent::{EpochReport, GradientDescent, Init, Link, Parameters};
pub use linear_regression::LinearRegression;
pub use logistic_regression::LogisticRegression;
pub use model::TrainedModel;
