use std::fs;

use approx::assert_abs_diff_eq;
use gdtrain::io::{self, CsvOptions};
use gdtrain::{
    ColumnModel, Dataset, Error, FittedEnsemble, GradientDescent, Link, LinearRegression,
    LogisticRegression, Normalization, PerColumnEnsemble, Result,
};
use ndarray::array;

#[derive(Debug)]
struct Constant(f64);

impl ColumnModel for Constant {
    fn predict(&self, _value: f64) -> Result<f64> {
        Ok(self.0)
    }
}

#[test]
fn linear_regression_from_csv_file() {
    let path = std::env::temp_dir().join(format!("gdtrain-linear-{}.csv", std::process::id()));
    fs::write(&path, "x,y\n1,2\n2,4\n3,6\n4,8\n5,10\n").unwrap();

    let dataset = io::load_csv(&path, &CsvOptions::default()).unwrap();
    fs::remove_file(&path).unwrap();

    let model = LinearRegression::new()
        .normalization(Normalization::None)
        .fit_dataset(&dataset)
        .unwrap();

    assert_abs_diff_eq!(model.params.bias, 0.0, epsilon = 1e-2);
    assert_abs_diff_eq!(model.params.weights[0], 2.0, epsilon = 1e-2);
}

#[test]
fn missing_file_is_io_error() {
    let result = io::load_csv("/nonexistent/gdtrain/data.csv", &CsvOptions::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn logistic_regression_thresholds() {
    let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
    let y = array![0.0, 0.0, 0.0, 1.0, 1.0];

    let model = LogisticRegression::new().fit(&x, &y).unwrap();

    assert_eq!(model.predict_class(array![2.5].view()).unwrap(), 0);
    assert_eq!(model.predict_class(array![4.5].view()).unwrap(), 1);
    assert!(model.predict(array![2.5].view()).unwrap() < model.predict(array![4.5].view()).unwrap());
}

#[test]
fn ragged_rows_fail_before_training() {
    let result = Dataset::from_rows(
        vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]],
        vec![1.0, 2.0, 3.0],
    );
    assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
}

#[test]
fn ensemble_averages_members() {
    let ensemble = FittedEnsemble::from_models(vec![
        Box::new(Constant(0.2)),
        Box::new(Constant(0.4)),
        Box::new(Constant(0.6)),
    ])
    .unwrap();
    assert_abs_diff_eq!(ensemble.predict(array![0.0, 0.0, 0.0].view()).unwrap(), 0.4, epsilon = 1e-12);
}

#[test]
fn ensemble_with_random_init_is_reproducible() {
    let x = array![[1.0, 0.5], [0.0, 1.5], [1.0, 2.5], [0.0, 3.0]];
    let y = array![1.0, 0.0, 1.0, 0.0];
    let trainer = GradientDescent::with_params(0.05, 200).init(gdtrain::Init::Uniform { seed: 42 });

    let first = PerColumnEnsemble::new(vec![true, false])
        .trainer(trainer.clone())
        .fit(&x, &y)
        .unwrap();
    let second = PerColumnEnsemble::new(vec![true, false])
        .trainer(trainer)
        .fit(&x, &y)
        .unwrap();

    let row = array![1.0, 1.0];
    assert_eq!(first.predict(row.view()).unwrap(), second.predict(row.view()).unwrap());
}

#[test]
fn divergence_is_not_guarded() {
    let x = array![[1000.0], [2000.0], [3000.0]];
    let y = array![1.0, 2.0, 3.0];

    let params = GradientDescent::with_params(1.0, 200)
        .train_with(&x, &y, Link::Identity, |_| {})
        .unwrap();
    assert!(!params.weights[0].is_finite());
}
