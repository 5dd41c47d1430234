use crate::Vector;
use crate::error::{Error, Result};

/// Added inside each logarithm of the cross-entropy so that `p == 0` or `p == 1`
/// stays finite.
pub const LOG_EPSILON: f64 = 1e-10;

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::mismatch("predictions", y_true.len(), y_pred.len()));
    }
    if y_true.is_empty() {
        return Err(Error::EmptyDataset("metrics need at least one sample"));
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / y_true.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(f64::abs).sum() / y_true.len() as f64)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0);
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Mean of `-y ln(p + ε) - (1 - y) ln(1 - p + ε)`.
pub fn binary_cross_entropy(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let loss = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&y, &p)| -y * (p + LOG_EPSILON).ln() - (1.0 - y) * (1.0 - p + LOG_EPSILON).ln())
        .sum::<f64>();

    Ok(loss / y_true.len() as f64)
}

pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(actual, pred)| (*pred - *actual).abs() < 1e-10)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        assert_eq!(mean_squared_error(&y_true, &y_true).unwrap(), 0.0);

        let y_pred = array![2.0, 2.0, 5.0];
        assert_abs_diff_eq!(mean_squared_error(&y_true, &y_pred).unwrap(), 5.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mean_absolute_error(&y_true, &y_pred).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);
        assert_eq!(r2_score(&array![2.0, 2.0], &array![1.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_binary_cross_entropy() {
        let y_true = array![1.0, 0.0];
        let y_pred = array![0.5, 0.5];
        assert_abs_diff_eq!(
            binary_cross_entropy(&y_true, &y_pred).unwrap(),
            std::f64::consts::LN_2,
            epsilon = 1e-9
        );

        // confident and wrong stays finite
        let loss = binary_cross_entropy(&array![1.0], &array![0.0]).unwrap();
        assert!(loss.is_finite());
        assert_abs_diff_eq!(loss, -(LOG_EPSILON.ln()), epsilon = 1e-9);
    }

    #[test]
    fn test_accuracy_score() {
        let y_true = array![0.0, 1.0, 1.0, 0.0];
        let y_pred = array![0.0, 1.0, 0.0, 0.0];
        assert_eq!(accuracy_score(&y_true, &y_pred).unwrap(), 0.75);
    }

    #[test]
    fn test_length_mismatch() {
        let result = mean_squared_error(&array![1.0, 2.0], &array![1.0]);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }
}
