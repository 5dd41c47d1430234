//! Feature normalization.
//!
//! Statistics are fitted once on a reference matrix and then reapplied,
//! unchanged, to training rows and inference rows alike. Columns whose spread
//! is zero are passed through untouched rather than shifted or divided.

use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::{ArrayView1, Axis, Zip};

/// Per-column mean and population standard deviation.
#[derive(Clone, Debug, PartialEq)]
pub struct ZScoreStats {
    pub mean: Vector,
    pub std: Vector,
}

impl ZScoreStats {
    pub fn fit(data: &Matrix) -> Result<Self> {
        let mean = data
            .mean_axis(Axis(0))
            .ok_or(Error::EmptyDataset("cannot compute column means"))?;
        let std = data.std_axis(Axis(0), 0.0);

        log::debug!("fitted z-score stats: mean={mean}, std={std}");
        Ok(Self { mean, std })
    }

    pub fn apply(&self, row: ArrayView1<f64>) -> Result<Vector> {
        check_width(self.mean.len(), row.len())?;

        Ok(Zip::from(&row)
            .and(&self.mean)
            .and(&self.std)
            .map_collect(|&v, &mean, &std| if std != 0.0 { (v - mean) / std } else { v }))
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        transform_rows(data, |row| self.apply(row))
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

/// Per-column minimum and maximum, scaling each column onto `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct MinMaxStats {
    pub min: Vector,
    pub max: Vector,
}

impl MinMaxStats {
    pub fn fit(data: &Matrix) -> Result<Self> {
        if data.nrows() == 0 {
            return Err(Error::EmptyDataset("cannot compute column ranges"));
        }

        let min = data.fold_axis(Axis(0), f64::INFINITY, |&acc, &v| acc.min(v));
        let max = data.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &v| acc.max(v));

        log::debug!("fitted min-max stats: min={min}, max={max}");
        Ok(Self { min, max })
    }

    pub fn apply(&self, row: ArrayView1<f64>) -> Result<Vector> {
        check_width(self.min.len(), row.len())?;

        Ok(Zip::from(&row)
            .and(&self.min)
            .and(&self.max)
            .map_collect(|&v, &min, &max| {
                let range = max - min;
                if range != 0.0 { (v - min) / range } else { v }
            }))
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        transform_rows(data, |row| self.apply(row))
    }

    pub fn n_features(&self) -> usize {
        self.min.len()
    }
}

/// Which normalizer a model fits before training.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Normalization {
    #[default]
    ZScore,
    MinMax,
    None,
}

impl Normalization {
    pub fn fit(self, data: &Matrix) -> Result<FittedNormalizer> {
        match self {
            Normalization::ZScore => ZScoreStats::fit(data).map(FittedNormalizer::ZScore),
            Normalization::MinMax => MinMaxStats::fit(data).map(FittedNormalizer::MinMax),
            Normalization::None => {
                if data.nrows() == 0 {
                    return Err(Error::EmptyDataset("cannot fit normalizer"));
                }
                Ok(FittedNormalizer::Identity {
                    n_features: data.ncols(),
                })
            }
        }
    }
}

/// Normalization statistics owned by a trained model.
#[derive(Clone, Debug, PartialEq)]
pub enum FittedNormalizer {
    ZScore(ZScoreStats),
    MinMax(MinMaxStats),
    Identity { n_features: usize },
}

impl FittedNormalizer {
    pub fn apply(&self, row: ArrayView1<f64>) -> Result<Vector> {
        match self {
            FittedNormalizer::ZScore(stats) => stats.apply(row),
            FittedNormalizer::MinMax(stats) => stats.apply(row),
            FittedNormalizer::Identity { n_features } => {
                check_width(*n_features, row.len())?;
                Ok(row.to_owned())
            }
        }
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        transform_rows(data, |row| self.apply(row))
    }

    pub fn n_features(&self) -> usize {
        match self {
            FittedNormalizer::ZScore(stats) => stats.n_features(),
            FittedNormalizer::MinMax(stats) => stats.n_features(),
            FittedNormalizer::Identity { n_features } => *n_features,
        }
    }
}

fn check_width(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::mismatch("normalized row", expected, got));
    }
    Ok(())
}

fn transform_rows<F>(data: &Matrix, mut apply: F) -> Result<Matrix>
where
    F: FnMut(ArrayView1<f64>) -> Result<Vector>,
{
    let mut result = data.clone();
    for (mut out, row) in result.axis_iter_mut(Axis(0)).zip(data.axis_iter(Axis(0))) {
        out.assign(&apply(row)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use proptest::prelude::*;

    #[test]
    fn test_zscore_stats() {
        let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let stats = ZScoreStats::fit(&data).unwrap();

        assert_eq!(stats.mean, array![3.0, 4.0]);
        let expected_std = (8.0f64 / 3.0).sqrt();
        assert_abs_diff_eq!(stats.std[0], expected_std, epsilon = 1e-12);

        let scaled = stats.transform(&data).unwrap();
        assert_eq!(scaled.shape(), data.shape());
        assert_abs_diff_eq!(scaled[(1, 0)], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled[(2, 1)], 2.0 / expected_std, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_variance_column_passes_through() {
        let data = array![[7.0, 1.0], [7.0, 2.0], [7.0, 3.0]];
        let stats = ZScoreStats::fit(&data).unwrap();
        assert_eq!(stats.std[0], 0.0);

        let row = stats.apply(array![7.0, 2.0].view()).unwrap();
        assert_eq!(row[0], 7.0);
        assert_abs_diff_eq!(row[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let data = Matrix::zeros((0, 3));
        assert!(matches!(ZScoreStats::fit(&data), Err(Error::EmptyDataset(_))));
        assert!(matches!(MinMaxStats::fit(&data), Err(Error::EmptyDataset(_))));
        assert!(Normalization::None.fit(&data).is_err());
    }

    #[test]
    fn test_row_width_checked() {
        let stats = ZScoreStats::fit(&array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let result = stats.apply(array![1.0, 2.0, 3.0].view());
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { expected: 2, got: 3, .. })
        ));
    }

    #[test]
    fn test_min_max_scaling() {
        let data = array![[0.0, 5.0], [5.0, 5.0], [10.0, 5.0]];
        let stats = MinMaxStats::fit(&data).unwrap();
        let scaled = stats.transform(&data).unwrap();

        assert_eq!(scaled.column(0).to_vec(), vec![0.0, 0.5, 1.0]);
        // constant column is left as-is
        assert_eq!(scaled.column(1).to_vec(), vec![5.0, 5.0, 5.0]);

        let row = stats.apply(array![2.5, 9.0].view()).unwrap();
        assert_eq!(row, array![0.25, 9.0]);
    }

    #[test]
    fn test_stats_reused_not_refitted() {
        let train = array![[1.0], [2.0], [3.0]];
        let normalizer = Normalization::ZScore.fit(&train).unwrap();

        let first = normalizer.apply(array![10.0].view()).unwrap();
        let second = normalizer.apply(array![10.0].view()).unwrap();
        assert_eq!(first, second);
        assert_abs_diff_eq!(first[0], 8.0 / (2.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_identity_normalizer() {
        let normalizer = Normalization::None.fit(&array![[1.0, 2.0]]).unwrap();
        assert_eq!(normalizer.n_features(), 2);
        assert_eq!(normalizer.apply(array![3.0, 4.0].view()).unwrap(), array![3.0, 4.0]);
        assert!(normalizer.apply(array![3.0].view()).is_err());
    }

    fn matrix_strategy() -> impl Strategy<Value = Matrix> {
        (2usize..20, 1usize..5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(-100i32..100, rows * cols).prop_map(move |values| {
                let values = values.into_iter().map(f64::from).collect();
                Matrix::from_shape_vec((rows, cols), values).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn zscore_columns_have_zero_mean_unit_std(data in matrix_strategy()) {
            let stats = ZScoreStats::fit(&data).unwrap();
            let scaled = stats.transform(&data).unwrap();

            for j in 0..data.ncols() {
                let column = scaled.column(j);
                if stats.std[j] == 0.0 {
                    prop_assert_eq!(column, data.column(j));
                } else {
                    let mean = column.mean().unwrap();
                    let std = column.std(0.0);
                    prop_assert!(mean.abs() < 1e-9, "column {} mean {}", j, mean);
                    prop_assert!((std - 1.0).abs() < 1e-9, "column {} std {}", j, std);
                }
            }
        }
    }
}
