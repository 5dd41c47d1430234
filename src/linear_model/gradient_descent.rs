use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::ArrayView1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Transform applied to `bias + weights · x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    Identity,
    Sigmoid,
}

impl Link {
    pub fn apply(self, z: f64) -> f64 {
        match self {
            Link::Identity => z,
            Link::Sigmoid => Self::sigmoid(z),
        }
    }

    pub fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }

    /// Mean squared error for `Identity`, mean binary cross-entropy for `Sigmoid`.
    pub fn loss(self, y_true: &Vector, y_pred: &Vector) -> Result<f64> {
        match self {
            Link::Identity => crate::metrics::mean_squared_error(y_true, y_pred),
            Link::Sigmoid => crate::metrics::binary_cross_entropy(y_true, y_pred),
        }
    }

    pub fn metric_name(self) -> &'static str {
        match self {
            Link::Identity => "mse",
            Link::Sigmoid => "log_loss",
        }
    }
}

/// Bias plus one weight per feature.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    pub bias: f64,
    pub weights: Vector,
}

impl Parameters {
    pub fn zeros(n_features: usize) -> Self {
        Self {
            bias: 0.0,
            weights: Vector::zeros(n_features),
        }
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// `link(bias + weights · row)` for a single, already normalized row.
    pub fn predict(&self, row: ArrayView1<f64>, link: Link) -> Result<f64> {
        if row.len() != self.weights.len() {
            return Err(Error::mismatch("feature row", self.weights.len(), row.len()));
        }
        Ok(link.apply(self.bias + self.weights.dot(&row)))
    }

    pub fn predict_batch(&self, x: &Matrix, link: Link) -> Result<Vector> {
        if x.ncols() != self.weights.len() {
            return Err(Error::mismatch("feature matrix", self.weights.len(), x.ncols()));
        }
        Ok(self.forward(x, link))
    }

    fn forward(&self, x: &Matrix, link: Link) -> Vector {
        (x.dot(&self.weights) + self.bias).mapv(|z| link.apply(z))
    }
}

/// Starting point for the parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Init {
    #[default]
    Zeros,
    /// Bias and weights drawn from `U(-0.5, 0.5)` with a seeded generator.
    Uniform { seed: u64 },
}

impl Init {
    pub fn parameters(self, n_features: usize) -> Parameters {
        match self {
            Init::Zeros => Parameters::zeros(n_features),
            Init::Uniform { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let bias: f64 = rng.gen_range(-0.5..0.5);
                let weights = Vector::random_using(n_features, Uniform::new(-0.5, 0.5), &mut rng);
                Parameters { bias, weights }
            }
        }
    }
}

/// Progress emitted every `report_every` epochs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    pub metric: f64,
}

/// Batch gradient descent shared by the linear and logistic models.
///
/// Every epoch computes the gradient over the whole matrix with the current
/// parameters and then updates bias and weights together. Divergence on
/// ill-conditioned input is not detected: NaN and infinities propagate into
/// the returned parameters.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    learning_rate: f64,
    epochs: usize,
    report_every: usize,
    init: Init,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 1000,
            report_every: 100,
            init: Init::Zeros,
        }
    }

    pub fn with_params(learning_rate: f64, epochs: usize) -> Self {
        Self::new().learning_rate(learning_rate).epochs(epochs)
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    pub fn init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Trains and logs every report at info level.
    pub fn train(&self, x: &Matrix, y: &Vector, link: Link) -> Result<Parameters> {
        self.train_with(x, y, link, |report| {
            log::info!(
                "epoch {} {}={:.4}",
                report.epoch,
                link.metric_name(),
                report.metric
            );
        })
    }

    pub fn train_with<F>(&self, x: &Matrix, y: &Vector, link: Link, mut on_report: F) -> Result<Parameters>
    where
        F: FnMut(EpochReport),
    {
        self.validate(x, y)?;

        let n_samples = x.nrows() as f64;
        let mut params = self.init.parameters(x.ncols());
        log::debug!(
            "training {:?} model on {}x{} for {} epochs (lr={})",
            link,
            x.nrows(),
            x.ncols(),
            self.epochs,
            self.learning_rate
        );

        for epoch in 0..self.epochs {
            let predictions = params.forward(x, link);
            let error = &predictions - y;

            let weight_gradient = x.t().dot(&error) / n_samples;
            let bias_gradient = error.sum() / n_samples;

            params.weights.scaled_add(-self.learning_rate, &weight_gradient);
            params.bias -= self.learning_rate * bias_gradient;

            if epoch % self.report_every == 0 {
                let metric = link.loss(y, &params.forward(x, link))?;
                on_report(EpochReport { epoch, metric });
            }
        }

        Ok(params)
    }

    fn validate(&self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() == 0 {
            return Err(Error::EmptyDataset("cannot train on zero samples"));
        }
        if x.nrows() != y.len() {
            return Err(Error::mismatch("labels", x.nrows(), y.len()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.report_every == 0 {
            return Err(Error::InvalidParameter(
                "report interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}
