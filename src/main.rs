//! gdtrain CLI: fit a linear, logistic or per-column model on a CSV file and
//! print a prediction for one query row.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gdtrain::io::{self, CsvOptions};
use gdtrain::{
    Dataset, GradientDescent, Init, LinearRegression, LogisticRegression, Normalization,
    PerColumnEnsemble, TrainedModel,
};
use log::info;

#[derive(Parser)]
#[command(name = "gdtrain")]
#[command(about = "Batch gradient descent for linear and logistic models")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a linear regression (identity link, mean squared error)
    Regress {
        #[command(flatten)]
        common: CommonArgs,

        #[arg(long, default_value = "0.03")]
        learning_rate: f64,

        #[arg(long, value_enum, default_value = "zscore")]
        normalize: Scaling,
    },

    /// Fit a logistic regression on 0/1 labels
    Classify {
        #[command(flatten)]
        common: CommonArgs,

        #[arg(long, default_value = "0.1")]
        learning_rate: f64,

        #[arg(long, value_enum, default_value = "zscore")]
        normalize: Scaling,
    },

    /// Fit one single-feature model per column and average their predictions
    Ensemble {
        #[command(flatten)]
        common: CommonArgs,

        #[arg(long, default_value = "0.01")]
        learning_rate: f64,

        #[arg(long, value_enum, default_value = "none")]
        normalize: Scaling,

        /// Zero-based indices of the columns that get a logistic sub-model
        #[arg(long, value_delimiter = ',')]
        binary: Vec<usize>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// CSV file; the last column is the label
    data: PathBuf,

    /// Treat the first line as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Number of gradient-descent epochs (defaults to 1000, 500 for ensembles)
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Seed for uniform(-0.5, 0.5) initialization; zeros when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Raw feature row to predict, e.g. "13,19,1,0"
    #[arg(short, long)]
    predict: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scaling {
    Zscore,
    Minmax,
    None,
}

impl From<Scaling> for Normalization {
    fn from(scaling: Scaling) -> Self {
        match scaling {
            Scaling::Zscore => Normalization::ZScore,
            Scaling::Minmax => Normalization::MinMax,
            Scaling::None => Normalization::None,
        }
    }
}

impl CommonArgs {
    fn load(&self) -> gdtrain::Result<Dataset> {
        let options = CsvOptions {
            has_header: !self.no_header,
            ..CsvOptions::default()
        };
        io::load_csv(&self.data, &options)
    }

    fn init(&self) -> Init {
        self.seed.map_or(Init::Zeros, |seed| Init::Uniform { seed })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Regress {
            common,
            learning_rate,
            normalize,
        } => {
            let dataset = common.load()?;
            let model = LinearRegression::with_params(learning_rate, common.epochs.unwrap_or(1000))
                .init(common.init())
                .normalization(normalize.into())
                .fit_dataset(&dataset)?;
            report(&model, &dataset)?;
            if let Some(row) = &common.predict {
                let row = io::parse_row(row)?;
                println!("prediction for {row} = {:.4}", model.predict(row.view())?);
            }
        }
        Commands::Classify {
            common,
            learning_rate,
            normalize,
        } => {
            let dataset = common.load()?;
            let model = LogisticRegression::with_params(learning_rate, common.epochs.unwrap_or(1000))
                .init(common.init())
                .normalization(normalize.into())
                .fit_dataset(&dataset)?;
            report(&model, &dataset)?;
            if let Some(row) = &common.predict {
                let row = io::parse_row(row)?;
                println!(
                    "probability for {row} = {:.4}, class = {}",
                    model.predict(row.view())?,
                    model.predict_class(row.view())?
                );
            }
        }
        Commands::Ensemble {
            common,
            learning_rate,
            normalize,
            binary,
        } => {
            let dataset = common.load()?;
            let mut tags = vec![false; dataset.n_features()];
            for index in binary {
                let tag = tags.get_mut(index).ok_or_else(|| {
                    gdtrain::Error::InvalidParameter(format!(
                        "binary column {index} out of range for {} features",
                        dataset.n_features()
                    ))
                })?;
                *tag = true;
            }

            let trainer = GradientDescent::with_params(learning_rate, common.epochs.unwrap_or(500))
                .init(common.init());
            let ensemble = PerColumnEnsemble::new(tags)
                .trainer(trainer)
                .normalization(normalize.into())
                .fit(&dataset.features, &dataset.labels)?;
            info!("fitted {} column models", ensemble.n_columns());

            if let Some(row) = &common.predict {
                let row = io::parse_row(row)?;
                println!("prediction for {row} = {:.4}", ensemble.predict(row.view())?);
            }
        }
    }

    Ok(())
}

fn report(model: &TrainedModel, dataset: &Dataset) -> gdtrain::Result<()> {
    println!("bias: {:.6}", model.params.bias);
    println!("weights: {:.6}", model.params.weights);
    println!(
        "training score: {:.4}",
        model.score(&dataset.features, &dataset.labels)?
    );
    Ok(())
}
