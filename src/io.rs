//! CSV loading. The last column of every record is the label, the rest are
//! features.

use std::fs::File;
use std::path::Path;

use crate::Vector;
use crate::dataset::Dataset;
use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct CsvOptions {
    /// Discard the first line.
    pub has_header: bool,
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
        }
    }
}

pub fn load_csv<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = read_csv(file, options)?;
    log::info!(
        "loaded {} samples with {} features from {}",
        dataset.n_samples(),
        dataset.n_features(),
        path.display()
    );
    Ok(dataset)
}

pub fn read_csv<R: std::io::Read>(reader: R, options: &CsvOptions) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map_or(0, |p| p.line() as usize);
        let mut values = record
            .iter()
            .enumerate()
            .map(|(column, token)| parse_value(token, line, column))
            .collect::<Result<Vec<f64>>>()?;

        if values.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "line {line} needs at least one feature and a label"
            )));
        }
        labels.push(values.pop().unwrap_or_default());
        rows.push(values);
    }

    Dataset::from_rows(rows, labels)
}

/// Parses a comma separated feature row such as `"13, 19, 1, 0"`.
pub fn parse_row(input: &str) -> Result<Vector> {
    input
        .split(',')
        .enumerate()
        .map(|(column, token)| parse_value(token.trim(), 1, column))
        .collect::<Result<Vec<f64>>>()
        .map(Vector::from)
}

fn parse_value(token: &str, line: usize, column: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|_| Error::Parse {
        line,
        column,
        token: token.to_string(),
    })
}
