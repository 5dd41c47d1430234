use gdtrain::{Dataset, PerColumnEnsemble};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Per-Column Ensemble ===\n");

    // first column is binary, the other two continuous
    let dataset = Dataset::from_rows(
        vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.5, 2.0],
            vec![1.0, 3.0, 4.5],
            vec![0.0, 0.5, 1.0],
            vec![1.0, 2.5, 3.5],
            vec![0.0, 1.0, 1.5],
        ],
        vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
    )?;

    let ensemble = PerColumnEnsemble::new(vec![true, false, false])
        .fit(&dataset.features, &dataset.labels)?;

    let query = array![1.0, 2.5, 3.0];
    let members = ensemble.member_predictions(query.view())?;
    println!("Sub-model predictions: {members:.4}");
    println!("Prediction: {:.4}", ensemble.predict(query.view())?);

    Ok(())
}
