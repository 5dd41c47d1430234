use gdtrain::{Dataset, LinearRegression, metrics};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Multi-Feature Linear Regression (z-score) ===\n");

    // sqft, bedrooms, bathrooms, laundry -> price
    let dataset = Dataset::from_rows(
        vec![
            vec![2300.0, 3.0, 2.0, 1.0],
            vec![1200.0, 2.0, 1.0, 0.0],
            vec![1800.0, 3.0, 2.0, 1.0],
            vec![950.0, 1.0, 1.0, 0.0],
            vec![3100.0, 4.0, 3.0, 1.0],
            vec![1500.0, 2.0, 2.0, 0.0],
            vec![2600.0, 4.0, 2.0, 1.0],
        ],
        vec![455000.0, 240000.0, 360000.0, 190000.0, 610000.0, 300000.0, 515000.0],
    )?;

    let model = LinearRegression::with_params(0.01, 500).fit_with(
        &dataset.features,
        &dataset.labels,
        |report| println!("Epoch {:3} - MSE: {:.4}", report.epoch, report.metric),
    )?;

    let predictions = model.predict_batch(&dataset.features)?;
    println!("\nR² score: {:.4}", model.score(&dataset.features, &dataset.labels)?);
    println!("MAE: {:.2}", metrics::mean_absolute_error(&dataset.labels, &predictions)?);
    println!("Weights: {:.2}  bias: {:.2}", model.params.weights, model.params.bias);

    // the query row is normalized with the training statistics
    let query = array![1000.0, 2.0, 2.0, 1.0];
    println!("\nPredicted price for {query}: {:.2}", model.predict(query.view())?);

    Ok(())
}
