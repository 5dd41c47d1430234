use gdtrain::{LogisticRegression, Normalization};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Single-Feature Logistic Regression ===\n");

    // class changes between 3 and 4
    let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
    let y = array![0.0, 0.0, 0.0, 1.0, 1.0];

    let model = LogisticRegression::with_params(0.1, 1000)
        .normalization(Normalization::None)
        .fit_with(&x, &y, |report| {
            println!("Epoch {:4}  LogLoss={:.6}", report.epoch, report.metric);
        })?;

    println!();
    for value in [2.5, 4.5] {
        let row = array![value];
        println!(
            "x={value:.1}: probability={:.4} class={}",
            model.predict(row.view())?,
            model.predict_class(row.view())?
        );
    }

    Ok(())
}
