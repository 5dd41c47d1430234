use gdtrain::{GradientDescent, Link};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Single-Feature Linear Regression ===\n");

    // y = 2x, a perfectly linear example
    let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
    let y = array![2.0, 4.0, 6.0, 8.0, 10.0];

    let params = GradientDescent::with_params(0.03, 1000).train_with(&x, &y, Link::Identity, |report| {
        println!("Epoch {:4}  MSE={:.6}", report.epoch, report.metric);
    })?;

    println!("\nLearned bias:   {:.4}", params.bias);
    println!("Learned weight: {:.4}", params.weights[0]);
    println!(
        "Prediction for 7: {:.4}",
        params.predict(array![7.0].view(), Link::Identity)?
    );

    Ok(())
}
