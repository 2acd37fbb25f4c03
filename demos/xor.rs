use dualgrad::{train_loop, Dataset, NeuralNet, Sgd, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> dualgrad::Result<()> {
    let network = NeuralNet::random(&mut StdRng::seed_from_u64(2024));
    let dataset = Dataset::xor();
    let optimizer = Sgd::new(1.0);

    let outcome = train_loop(network, &dataset, &optimizer, &TrainConfig::default())?;

    for stats in &outcome.history {
        println!("Epoch {}: loss = {:.6}", stats.epoch, stats.loss);
    }

    for p in &outcome.predictions {
        println!("Input: {:?} -> Output: {:.4}", p.input, p.predicted);
    }

    Ok(())
}
