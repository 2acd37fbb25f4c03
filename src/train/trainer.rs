use crate::{
    data::dataset::{Dataset, Sample},
    error::{Result, ShapeError},
    loss::mse::MseLoss,
    network::network::NeuralNet,
    optim::sgd::Sgd,
};

/// One forward → loss → backward → update cycle on a single sample.
/// Returns the updated network and the sample's loss before the update.
pub fn train_step(network: &NeuralNet, sample: &Sample, optimizer: &Sgd) -> Result<(NeuralNet, f64)> {
    let cache = network.forward(&sample.input)?;
    let loss = MseLoss::loss(&[cache.prediction()?], &[sample.target])?;
    let grads = network.backward(&cache, &sample.input, sample.target)?;
    let updated = optimizer.step(network, &grads)?;
    Ok((updated, loss))
}

/// One pass over `dataset` in order, updating after every sample.
/// Returns the final network and the mean per-sample loss.
pub fn train_epoch(network: &NeuralNet, dataset: &Dataset, optimizer: &Sgd) -> Result<(NeuralNet, f64)> {
    if dataset.is_empty() {
        return Err(ShapeError::Empty);
    }

    let mut current = network.clone();
    let mut total_loss = 0.0;

    for sample in dataset {
        let (next, loss) = train_step(&current, sample, optimizer)?;
        current = next;
        total_loss += loss;
    }

    Ok((current, total_loss / dataset.len() as f64))
}
