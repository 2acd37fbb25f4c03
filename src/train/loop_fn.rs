use serde::{Serialize, Deserialize};
use tracing::{debug, info, instrument};

use crate::data::dataset::Dataset;
use crate::error::{Result, ShapeError};
use crate::network::network::NeuralNet;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Final network output for one dataset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub input: Vec<f64>,
    pub target: f64,
    pub predicted: f64,
}

/// Everything a finished run hands back to the caller.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    pub network: NeuralNet,
    /// One entry per reporting epoch, in epoch order.
    pub history: Vec<EpochStats>,
    /// Predictions of the final network for every dataset row, in order.
    pub predictions: Vec<Prediction>,
}

impl TrainOutcome {
    /// Loss of the last recorded epoch, if any epoch ran.
    pub fn final_loss(&self) -> Option<f64> {
        self.history.last().map(|s| s.loss)
    }
}

/// Trains `network` on `dataset` for `config.epochs` epochs.
///
/// Samples are visited in dataset order and the optimizer is applied after
/// every sample. On epoch 1, every `config.report_interval`-th epoch and the
/// last epoch the mean epoch loss is logged and appended to the history.
///
/// Deterministic: the same starting network and dataset always give the
/// same outcome. Any shape error aborts the run.
#[instrument(level = "debug", skip_all, fields(epochs = config.epochs))]
pub fn train_loop(
    network: NeuralNet,
    dataset: &Dataset,
    optimizer: &Sgd,
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    if dataset.is_empty() {
        return Err(ShapeError::Empty);
    }

    debug!(
        samples = dataset.len(),
        learning_rate = optimizer.learning_rate,
        "Starting training."
    );

    let mut network = network;
    let mut history = Vec::new();

    for epoch in 1..=config.epochs {
        let (next, loss) = train_epoch(&network, dataset, optimizer)?;
        network = next;

        if config.reports_at(epoch) {
            info!(epoch, loss, "Epoch finished.");
            history.push(EpochStats { epoch, total_epochs: config.epochs, loss });
        }
    }

    let predictions = dataset
        .iter()
        .map(|sample| {
            Ok(Prediction {
                input: sample.input.clone(),
                target: sample.target,
                predicted: network.predict(&sample.input)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(reports = history.len(), "Training complete.");

    Ok(TrainOutcome { network, history, predictions })
}
