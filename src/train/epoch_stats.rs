use serde::{Serialize, Deserialize};

/// Loss snapshot recorded by `train_loop` at each reporting epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean loss over every sample of this epoch, each taken before that
    /// sample's update.
    pub loss: f64,
}
