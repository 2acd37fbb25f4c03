pub const EPOCHS: usize = 10_000;
pub const REPORT_INTERVAL: usize = 1_000;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`          — total number of full passes over the dataset
/// - `report_interval` — an `EpochStats` is recorded (and logged) every this
///                       many epochs; `0` disables periodic reports. The first
///                       and last epochs are always recorded.
///
/// The learning rate lives on the optimizer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub report_interval: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, report_interval: usize) -> Self {
        TrainConfig { epochs, report_interval }
    }

    /// Whether `epoch` (1-based) should produce a report.
    pub fn reports_at(&self, epoch: usize) -> bool {
        epoch == 1
            || epoch == self.epochs
            || (self.report_interval > 0 && epoch % self.report_interval == 0)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(EPOCHS, REPORT_INTERVAL)
    }
}
