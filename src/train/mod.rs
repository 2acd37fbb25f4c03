pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{train_epoch, train_step};
pub use epoch_stats::EpochStats;
pub use train_config::{TrainConfig, EPOCHS, REPORT_INTERVAL};
pub use loop_fn::{train_loop, Prediction, TrainOutcome};
