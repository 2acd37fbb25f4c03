pub mod error;
pub mod math;
pub mod autodiff;
pub mod activation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;

// Convenience re-exports
pub use error::{Result, ShapeError};
pub use math::matrix::Matrix;
pub use autodiff::{differentiate, Dual, Scalar};
pub use activation::activation::Sigmoid;
pub use network::{NeuralNet, ForwardCache, Gradients};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use data::{Dataset, Sample};
pub use train::{train_loop, TrainConfig, TrainOutcome};
