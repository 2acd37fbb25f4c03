pub mod network;
pub mod forward;
pub mod backward;

pub use network::{NeuralNet, INPUT_SIZE, HIDDEN_SIZE, OUTPUT_SIZE};
pub use forward::ForwardCache;
pub use backward::Gradients;
