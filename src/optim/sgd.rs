use crate::error::Result;
use crate::network::backward::Gradients;
use crate::network::network::NeuralNet;

pub const LEARNING_RATE: f64 = 1.0;

/// Plain gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Returns a new network with `θ − lr·∂L/∂θ` for every parameter.
    /// `network` itself is left untouched.
    pub fn step(&self, network: &NeuralNet, grads: &Gradients) -> Result<NeuralNet> {
        let lr = self.learning_rate;
        NeuralNet::new(
            network.w1.sub(&grads.d_w1.scale(lr))?,
            network.b1.sub(&grads.d_b1.scale(lr))?,
            network.w2.sub(&grads.d_w2.scale(lr))?,
            network.b2.sub(&grads.d_b2.scale(lr))?,
        )
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(LEARNING_RATE)
    }
}
