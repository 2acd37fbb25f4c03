use crate::activation::activation::Sigmoid;
use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::forward::ForwardCache;
use crate::network::network::NeuralNet;

/// ∂L/∂θ for every parameter of a [`NeuralNet`], shaped like the parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub d_w1: Matrix,
    pub d_b1: Matrix,
    pub d_w2: Matrix,
    pub d_b2: Matrix,
}

impl Gradients {
    pub fn shapes(&self) -> [(usize, usize); 4] {
        [self.d_w1.shape(), self.d_b1.shape(), self.d_w2.shape(), self.d_b2.shape()]
    }
}

impl NeuralNet {
    /// Backpropagates the MSE loss of one example through the cached
    /// forward pass. Chain rule written out by hand, one line per layer step.
    pub fn backward(&self, cache: &ForwardCache, input: &[f64], target: f64) -> Result<Gradients> {
        let x = Matrix::column(input.to_vec())?;

        let d_pred = Matrix::column(MseLoss::derivative(&cache.output_act.as_column(), &[target])?)?;

        // Use pre-activations so σ'(z) is evaluated at the right point.
        let d_output_pre = d_pred.hadamard(&Sigmoid::backward(&cache.output_pre))?;
        let d_w2 = Matrix::outer(&d_output_pre, &cache.hidden_act)?;

        let d_hidden_act = self.w2.transpose().dot(&d_output_pre)?;
        let d_hidden_pre = d_hidden_act.hadamard(&Sigmoid::backward(&cache.hidden_pre))?;
        let d_w1 = Matrix::outer(&d_hidden_pre, &x)?;

        Ok(Gradients {
            d_w1,
            d_b1: d_hidden_pre,
            d_w2,
            d_b2: d_output_pre,
        })
    }
}
