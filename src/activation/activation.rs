use std::f64::consts::E;

use crate::math::matrix::Matrix;

/// Logistic sigmoid, the only activation the network uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// σ(x) = 1 / (1 + e^(−x))
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + E.powf(-x))
    }

    /// σ'(x) = σ(x)·(1 − σ(x)), in closed form.
    pub fn derivative(x: f64) -> f64 {
        let fx = Sigmoid::function(x);
        fx * (1.0 - fx)
    }

    /// Element-wise σ over a pre-activation matrix.
    pub fn forward(pre: &Matrix) -> Matrix {
        pre.map(Sigmoid::function)
    }

    /// Element-wise σ' over a pre-activation matrix.
    pub fn backward(pre: &Matrix) -> Matrix {
        pre.map(Sigmoid::derivative)
    }
}
