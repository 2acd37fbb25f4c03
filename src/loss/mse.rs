use crate::error::{Result, ShapeError};

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²). With a single output this
    /// is just (p - t)².
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        let n = MseLoss::check_lengths(predicted, expected)? as f64;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n)
    }

    /// Per-output gradient ∂L/∂p: 2(p - t)/n
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Result<Vec<f64>> {
        let n = MseLoss::check_lengths(predicted, expected)? as f64;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(a, b)| 2.0 * (a - b) / n)
            .collect())
    }

    fn check_lengths(predicted: &[f64], expected: &[f64]) -> Result<usize> {
        if predicted.len() != expected.len() {
            return Err(ShapeError::Mismatch {
                op: "mse",
                left: (predicted.len(), 1),
                right: (expected.len(), 1),
            });
        }
        if predicted.is_empty() {
            return Err(ShapeError::Empty);
        }
        Ok(predicted.len())
    }
}
