use crate::activation::activation::Sigmoid;
use crate::error::{Result, ShapeError};
use crate::math::matrix::Matrix;
use crate::network::network::NeuralNet;

/// Everything one forward pass produces that backprop needs later.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCache {
    /// z₁ = W₁·x + b₁
    pub hidden_pre: Matrix,
    /// a₁ = σ(z₁)
    pub hidden_act: Matrix,
    /// z₂ = W₂·a₁ + b₂
    pub output_pre: Matrix,
    /// a₂ = σ(z₂), the prediction
    pub output_act: Matrix,
}

impl ForwardCache {
    /// The single network output, or a `ShapeError` if the output layer is empty.
    pub fn prediction(&self) -> Result<f64> {
        self.output_act.get(0, 0).ok_or_else(|| ShapeError::Mismatch {
            op: "prediction",
            left: self.output_act.shape(),
            right: (1, 1),
        })
    }
}

impl NeuralNet {
    /// Forward pass. Pure: the network is only read.
    ///
    /// Parameters are shape-checked first, since the fields are public and
    /// a network need not have come through [`NeuralNet::new`].
    pub fn forward(&self, input: &[f64]) -> Result<ForwardCache> {
        self.check_shapes()?;
        let x = Matrix::column(input.to_vec())?;

        let hidden_pre = self.w1.dot(&x)?.add(&self.b1)?;
        let hidden_act = Sigmoid::forward(&hidden_pre);
        let output_pre = self.w2.dot(&hidden_act)?.add(&self.b2)?;
        let output_act = Sigmoid::forward(&output_pre);

        Ok(ForwardCache { hidden_pre, hidden_act, output_pre, output_act })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::network::{HIDDEN_SIZE, OUTPUT_SIZE};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_network_predicts_one_half() {
        let net = NeuralNet::new(
            Matrix::zeros(4, 2),
            Matrix::zeros(4, 1),
            Matrix::zeros(1, 4),
            Matrix::zeros(1, 1),
        )
        .unwrap();
        let cache = net.forward(&[1.0, 0.0]).unwrap();
        assert_eq!(cache.hidden_act.as_column(), vec![0.5; 4]);
        // z₂ = 0·… + 0
        assert_eq!(cache.prediction().unwrap(), 0.5);
    }

    #[test]
    fn cache_shapes_follow_topology() {
        let net = NeuralNet::random(&mut StdRng::seed_from_u64(9));
        let cache = net.forward(&[0.0, 1.0]).unwrap();
        assert_eq!(cache.hidden_pre.shape(), (HIDDEN_SIZE, 1));
        assert_eq!(cache.hidden_act.shape(), (HIDDEN_SIZE, 1));
        assert_eq!(cache.output_pre.shape(), (OUTPUT_SIZE, 1));
        assert_eq!(cache.output_act.shape(), (OUTPUT_SIZE, 1));
    }

    #[test]
    fn output_is_a_probability() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let net = NeuralNet::random(&mut rng);
            for input in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
                let p = net.predict(&input).unwrap();
                assert!(p > 0.0 && p < 1.0, "prediction {p} outside (0, 1)");
            }
        }
    }

    #[test]
    fn forward_matches_hand_computation() {
        let net = NeuralNet::new(
            Matrix::from_data(vec![
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ])
            .unwrap(),
            Matrix::column(vec![0.0, 0.0, -1.0, 0.5]).unwrap(),
            Matrix::from_data(vec![vec![1.0, -1.0, 2.0, 0.0]]).unwrap(),
            Matrix::column(vec![0.25]).unwrap(),
        )
        .unwrap();
        let cache = net.forward(&[1.0, 0.0]).unwrap();
        assert_eq!(cache.hidden_pre.as_column(), vec![1.0, 0.0, 0.0, 0.5]);

        let s = Sigmoid::function;
        let z2 = s(1.0) - s(0.0) + 2.0 * s(0.0) + 0.25;
        assert_abs_diff_eq!(cache.output_pre.data[0][0], z2, epsilon = 1e-12);
        assert_abs_diff_eq!(cache.prediction().unwrap(), s(z2), epsilon = 1e-12);
    }

    #[test]
    fn hand_built_network_without_outputs_is_rejected() {
        let net = NeuralNet {
            w1: Matrix::zeros(4, 2),
            b1: Matrix::zeros(4, 1),
            w2: Matrix::zeros(0, 4),
            b2: Matrix::zeros(0, 1),
        };
        let err = net.predict(&[0.0, 1.0]).unwrap_err();
        assert_eq!(err, ShapeError::Mismatch { op: "w2", left: (0, 4), right: (1, 4) });
        assert!(net.forward(&[0.0, 1.0]).is_err());
    }

    #[test]
    fn empty_output_cache_has_no_prediction() {
        let cache = ForwardCache {
            hidden_pre: Matrix::zeros(4, 1),
            hidden_act: Matrix::zeros(4, 1),
            output_pre: Matrix::zeros(0, 1),
            output_act: Matrix::zeros(0, 1),
        };
        assert_eq!(
            cache.prediction(),
            Err(ShapeError::Mismatch { op: "prediction", left: (0, 1), right: (1, 1) })
        );
    }

    #[test]
    fn wrong_input_width_is_a_shape_error() {
        let net = NeuralNet::random(&mut StdRng::seed_from_u64(1));
        let err = net.forward(&[1.0, 0.0, 1.0]).unwrap_err();
        assert!(matches!(err, ShapeError::Mismatch { op: "dot", left: (4, 2), right: (3, 1) }));
    }
}
