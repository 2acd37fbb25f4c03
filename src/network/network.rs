use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{Result, ShapeError};
use crate::math::matrix::Matrix;

pub const INPUT_SIZE: usize = 2;
pub const HIDDEN_SIZE: usize = 4;
pub const OUTPUT_SIZE: usize = 1;

/// Fixed-topology 2 → 4 → 1 sigmoid network.
///
/// Weight matrices are stored `(fan_out, fan_in)` and biases as column
/// vectors, so a layer is `W · x + b`. A `NeuralNet` is never updated in
/// place: the optimizer builds a fresh one from the old parameters and a
/// set of [`Gradients`](crate::network::backward::Gradients).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuralNet {
    /// Input → hidden weights, `HIDDEN_SIZE × INPUT_SIZE`.
    pub w1: Matrix,
    /// Hidden biases, `HIDDEN_SIZE × 1`.
    pub b1: Matrix,
    /// Hidden → output weights, `OUTPUT_SIZE × HIDDEN_SIZE`.
    pub w2: Matrix,
    /// Output biases, `OUTPUT_SIZE × 1`.
    pub b2: Matrix,
}

impl NeuralNet {
    /// Shapes every parameter must have, in `w1, b1, w2, b2` order.
    pub const SHAPES: [(usize, usize); 4] = [
        (HIDDEN_SIZE, INPUT_SIZE),
        (HIDDEN_SIZE, 1),
        (OUTPUT_SIZE, HIDDEN_SIZE),
        (OUTPUT_SIZE, 1),
    ];

    /// Assembles a network from explicit parameters, rejecting any tensor
    /// whose shape does not fit the topology.
    pub fn new(w1: Matrix, b1: Matrix, w2: Matrix, b2: Matrix) -> Result<NeuralNet> {
        let net = NeuralNet { w1, b1, w2, b2 };
        net.check_shapes()?;
        Ok(net)
    }

    /// Fails with the first parameter whose shape does not fit the topology.
    pub fn check_shapes(&self) -> Result<()> {
        let names = ["w1", "b1", "w2", "b2"];
        for ((actual, expected), op) in self.shapes().into_iter().zip(Self::SHAPES).zip(names) {
            if actual != expected {
                return Err(ShapeError::Mismatch { op, left: actual, right: expected });
            }
        }
        Ok(())
    }

    /// Every weight and bias drawn uniformly from `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> NeuralNet {
        let [w1, b1, w2, b2] = Self::SHAPES
            .map(|(rows, cols)| Matrix::random_uniform(rows, cols, -1.0, 1.0, rng));
        NeuralNet { w1, b1, w2, b2 }
    }

    pub fn shapes(&self) -> [(usize, usize); 4] {
        [self.w1.shape(), self.b1.shape(), self.w2.shape(), self.b2.shape()]
    }

    /// The network's scalar output for `input`.
    pub fn predict(&self, input: &[f64]) -> Result<f64> {
        self.forward(input)?.prediction()
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by
    /// `save_json`. Parameters with the wrong shape are rejected.
    pub fn load_json(path: &str) -> std::io::Result<NeuralNet> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let raw: NeuralNet = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        NeuralNet::new(raw.w1, raw.b1, raw.w2, raw.b2)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
