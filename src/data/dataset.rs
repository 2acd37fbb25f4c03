use serde::{Serialize, Deserialize};

/// One training row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: f64) -> Sample {
        Sample { input, target }
    }
}

/// Ordered, immutable collection of samples. Iteration order is the
/// insertion order and never changes between epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Dataset {
        Dataset { samples }
    }

    /// The XOR truth table.
    pub fn xor() -> Dataset {
        Dataset::new(vec![
            Sample::new(vec![0.0, 0.0], 0.0),
            Sample::new(vec![0.0, 1.0], 1.0),
            Sample::new(vec![1.0, 0.0], 1.0),
            Sample::new(vec![1.0, 1.0], 0.0),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
