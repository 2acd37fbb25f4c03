use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{Result, ShapeError};

/// Dense row-major matrix. Vectors are stored as single-column matrices.
///
/// Every binary operation checks operand shapes and returns a
/// [`ShapeError`] instead of broadcasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples every entry uniformly from `[low, high)`.
    pub fn random_uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = low + rng.gen::<f64>() * (high - low);
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(ShapeError::Empty),
        };

        if let Some((row, bad)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(ShapeError::Ragged { row, expected: cols, got: bad.len() });
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// Builds an `n × 1` column vector.
    pub fn column(values: Vec<f64>) -> Result<Matrix> {
        Matrix::from_data(values.into_iter().map(|v| vec![v]).collect())
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Bounds-checked read of one entry.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Flattens in column-major order; for a column vector this is just its entries.
    pub fn as_column(&self) -> Vec<f64> {
        (0..self.cols)
            .flat_map(move |j| self.data.iter().map(move |row| row[j]))
            .collect()
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "sub", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "hadamard", |a, b| a * b)
    }

    /// Matrix product `self · rhs`; a column-vector `rhs` gives the
    /// matrix-vector product.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(self.mismatch("dot", rhs));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Outer product of two column vectors: `a ⊗ b = a · bᵗ`.
    pub fn outer(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if a.cols != 1 || b.cols != 1 {
            return Err(a.mismatch("outer", b));
        }
        a.dot(&b.transpose())
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(self.mismatch(op, rhs));
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(&x, &y)| f(x, y)).collect()
            })
            .collect();

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    fn mismatch(&self, op: &'static str, rhs: &Matrix) -> ShapeError {
        ShapeError::Mismatch { op, left: self.shape(), right: rhs.shape() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(data: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_data(data).unwrap()
    }

    #[test]
    fn dot_matrix_vector() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let x = Matrix::column(vec![1.0, -1.0]).unwrap();
        let y = a.dot(&x).unwrap();
        assert_eq!(y.shape(), (3, 1));
        assert_eq!(y.as_column(), vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn outer_product_shape_and_values() {
        let a = Matrix::column(vec![1.0, 2.0]).unwrap();
        let b = Matrix::column(vec![3.0, 4.0, 5.0]).unwrap();
        let o = Matrix::outer(&a, &b).unwrap();
        assert_eq!(o.shape(), (2, 3));
        assert_eq!(o.data, vec![vec![3.0, 4.0, 5.0], vec![6.0, 8.0, 10.0]]);
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let a = m(vec![vec![1.0, 2.0, 3.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t.as_column(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn elementwise_ops_reject_mismatched_shapes() {
        let a = Matrix::zeros(2, 1);
        let b = Matrix::zeros(1, 2);
        let err = a.add(&b).unwrap_err();
        assert_eq!(err, ShapeError::Mismatch { op: "add", left: (2, 1), right: (1, 2) });
        assert!(a.sub(&b).is_err());
        assert!(a.hadamard(&b).is_err());
    }

    #[test]
    fn dot_rejects_incompatible_inner_dimension() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 1);
        assert!(matches!(a.dot(&b), Err(ShapeError::Mismatch { op: "dot", .. })));
    }

    #[test]
    fn from_data_rejects_ragged_and_empty() {
        assert_eq!(Matrix::from_data(vec![]), Err(ShapeError::Empty));
        assert_eq!(
            Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(ShapeError::Ragged { row: 1, expected: 2, got: 1 })
        );
    }

    #[test]
    fn get_is_bounds_checked() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.get(1, 0), Some(3.0));
        assert_eq!(a.get(2, 0), None);
        assert_eq!(a.get(0, 2), None);
        assert_eq!(Matrix::zeros(0, 1).get(0, 0), None);
    }

    #[test]
    fn hadamard_multiplies_entrywise() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![2.0, 0.5], vec![-1.0, 0.0]]);
        assert_eq!(a.hadamard(&b).unwrap().data, vec![vec![2.0, 1.0], vec![-3.0, 0.0]]);
    }
}
