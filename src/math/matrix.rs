use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, DivAssign, MulAssign};

/// Dense row-major matrix. Row = output unit, column = input unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, Vec::len);
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have the same length"
        );

        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    /// Outer product `a · bᵀ`, shape (a.len(), b.len()).
    pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
        Matrix::from_data(
            a.iter()
                .map(|x| b.iter().map(|y| x * y).collect())
                .collect(),
        )
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Matrix-vector product `self · x`.
    pub fn mul_vec(&self, x: &[f64]) -> Vec<f64> {
        if self.cols != x.len() {
            panic!(
                "Matrix of {} columns cannot multiply a vector of length {}",
                self.cols,
                x.len()
            )
        }

        self.data
            .iter()
            .map(|row| row.iter().zip(x).map(|(w, v)| w * v).sum())
            .collect()
    }

    /// Transposed matrix-vector product `selfᵀ · d`, without materializing the transpose.
    pub fn transpose_mul_vec(&self, d: &[f64]) -> Vec<f64> {
        if self.rows != d.len() {
            panic!(
                "Transposed matrix of {} rows cannot multiply a vector of length {}",
                self.rows,
                d.len()
            )
        }

        let mut res = vec![0.0; self.cols];
        for j in 0..self.cols {
            let mut sum = 0.0;
            for i in 0..self.rows {
                sum += self.data[i][j] * d[i];
            }
            res[j] = sum;
        }

        res
    }

    /// `self += alpha * other`, elementwise.
    pub fn scaled_add(&mut self, alpha: f64, other: &Matrix) {
        self.assert_same_shape(other);

        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            for (x, y) in row.iter_mut().zip(other_row) {
                *x += alpha * y;
            }
        }
    }

    pub fn fill(&mut self, value: f64) {
        for row in &mut self.data {
            row.iter_mut().for_each(|x| *x = value);
        }
    }

    fn assert_same_shape(&self, other: &Matrix) {
        if self.rows != other.rows || self.cols != other.cols {
            panic!("Matrices are of incorrect sizes")
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: vec![],
        }
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        self.assert_same_shape(rhs);

        for (row, rhs_row) in self.data.iter_mut().zip(&rhs.data) {
            for (x, y) in row.iter_mut().zip(rhs_row) {
                *x += y;
            }
        }
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        for row in &mut self.data {
            row.iter_mut().for_each(|x| *x *= rhs);
        }
    }
}

impl DivAssign<f64> for Matrix {
    fn div_assign(&mut self, rhs: f64) {
        for row in &mut self.data {
            row.iter_mut().for_each(|x| *x /= rhs);
        }
    }
}
