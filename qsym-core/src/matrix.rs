//! # ComplexMatrix — dense complex algebra
//!
//! Row-major dense matrix of `Complex64` with element-wise algebra, the
//! standard matrix product and the Kronecker (tensor) product. Every
//! algebraic operation returns a freshly owned matrix.
//!
//! ## Index convention
//!
//! ```text
//! tensor_product(A, B)[i·B.rows + k, j·B.cols + l] = A[i, j] · B[k, l]
//! ```
//!
//! The left operand selects the most-significant block, so folding lanes
//! left-to-right makes lane 0 the most-significant bit of a basis index.

use crate::error::{QsymError, QsymResult};
use num_complex::Complex64;
use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// Dense complex-valued matrix
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComplexMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl ComplexMatrix {
    /// Cria matriz `rows x cols` preenchida com zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Complex64::new(0.0, 0.0); rows * cols],
        }
    }

    /// Builds a matrix from row-major values.
    ///
    /// Fails with [`QsymError::MalformedConstruction`] when the value count
    /// differs from `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<Complex64>) -> QsymResult<Self> {
        let expected = rows * cols;
        if values.len() != expected {
            return Err(QsymError::MalformedConstruction {
                rows,
                cols,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: values,
        })
    }

    /// Builds a column vector (state vector) from amplitudes
    pub fn column(amplitudes: Vec<Complex64>) -> Self {
        Self {
            rows: amplitudes.len(),
            cols: 1,
            data: amplitudes,
        }
    }

    /// 1x1 matrix holding `value`
    pub fn scalar(value: Complex64) -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![value],
        }
    }

    /// Matriz identidade `n x n`
    pub fn identity(n: usize) -> Self {
        let mut mat = Self::zeros(n, n);
        for i in 0..n {
            mat.data[i * n + i] = Complex64::new(1.0, 0.0);
        }
        mat
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True for matrices with exactly one column
    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    /// Row-major view of the entries
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Checked element access
    pub fn get(&self, row: usize, col: usize) -> Option<Complex64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Element access.
    ///
    /// # Panics
    ///
    /// Panics when `(row, col)` lies outside the matrix.
    pub fn at(&self, row: usize, col: usize) -> Complex64 {
        self[(row, col)]
    }

    /// Sets one entry and returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics when `(row, col)` lies outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<Complex64>) -> &mut Self {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = value.into();
        self
    }

    /// Combines two equally shaped matrices entry by entry
    pub fn elementwise<F>(&self, other: &Self, f: F) -> QsymResult<Self>
    where
        F: Fn(Complex64, Complex64) -> Complex64,
    {
        if self.shape() != other.shape() {
            return Err(QsymError::DimensionMismatch {
                op: "elementwise",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Soma elemento a elemento
    pub fn checked_add(&self, other: &Self) -> QsymResult<Self> {
        self.elementwise(other, |a, b| a + b)
    }

    /// Subtração elemento a elemento
    pub fn checked_sub(&self, other: &Self) -> QsymResult<Self> {
        self.elementwise(other, |a, b| a - b)
    }

    /// Standard matrix product `self × other`.
    ///
    /// Requires `self.cols == other.rows`.
    pub fn matmul(&self, other: &Self) -> QsymResult<Self> {
        if self.cols != other.rows {
            return Err(QsymError::DimensionMismatch {
                op: "matmul",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                result.data[i * other.cols + j] = sum;
            }
        }
        Ok(result)
    }

    /// Kronecker product `self ⊗ other`. Defined for any pair of shapes.
    pub fn tensor_product(&self, other: &Self) -> Self {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut result = Self::zeros(rows, cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                let p1 = self.data[i * self.cols + j];
                for k in 0..other.rows {
                    for l in 0..other.cols {
                        let p2 = other.data[k * other.cols + l];
                        let r = i * other.rows + k;
                        let c = j * other.cols + l;
                        result.data[r * cols + c] = p1 * p2;
                    }
                }
            }
        }
        result
    }

    /// Multiplicação por escalar
    pub fn scale(&self, factor: Complex64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| v * factor).collect(),
        }
    }

    /// Transposta
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        result
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Self {
        let mut result = self.transpose();
        for v in &mut result.data {
            *v = v.conj();
        }
        result
    }

    /// Same shape and every entry within `tolerance` (by modulus of the difference)
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Checks `M · M† ≈ I`
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        if self.rows != self.cols {
            return false;
        }
        match self.matmul(&self.dagger()) {
            Ok(product) => product.approx_eq(&Self::identity(self.rows), tolerance),
            Err(_) => false,
        }
    }
}

impl Index<(usize, usize)> for ComplexMatrix {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@matrix [{}, {}]--", self.rows, self.cols)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{} ", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        write!(f, "--@matrix")
    }
}
