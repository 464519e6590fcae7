use crate::config::Config;
use crate::error::{MatrixError, Result};
use crate::kernel;

/// A dense, rectangular matrix of `f64` elements.
///
/// The shape is fixed at construction and both dimensions are at least 1.
/// Elements live in a single owned row-major buffer: element `(r, c)` sits
/// at index `r * cols + c`. Contents stay mutable through [`Matrix::set`].
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    elems: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix with the given shape.
    ///
    /// # Errors
    /// Returns `EmptyShape` if either dimension is 0.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        if rows < 1 || cols < 1 {
            return Err(MatrixError::EmptyShape { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            elems: vec![0.0; rows * cols],
        })
    }

    /// Create a matrix by copying a rectangular array of rows.
    ///
    /// Every element is copied into a freshly owned buffer; no aliasing
    /// with the source is retained.
    ///
    /// # Errors
    /// - `AbsentInput` if `rows` is `None`.
    /// - `EmptyShape` if the outer array or the first row is empty.
    /// - `IncompatibleShape` if any row differs in length from the first.
    pub fn from_rows(rows: Option<&[Vec<f64>]>) -> Result<Matrix> {
        let rows = rows.ok_or(MatrixError::AbsentInput("rows"))?;
        let row_count = rows.len();
        let col_count = rows.first().map(Vec::len).unwrap_or(0);
        if row_count < 1 || col_count < 1 {
            return Err(MatrixError::EmptyShape {
                rows: row_count,
                cols: col_count,
            });
        }
        for row in rows {
            if row.len() != col_count {
                return Err(MatrixError::IncompatibleShape {
                    what: "row length",
                    expected: col_count,
                    got: row.len(),
                });
            }
        }

        let mut matrix = Matrix::zeros(row_count, col_count)?;
        for (i, row) in rows.iter().enumerate() {
            matrix.elems[i * col_count..(i + 1) * col_count].copy_from_slice(row);
        }
        Ok(matrix)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.elems
    }

    /// Read the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if either index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_range(row, col)?;
        Ok(self.elems[row * self.cols + col])
    }

    /// Write the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if either index is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_range(row, col)?;
        self.elems[row * self.cols + col] = value;
        Ok(())
    }

    /// Multiply by `other`, returning the product as a new matrix.
    ///
    /// Equivalent to [`Matrix::multiply_with`] under a default [`Config`].
    pub fn multiply(&self, other: Option<&Matrix>) -> Result<Matrix> {
        self.multiply_with(other, &Config::default())
    }

    /// Multiply by `other` under an explicit configuration.
    ///
    /// The product has shape `(self.rows, other.cols)` and is computed by
    /// the [`kernel`]; neither operand is modified.
    ///
    /// # Errors
    /// - `AbsentInput` if `other` is `None`.
    /// - `IncompatibleShape` if `self.cols() != other.rows()`.
    pub fn multiply_with(&self, other: Option<&Matrix>, config: &Config) -> Result<Matrix> {
        let other = other.ok_or(MatrixError::AbsentInput("other"))?;
        if self.cols != other.rows {
            return Err(MatrixError::IncompatibleShape {
                what: "inner dimensions",
                expected: self.cols,
                got: other.rows,
            });
        }

        let mut result = Matrix::zeros(self.rows, other.cols)?;
        kernel::multiply(
            self.rows,
            self.cols,
            Some(&self.elems),
            other.rows,
            other.cols,
            Some(&other.elems),
            Some(&mut result.elems),
            config,
        )?;
        Ok(result)
    }

    // Indices are unsigned, so one comparison per axis rejects both the
    // wrapped-negative and the too-large direction.
    fn check_range(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::OutOfRange {
                axis: "row",
                index: row,
                extent: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatrixError::OutOfRange {
                axis: "column",
                index: col,
                extent: self.cols,
            });
        }
        Ok(())
    }
}
