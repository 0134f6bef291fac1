//! The labeled `Matrix` container.
//!
//! Elements live in one row-major buffer, so every matrix is rectangular by
//! construction. Row labels and column labels are two independent axes: each
//! is either empty or holds exactly one label per row (column). The header
//! cell above the row-label column only exists in the serialized form, see
//! `crate::config::DelimitedFormat::corner_label`.
//!
//! Operations fall into two families:
//! * pure (`&self`, return a new `Matrix`): slicing, partitioning, sorting,
//!   sampling, `simple_merge`.
//! * in-place (`&mut self`): `merge`, `merge_vertical`, label setters and
//!   `load_into`. They validate first and only then mutate.
pub mod merge;
pub mod partition;
pub mod slicing;
pub mod sort;
pub mod validate;

use std::ops::{Index, IndexMut};

use crate::error::{Axis, MatrixError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    row_labels: Vec<String>,
    column_labels: Vec<String>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix<T> {
    /// An empty 0x0 matrix without labels.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
            row_labels: Vec::new(),
            column_labels: Vec::new(),
        }
    }

    /// # Panics
    ///
    /// If `rows * cols` overflows `usize`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        let len = rows
            .checked_mul(cols)
            .expect("matrix element count overflows usize");
        Self {
            data: vec![value; len],
            rows,
            cols,
            row_labels: Vec::new(),
            column_labels: Vec::new(),
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::filled(rows, cols, T::default())
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::DimensionMismatch(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self {
            data,
            rows,
            cols,
            row_labels: Vec::new(),
            column_labels: Vec::new(),
        })
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch(format!(
                    "row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols,
            row_labels: Vec::new(),
            column_labels: Vec::new(),
        })
    }

    pub fn with_row_labels<S: Into<String>>(mut self, labels: Vec<S>) -> Result<Self> {
        self.set_row_labels(labels)?;
        Ok(self)
    }

    pub fn with_column_labels<S: Into<String>>(mut self, labels: Vec<S>) -> Result<Self> {
        self.set_column_labels(labels)?;
        Ok(self)
    }

    /// Replace the row labels. An empty vector removes them.
    pub fn set_row_labels<S: Into<String>>(&mut self, labels: Vec<S>) -> Result<()> {
        if !labels.is_empty() && labels.len() != self.rows {
            return Err(MatrixError::DimensionMismatch(format!(
                "{} row labels for {} rows",
                labels.len(),
                self.rows
            )));
        }
        self.row_labels = labels.into_iter().map(Into::into).collect();
        Ok(())
    }

    /// Replace the column labels. An empty vector removes them.
    pub fn set_column_labels<S: Into<String>>(&mut self, labels: Vec<S>) -> Result<()> {
        if !labels.is_empty() && labels.len() != self.cols {
            return Err(MatrixError::DimensionMismatch(format!(
                "{} column labels for {} columns",
                labels.len(),
                self.cols
            )));
        }
        self.column_labels = labels.into_iter().map(Into::into).collect();
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of data columns. Defined for zero-row matrices as well, where it
    /// reports the width the matrix was created with.
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    pub fn has_row_labels(&self) -> bool {
        !self.row_labels.is_empty()
    }

    pub fn has_column_labels(&self) -> bool {
        !self.column_labels.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Borrow row `row`. Panics when out of range.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Value at `(row, col)`. Panics when out of range.
    pub fn element_at(&self, row: usize, col: usize) -> &T {
        &self[(row, col)]
    }

    /// Values of column `col`, one per row.
    pub fn column(&self, col: usize) -> Vec<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        let mut values = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            values.push(self[(row, col)].clone());
        }
        values
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.column_labels
            .iter()
            .position(|label| label == name)
            .ok_or_else(|| MatrixError::LabelNotFound(name.to_string()))
    }

    /// Values of the first column labeled `name`.
    pub fn column_by_name(&self, name: &str) -> Result<Vec<T>>
    where
        T: Clone,
    {
        let index = self.column_index(name)?;
        Ok(self.column(index))
    }

    pub fn row_index(&self, label: &str) -> Result<usize> {
        self.row_labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| MatrixError::LabelNotFound(label.to_string()))
    }

    /// Borrow the first row labeled `label`.
    pub fn row_by_label(&self, label: &str) -> Result<&[T]> {
        let index = self.row_index(label)?;
        Ok(self.row(index))
    }

    /// All values in row-major order.
    pub fn flatten(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
            row_labels: self.row_labels.clone(),
            column_labels: self.column_labels.clone(),
        }
    }

    pub(crate) fn check_row_index(&self, index: usize) -> Result<()> {
        if index >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index,
                len: self.rows,
            });
        }
        Ok(())
    }

    pub(crate) fn check_column_index(&self, index: usize) -> Result<()> {
        if index >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                index,
                len: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn all_rows(&self) -> Vec<usize> {
        (0..self.rows).collect()
    }

    pub(crate) fn all_columns(&self) -> Vec<usize> {
        (0..self.cols).collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
