use std::ops::{Bound, RangeBounds};

use super::Matrix;
use crate::error::{Axis, MatrixError, Result};

impl<T: Clone> Matrix<T> {
    /// Build a new matrix from an ordered selection of rows and columns.
    ///
    /// Order matters: row `k` of the result is source row `rows[k]`, restricted
    /// to `columns` in the given order. Indices may repeat or be omitted. Labels
    /// on either axis follow the selection.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if any index falls outside the source.
    pub fn submatrix(&self, rows: &[usize], columns: &[usize]) -> Result<Matrix<T>> {
        for &r in rows {
            self.check_row_index(r)?;
        }
        for &c in columns {
            self.check_column_index(c)?;
        }

        Ok(self.gather(rows, columns))
    }

    /// `submatrix` without the bounds check, for indices produced internally.
    pub(crate) fn gather(&self, rows: &[usize], columns: &[usize]) -> Matrix<T> {
        let mut data = Vec::with_capacity(rows.len() * columns.len());
        for &r in rows {
            let source = self.row(r);
            data.extend(columns.iter().map(|&c| source[c].clone()));
        }

        let row_labels = if self.has_row_labels() {
            rows.iter().map(|&r| self.row_labels[r].clone()).collect()
        } else {
            Vec::new()
        };
        let column_labels = if self.has_column_labels() {
            columns
                .iter()
                .map(|&c| self.column_labels[c].clone())
                .collect()
        } else {
            Vec::new()
        };

        Matrix {
            data,
            rows: rows.len(),
            cols: columns.len(),
            row_labels,
            column_labels,
        }
    }

    /// Rows `indices` with every column.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Matrix<T>> {
        self.submatrix(indices, &self.all_columns())
    }

    /// A contiguous range of columns with every row.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the range reaches past the last column or starts
    /// after it ends.
    pub fn select_columns<R>(&self, range: R) -> Result<Matrix<T>>
    where
        R: RangeBounds<usize>,
    {
        let out_of_range = |index: usize| MatrixError::IndexOutOfRange {
            axis: Axis::Column,
            index,
            len: self.cols,
        };

        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1).ok_or_else(|| out_of_range(s))?,
        };

        let end = match range.end_bound() {
            Bound::Unbounded => self.cols,
            Bound::Included(&e) => e.checked_add(1).ok_or_else(|| out_of_range(e))?,
            Bound::Excluded(&e) => e,
        };

        if end > self.cols {
            return Err(out_of_range(end - 1));
        }
        if start > end {
            return Err(out_of_range(start));
        }
        let columns: Vec<usize> = (start..end).collect();
        self.submatrix(&self.all_rows(), &columns)
    }

    /// Independent copy of this matrix, labels included.
    pub fn copy(&self) -> Matrix<T> {
        Matrix {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
            row_labels: self.row_labels.clone(),
            column_labels: self.column_labels.clone(),
        }
    }

    /// Swap rows and columns. Row labels become column labels and vice versa.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self[(r, c)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
            row_labels: self.column_labels.clone(),
            column_labels: self.row_labels.clone(),
        }
    }
}
