//! Horizontal and vertical merging.
//!
//! `merge` and `merge_vertical` mutate the receiver; `simple_merge` returns a
//! new matrix. Every precondition is checked before the receiver is touched.
use std::collections::HashMap;

use super::validate::find_duplicate;
use super::Matrix;
use crate::error::{Axis, MatrixError, Result};

impl<T: Clone> Matrix<T> {
    /// Column labels of `self` followed by those of `other`.
    ///
    /// A side without columns contributes nothing. Otherwise both sides must
    /// agree on whether their columns are labeled.
    fn joined_column_labels(&self, other: &Matrix<T>) -> Result<Vec<String>> {
        if other.cols == 0 {
            return Ok(self.column_labels.clone());
        }
        if self.cols == 0 {
            return Ok(other.column_labels.clone());
        }
        match (self.has_column_labels(), other.has_column_labels()) {
            (true, true) => {
                let mut labels = self.column_labels.clone();
                labels.extend(other.column_labels.iter().cloned());
                Ok(labels)
            }
            (false, false) => Ok(Vec::new()),
            _ => Err(MatrixError::DimensionMismatch(
                "cannot join labeled and unlabeled columns".to_string(),
            )),
        }
    }

    /// Append the columns of `other` to the rows of `self`, matching rows by
    /// label. Mutates `self`.
    ///
    /// Both matrices need unique row labels, and both must label the same
    /// set of rows: every label of `other` must exist in `self` and every row
    /// of `self` must receive values.
    ///
    /// # Errors
    ///
    /// * `PreconditionViolation` if a non-empty side carries no row labels.
    /// * `DuplicateLabel` if either side repeats a row label.
    /// * `DimensionMismatch` if only one side labels its columns.
    /// * `LabelNotFound` for the first label that has no partner.
    pub fn merge(&mut self, other: &Matrix<T>) -> Result<()> {
        if (self.rows > 0 && !self.has_row_labels()) || (other.rows > 0 && !other.has_row_labels())
        {
            return Err(MatrixError::PreconditionViolation(
                "label-keyed merge requires row labels on both matrices".to_string(),
            ));
        }
        for labels in [&self.row_labels, &other.row_labels] {
            if let Some(label) = find_duplicate(labels) {
                return Err(MatrixError::DuplicateLabel {
                    axis: Axis::Row,
                    label: label.to_string(),
                });
            }
        }
        let column_labels = self.joined_column_labels(other)?;

        let own_index: HashMap<&str, usize> = self
            .row_labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();
        let mut partner: Vec<Option<usize>> = vec![None; self.rows];
        for (j, label) in other.row_labels.iter().enumerate() {
            let i = own_index
                .get(label.as_str())
                .ok_or_else(|| MatrixError::LabelNotFound(label.clone()))?;
            partner[*i] = Some(j);
        }
        if let Some(missing) = partner.iter().position(Option::is_none) {
            return Err(MatrixError::LabelNotFound(self.row_labels[missing].clone()));
        }

        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for (i, j) in partner.into_iter().flatten().enumerate() {
            data.extend_from_slice(self.row(i));
            data.extend_from_slice(other.row(j));
        }

        log::debug!(
            "merged {} columns into {} labeled rows",
            other.cols,
            self.rows
        );
        self.data = data;
        self.cols = cols;
        self.column_labels = column_labels;
        Ok(())
    }

    /// Positional horizontal merge: row `i` of the result is row `i` of `self`
    /// followed by row `i` of `other`. Row labels come from `self`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the row counts differ or only one side labels
    /// its columns.
    pub fn simple_merge(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.rows != other.rows {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot merge {} rows with {} rows",
                self.rows, other.rows
            )));
        }
        let column_labels = self.joined_column_labels(other)?;

        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            data.extend_from_slice(self.row(r));
            data.extend_from_slice(other.row(r));
        }

        Ok(Matrix {
            data,
            rows: self.rows,
            cols,
            row_labels: self.row_labels.clone(),
            column_labels,
        })
    }

    /// Append the rows of `other` below the rows of `self`. Mutates `self`.
    ///
    /// An empty receiver takes over the width, column labels and rows of
    /// `other`. Column labels of a non-empty receiver are kept as they are;
    /// reconciling them is up to the caller.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the widths differ, or if only one of two
    /// non-empty matrices carries row labels.
    pub fn merge_vertical(&mut self, other: &Matrix<T>) -> Result<()> {
        if self.rows == 0 {
            if self.cols != other.cols || !self.has_column_labels() {
                self.column_labels = other.column_labels.clone();
            }
            self.data = other.data.clone();
            self.rows = other.rows;
            self.cols = other.cols;
            self.row_labels = other.row_labels.clone();
            return Ok(());
        }
        if other.rows == 0 {
            return Ok(());
        }
        if self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot stack {} columns under {} columns",
                other.cols, self.cols
            )));
        }
        if self.has_row_labels() != other.has_row_labels() {
            return Err(MatrixError::DimensionMismatch(
                "cannot stack labeled and unlabeled rows".to_string(),
            ));
        }

        self.data.extend_from_slice(&other.data);
        self.row_labels.extend(other.row_labels.iter().cloned());
        self.rows += other.rows;
        log::debug!("appended {} rows, now {} rows", other.rows, self.rows);
        Ok(())
    }
}
