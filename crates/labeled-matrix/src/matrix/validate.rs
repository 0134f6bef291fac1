use std::collections::HashSet;

use super::Matrix;
use crate::error::{Axis, MatrixError, Result};

/// First label that occurs more than once, if any.
pub(crate) fn find_duplicate(labels: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(labels.len());
    labels
        .iter()
        .find(|label| !seen.insert(label.as_str()))
        .map(String::as_str)
}

impl<T> Matrix<T> {
    /// Confirm the matrix is fully labeled and, unless `duplicates_allowed`,
    /// that no label repeats on either axis. Performs no mutation.
    ///
    /// Meant to be called after a run of in-place merges.
    pub fn validate(&self, duplicates_allowed: bool) -> Result<()> {
        if self.column_labels.len() != self.cols {
            log::warn!(
                "validation failed: {} column labels for {} columns",
                self.column_labels.len(),
                self.cols
            );
            return Err(MatrixError::DimensionMismatch(format!(
                "{} column labels for {} columns",
                self.column_labels.len(),
                self.cols
            )));
        }
        if self.row_labels.len() != self.rows {
            log::warn!(
                "validation failed: {} row labels for {} rows",
                self.row_labels.len(),
                self.rows
            );
            return Err(MatrixError::DimensionMismatch(format!(
                "number of row labels ({}) does not match number of rows ({})",
                self.row_labels.len(),
                self.rows
            )));
        }
        debug_assert_eq!(self.data.len(), self.rows * self.cols);

        if !duplicates_allowed {
            if let Some(label) = find_duplicate(&self.row_labels) {
                log::warn!("validation failed: duplicate row label '{}'", label);
                return Err(MatrixError::DuplicateLabel {
                    axis: Axis::Row,
                    label: label.to_string(),
                });
            }
            if let Some(label) = find_duplicate(&self.column_labels) {
                log::warn!("validation failed: duplicate column label '{}'", label);
                return Err(MatrixError::DuplicateLabel {
                    axis: Axis::Column,
                    label: label.to_string(),
                });
            }
        }
        Ok(())
    }
}
