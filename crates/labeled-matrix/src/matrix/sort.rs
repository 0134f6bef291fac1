use std::cmp::Ordering;

use super::Matrix;
use crate::error::{MatrixError, Result};

/// Ascending order that places values incomparable with themselves (NaN) last.
fn ascending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    let a_nan = a.partial_cmp(a).is_none();
    let b_nan = b.partial_cmp(b).is_none();
    match (a_nan, b_nan) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

impl<T: Clone> Matrix<T> {
    /// Rows sorted ascending by the value in `column`. The sort is stable, so
    /// rows with equal values keep their original order.
    pub fn sorted(&self, column: usize) -> Result<Matrix<T>>
    where
        T: PartialOrd,
    {
        self.check_column_index(column)?;
        let mut rows = self.all_rows();
        rows.sort_by(|&a, &b| ascending(&self[(a, column)], &self[(b, column)]));
        Ok(self.gather(&rows, &self.all_columns()))
    }

    /// Rows sorted lexicographically by row label, stable on ties.
    pub fn sorted_row_labels(&self) -> Result<Matrix<T>> {
        if self.rows > 0 && !self.has_row_labels() {
            return Err(MatrixError::PreconditionViolation(
                "cannot sort by row labels on an unlabeled matrix".to_string(),
            ));
        }
        let mut rows = self.all_rows();
        rows.sort_by(|&a, &b| self.row_labels[a].cmp(&self.row_labels[b]));
        Ok(self.gather(&rows, &self.all_columns()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_sorts_after_numbers() {
        let mut values = vec![2.0, f64::NAN, -1.0, 0.5];
        values.sort_by(ascending);
        assert_eq!(&values[..3], &[-1.0, 0.5, 2.0]);
        assert!(values[3].is_nan());
    }
}
