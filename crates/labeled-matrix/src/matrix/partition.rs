//! Row partitioning and random sampling.
//!
//! Every operation here is pure: the source matrix is left untouched and the
//! results are gathered the same way `submatrix` gathers rows, so row and
//! column labels always travel with their rows. Randomized operations take
//! the random source as an argument; seed a `rand::rngs::StdRng` for
//! reproducible output.
use std::ops::Mul;

use rand::seq::SliceRandom;
use rand::Rng;

use super::Matrix;
use crate::error::{MatrixError, Result};

impl<T: Clone> Matrix<T> {
    fn partition_rows<F>(&self, column: usize, mut goes_left: F) -> Result<(Matrix<T>, Matrix<T>)>
    where
        F: FnMut(&T) -> bool,
    {
        self.check_column_index(column)?;
        let (left, right): (Vec<usize>, Vec<usize>) =
            (0..self.rows).partition(|&r| goes_left(&self[(r, column)]));
        let all_columns = self.all_columns();
        Ok((
            self.gather(&left, &all_columns),
            self.gather(&right, &all_columns),
        ))
    }

    /// Split on a threshold: rows with `row[column] < value` go left, all
    /// others go right. Row order is preserved on both sides.
    pub fn split(&self, column: usize, value: &T) -> Result<(Matrix<T>, Matrix<T>)>
    where
        T: PartialOrd,
    {
        self.partition_rows(column, |v| v < value)
    }

    /// Split on a regression cutoff: rows with `row[column] * slope < intercept`
    /// go left, all others go right.
    pub fn split_regression(
        &self,
        column: usize,
        slope: T,
        intercept: T,
    ) -> Result<(Matrix<T>, Matrix<T>)>
    where
        T: PartialOrd + Mul<Output = T>,
    {
        self.partition_rows(column, |v| v.clone() * slope.clone() < intercept)
    }

    /// All rows where `row[column] == value`, in their original order.
    pub fn extract(&self, column: usize, value: &T) -> Result<Matrix<T>>
    where
        T: PartialEq,
    {
        self.check_column_index(column)?;
        let rows: Vec<usize> = (0..self.rows)
            .filter(|&r| self[(r, column)] == *value)
            .collect();
        Ok(self.gather(&rows, &self.all_columns()))
    }

    /// One matrix per distinct value of `column`.
    ///
    /// Groups come out in the order their value first appears. A value that
    /// does not compare equal to itself (a float NaN) forms a group of one row.
    pub fn discrete_split(&self, column: usize) -> Result<Vec<Matrix<T>>>
    where
        T: PartialEq,
    {
        self.check_column_index(column)?;
        let mut groups: Vec<(T, Vec<usize>)> = Vec::new();
        for r in 0..self.rows {
            let value = &self[(r, column)];
            match groups.iter_mut().find(|(key, _)| key == value) {
                Some((_, rows)) => rows.push(r),
                None => groups.push((value.clone(), vec![r])),
            }
        }

        log::debug!(
            "discrete split on column {} produced {} groups",
            column,
            groups.len()
        );

        let all_columns = self.all_columns();
        Ok(groups
            .iter()
            .map(|(_, rows)| self.gather(rows, &all_columns))
            .collect())
    }

    /// Class-balanced sample: draw `n_samples_per_subset` rows without
    /// replacement from every distinct-value group of `column` and stack them.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` when `column` has fewer than two distinct values
    /// or any group holds fewer than `n_samples_per_subset` rows. Both are
    /// checked before any sampling takes place.
    pub fn class_subset<R>(
        &self,
        column: usize,
        n_samples_per_subset: usize,
        rng: &mut R,
    ) -> Result<Matrix<T>>
    where
        T: PartialEq,
        R: Rng + ?Sized,
    {
        let groups = self.discrete_split(column)?;
        if groups.len() < 2 {
            return Err(MatrixError::PreconditionViolation(format!(
                "class subset needs at least 2 groups in column {}, found {}",
                column,
                groups.len()
            )));
        }
        if let Some(small) = groups
            .iter()
            .find(|g| g.row_count() < n_samples_per_subset)
        {
            return Err(MatrixError::PreconditionViolation(format!(
                "group with {} rows cannot supply {} samples",
                small.row_count(),
                n_samples_per_subset
            )));
        }

        let mut result: Matrix<T> = Matrix::new();
        for group in &groups {
            let sample = group.random_subset(n_samples_per_subset, rng)?;
            result.merge_vertical(&sample)?;
        }
        log::debug!(
            "class subset drew {} rows from each of {} groups",
            n_samples_per_subset,
            groups.len()
        );
        Ok(result)
    }

    fn shuffled_row_indices<R>(&self, rng: &mut R) -> Vec<usize>
    where
        R: Rng + ?Sized,
    {
        let mut indices = self.all_rows();
        indices.shuffle(rng);
        indices
    }

    /// Rows in a uniformly random order.
    pub fn shuffled<R>(&self, rng: &mut R) -> Matrix<T>
    where
        R: Rng + ?Sized,
    {
        let rows = self.shuffled_row_indices(rng);
        self.gather(&rows, &self.all_columns())
    }

    /// `n` distinct rows chosen at random.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `n` exceeds the row count.
    pub fn random_subset<R>(&self, n: usize, rng: &mut R) -> Result<Matrix<T>>
    where
        R: Rng + ?Sized,
    {
        if n > self.rows {
            return Err(MatrixError::PreconditionViolation(format!(
                "cannot sample {} rows from a matrix with {} rows",
                n, self.rows
            )));
        }
        let mut rows = self.shuffled_row_indices(rng);
        rows.truncate(n);
        Ok(self.gather(&rows, &self.all_columns()))
    }

    /// Split the rows at random into two disjoint halves. The first half holds
    /// `row_count / 2` rows, the second the remainder.
    pub fn random_split<R>(&self, rng: &mut R) -> (Matrix<T>, Matrix<T>)
    where
        R: Rng + ?Sized,
    {
        let rows = self.shuffled_row_indices(rng);
        let (a_rows, b_rows) = rows.split_at(self.rows / 2);
        let all_columns = self.all_columns();
        let a = self.gather(a_rows, &all_columns);
        let b = self.gather(b_rows, &all_columns);
        debug_assert_eq!(a.row_count() + b.row_count(), self.rows);
        (a, b)
    }
}
