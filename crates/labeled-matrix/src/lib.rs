//! labeled-matrix: a labeled two-axis table for data-preparation pipelines.
//!
//! The crate centers on [`Matrix`], a rectangular table of values with
//! optional row and column labels. On top of storage it provides slicing
//! (`submatrix`, `transpose`), row partitioning of the kind a decision-tree
//! learner needs (threshold and regression splits, discrete splits,
//! class-balanced subsets), random sampling, merging and sorting, plus a
//! delimited text reader/writer.
//!
//! Randomized operations take an explicit `rand::Rng`, so seeded runs are
//! reproducible.
pub mod config;
pub mod error;
pub mod io;
pub mod matrix;

pub use config::{DelimitedFormat, Delimiter};
pub use error::{Axis, MatrixError, Result};
pub use matrix::Matrix;
