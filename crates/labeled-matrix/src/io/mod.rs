//! Reading and writing matrices as delimited text.

pub mod delimited;

pub use delimited::{read_matrix, write_matrix};
