//! Sparse matrix output.

pub mod csc;

pub use csc::{CscMatrix, SparseMatrixBuilder};
