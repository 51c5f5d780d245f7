//! Compressed sparse column matrices.
//!
//! [`CscMatrix`] uses the usual three-array layout: `i` holds row indices,
//! `x` the matching values, and `p` has one entry per column plus one so
//! that column `j` occupies `i[p[j]..p[j + 1]]`. Within a column rows are
//! strictly increasing.
//!
//! [`SparseMatrixBuilder`] assembles a documents-by-vocabulary matrix from
//! per-document counts.
//!
//! # Examples
//!
//! ```
//! use textvec::matrix::SparseMatrixBuilder;
//! use textvec::vectorizer::DocumentVector;
//!
//! let documents: Vec<DocumentVector> = vec![
//!     [(0, 2)].into_iter().collect(),
//!     [(0, 1), (2, 4)].into_iter().collect(),
//! ];
//! let matrix = SparseMatrixBuilder::new(3).build(&documents);
//! assert_eq!(matrix.i, vec![0, 1, 1]);
//! assert_eq!(matrix.p, vec![0, 2, 2, 3]);
//! assert_eq!(matrix.x, vec![2, 1, 4]);
//! assert_eq!(matrix.get(1, 2), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextVecError};
use crate::vectorizer::sink::DocumentVector;

/// A sparse matrix in compressed sparse column form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CscMatrix {
    /// Row index of every stored value, column by column.
    pub i: Vec<usize>,
    /// Column start offsets into `i` and `x`; length `ncols + 1`.
    pub p: Vec<usize>,
    /// Stored values.
    pub x: Vec<u32>,
    /// `(rows, columns)`.
    pub dims: (usize, usize),
    /// Optional row names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_labels: Option<Vec<String>>,
    /// Optional column names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_labels: Option<Vec<String>>,
}

impl CscMatrix {
    /// An all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        CscMatrix {
            i: Vec::new(),
            p: vec![0; cols + 1],
            x: Vec::new(),
            dims: (rows, cols),
            row_labels: None,
            col_labels: None,
        }
    }

    pub fn nrows(&self) -> usize {
        self.dims.0
    }

    pub fn ncols(&self) -> usize {
        self.dims.1
    }

    /// Number of stored values.
    pub fn nnz(&self) -> usize {
        self.x.len()
    }

    /// `(row, value)` pairs of column `col`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let range = match (self.p.get(col), self.p.get(col + 1)) {
            (Some(&start), Some(&end))
                if start <= end && end <= self.x.len() && end <= self.i.len() =>
            {
                start..end
            }
            _ => 0..0,
        };
        self.i[range.clone()]
            .iter()
            .copied()
            .zip(self.x[range].iter().copied())
    }

    /// Value at `(row, col)`, zero when not stored.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.column(col)
            .find(|&(r, _)| r == row)
            .map_or(0, |(_, value)| value)
    }

    /// Row-major dense copy.
    pub fn to_dense(&self) -> Vec<Vec<u32>> {
        let mut dense = vec![vec![0; self.ncols()]; self.nrows()];
        for col in 0..self.ncols() {
            for (row, value) in self.column(col) {
                if let Some(cell) = dense.get_mut(row).and_then(|r| r.get_mut(col)) {
                    *cell = value;
                }
            }
        }
        dense
    }

    pub fn with_row_labels(mut self, labels: Vec<String>) -> Self {
        self.row_labels = Some(labels);
        self
    }

    pub fn with_col_labels(mut self, labels: Vec<String>) -> Self {
        self.col_labels = Some(labels);
        self
    }

    /// Check the structural invariants.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.dims;
        if self.p.len() != cols + 1 {
            return Err(TextVecError::invalid_argument(format!(
                "column pointer length {} does not match {cols} columns",
                self.p.len()
            )));
        }
        if self.p.first() != Some(&0) || self.p.last() != Some(&self.x.len()) {
            return Err(TextVecError::invalid_argument(
                "column pointers must start at 0 and end at nnz",
            ));
        }
        if self.i.len() != self.x.len() {
            return Err(TextVecError::invalid_argument(format!(
                "{} row indices for {} values",
                self.i.len(),
                self.x.len()
            )));
        }
        for col in 0..cols {
            let (start, end) = (self.p[col], self.p[col + 1]);
            if start > end {
                return Err(TextVecError::invalid_argument(format!(
                    "column pointers decrease at column {col}"
                )));
            }
            let rows_in_col = &self.i[start..end];
            if rows_in_col.iter().any(|&row| row >= rows) {
                return Err(TextVecError::invalid_argument(format!(
                    "row index out of range in column {col}"
                )));
            }
            if rows_in_col.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(TextVecError::invalid_argument(format!(
                    "row indices not strictly increasing in column {col}"
                )));
            }
        }
        if let Some(labels) = &self.row_labels
            && labels.len() != rows
        {
            return Err(TextVecError::invalid_argument("row label count mismatch"));
        }
        if let Some(labels) = &self.col_labels
            && labels.len() != cols
        {
            return Err(TextVecError::invalid_argument("column label count mismatch"));
        }
        Ok(())
    }
}

/// Builds documents-by-vocabulary count matrices.
#[derive(Debug, Clone, Copy)]
pub struct SparseMatrixBuilder {
    n_cols: usize,
}

impl SparseMatrixBuilder {
    /// A builder for matrices with `n_cols` columns.
    pub fn new(n_cols: usize) -> Self {
        SparseMatrixBuilder { n_cols }
    }

    /// One row per document, one column per vocabulary entry.
    ///
    /// Entries are ordered by the key `column * rows + row`, which sorts
    /// column-major with rows increasing inside each column.
    pub fn build(&self, documents: &[DocumentVector]) -> CscMatrix {
        let n_rows = documents.len();
        let n_elem: usize = documents.iter().map(DocumentVector::len).sum();

        let mut entries: Vec<(usize, usize, u32)> = Vec::with_capacity(n_elem);
        for (row, document) in documents.iter().enumerate() {
            for (col, count) in document.iter() {
                debug_assert!(col < self.n_cols, "column {col} out of range");
                if col < self.n_cols && count > 0 {
                    entries.push((row, col, count));
                }
            }
        }
        entries.sort_unstable_by_key(|&(row, col, _)| col * n_rows + row);

        let mut i = Vec::with_capacity(entries.len());
        let mut x = Vec::with_capacity(entries.len());
        let mut p = vec![0usize; self.n_cols + 1];
        for (row, col, count) in entries {
            i.push(row);
            x.push(count);
            p[col + 1] += 1;
        }
        for col in 1..=self.n_cols {
            p[col] += p[col - 1];
        }

        CscMatrix {
            i,
            p,
            x,
            dims: (n_rows, self.n_cols),
            row_labels: None,
            col_labels: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(pairs: &[(usize, u32)]) -> DocumentVector {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_build_orders_column_major() {
        let documents = vec![
            document(&[(2, 1), (0, 3)]),
            document(&[]),
            document(&[(0, 1), (1, 5)]),
        ];
        let matrix = SparseMatrixBuilder::new(3).build(&documents);

        assert_eq!(matrix.dims, (3, 3));
        assert_eq!(matrix.i, vec![0, 2, 2, 0]);
        assert_eq!(matrix.p, vec![0, 2, 3, 4]);
        assert_eq!(matrix.x, vec![3, 1, 5, 1]);
        assert!(matrix.validate().is_ok());
        assert_eq!(
            matrix.to_dense(),
            vec![vec![3, 0, 1], vec![0, 0, 0], vec![1, 5, 0]]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let matrix = SparseMatrixBuilder::new(0).build(&[]);
        assert_eq!(matrix.p, vec![0]);
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.validate().is_ok());

        let matrix = SparseMatrixBuilder::new(2).build(&[DocumentVector::new()]);
        assert_eq!(matrix, CscMatrix::zeros(1, 2));
    }

    #[test]
    fn test_validate_rejects_bad_structure() {
        let mut matrix = CscMatrix::zeros(2, 2);
        matrix.p = vec![0, 1];
        assert!(matrix.validate().is_err());

        let matrix = CscMatrix {
            i: vec![1, 0],
            p: vec![0, 2],
            x: vec![1, 1],
            dims: (2, 1),
            row_labels: None,
            col_labels: None,
        };
        assert!(matrix.validate().is_err());

        let labelled = CscMatrix::zeros(1, 2).with_col_labels(vec!["a".into()]);
        assert!(labelled.validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let matrix = SparseMatrixBuilder::new(1)
            .build(&[document(&[(0, 2)])])
            .with_col_labels(vec!["term".into()]);
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json["x"], serde_json::json!([2]));
        assert_eq!(json["dims"], serde_json::json!([1, 1]));
        assert_eq!(json["col_labels"], serde_json::json!(["term"]));
        assert!(json.get("row_labels").is_none());
    }
}
