//! Raw tables as delivered by a [`TableExtractor`](crate::extract::TableExtractor).

use crate::record::LogicalRecord;

/// A grid of text cells detected on one page region.
///
/// Cells hold the text exactly as extracted; a missing cell is an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// 1-based page number the table was found on
    pub page: usize,
    /// Rows of cells, top to bottom
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from its page number and rows.
    pub fn new(page: usize, rows: Vec<Vec<String>>) -> Self {
        Self { page, rows }
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn num_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row, if any.
    pub fn header_row(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the first `skip`, empty when the table is shorter.
    pub fn body(&self, skip: usize) -> &[Vec<String>] {
        self.rows.get(skip..).unwrap_or(&[])
    }
}

/// Records reconstructed from one [`RawTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconstructedTable {
    /// 1-based page number of the source table
    pub page: usize,
    /// Records in source row order
    pub records: Vec<LogicalRecord>,
}

impl ReconstructedTable {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether reconstruction produced no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Check whether a cell has no meaningful text.
#[inline]
pub fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n).map(|i| vec![format!("r{}", i)]).collect()
    }

    #[test]
    fn test_body_skips_rows() {
        let table = RawTable::new(2, rows(8));
        let body = table.body(6);
        assert_eq!(body.len(), 2);
        assert_eq!(body[0][0], "r6");
    }

    #[test]
    fn test_body_of_short_table_is_empty() {
        let table = RawTable::new(2, rows(4));
        assert!(table.body(6).is_empty());
    }

    #[test]
    fn test_num_cols_uses_widest_row() {
        let table = RawTable::new(
            2,
            vec![vec!["a".to_string()], vec!["a".to_string(), "b".to_string()]],
        );
        assert_eq!(table.num_cols(), 2);
        assert_eq!(table.num_rows(), 2);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" 31 "));
    }
}
