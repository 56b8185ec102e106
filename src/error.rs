//! Error types for the vida laboral converter.
//!
//! This module defines all error types that can occur while extracting,
//! reconstructing and serializing employment-history tables.

use std::path::PathBuf;

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input path does not name a PDF document
    #[error("Invalid input path '{}': expected a .pdf file", .0.display())]
    InvalidInputPath(PathBuf),

    /// Input file does not exist
    #[error("{} does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// Page range text could not be parsed
    #[error("Invalid page range '{0}'")]
    InvalidPageRange(String),

    /// Requested page lies outside the document
    #[error("Page {page} out of bounds (document has {page_count} pages)")]
    PageOutOfBounds {
        /// 1-based page number that was requested
        page: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// A table row does not have the expected number of cells
    #[error("Page {page}, row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        /// 1-based page the table came from
        page: usize,
        /// 0-based row index within the table
        row: usize,
        /// Number of columns the record layout requires
        expected: usize,
        /// Number of cells the row actually has
        found: usize,
    },

    /// The PDF backend failed to open or read the document
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_oxide::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_error() {
        let err = Error::ColumnCount {
            page: 3,
            row: 7,
            expected: 10,
            found: 9,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Page 3"));
        assert!(msg.contains("row 7"));
        assert!(msg.contains("expected 10"));
        assert!(msg.contains("found 9"));
    }

    #[test]
    fn test_page_out_of_bounds_error() {
        let err = Error::PageOutOfBounds {
            page: 12,
            page_count: 4,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Page 12"));
        assert!(msg.contains("4 pages"));
    }

    #[test]
    fn test_input_not_found_error() {
        let err = Error::InputNotFound(PathBuf::from("informe.pdf"));
        assert_eq!(format!("{}", err), "informe.pdf does not exist");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
