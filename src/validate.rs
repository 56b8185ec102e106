//! Recognition of employment-history tables.
//!
//! Pages of the report also carry tables that are not part of the history
//! (page banners, personal data boxes). The history table is the one whose
//! first row includes the "SITUACIÓN/ES" title.

use lazy_static::lazy_static;
use regex::Regex;

use crate::table::{is_blank, RawTable};

/// Marker phrase that identifies an employment-history table.
pub const TABLE_MARKER: &str = "SITUACIÓN/ES";

lazy_static! {
    /// Whole-word, case-insensitive match for [`TABLE_MARKER`]
    static ref RE_TABLE_MARKER: Regex = marker_regex(TABLE_MARKER).unwrap();
}

/// Build a whole-word, case-insensitive regex for a marker phrase.
pub fn marker_regex(marker: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(marker)))
}

/// Join the trimmed, non-blank cells of a row with single spaces.
pub fn row_text(row: &[String]) -> String {
    row.iter()
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether a table is an employment-history table.
///
/// Only the first row is inspected. Empty tables are rejected.
///
/// # Examples
///
/// ```
/// use vida_laboral::table::RawTable;
/// use vida_laboral::validate::is_history_table;
///
/// let header = vec!["".to_string(), "SITUACIÓN/ES".to_string(), "ALTA".to_string()];
/// assert!(is_history_table(&RawTable::new(2, vec![header])));
///
/// let other = vec!["FECHA".to_string(), "ALTA".to_string()];
/// assert!(!is_history_table(&RawTable::new(2, vec![other])));
/// ```
pub fn is_history_table(table: &RawTable) -> bool {
    matches_marker(table, &RE_TABLE_MARKER)
}

/// Check a table's first row against an arbitrary marker regex.
pub fn matches_marker(table: &RawTable, marker: &Regex) -> bool {
    match table.header_row() {
        Some(row) if !row.iter().all(|cell| is_blank(cell)) => marker.is_match(&row_text(row)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(first_row: &[&str]) -> RawTable {
        RawTable::new(2, vec![first_row.iter().map(|c| c.to_string()).collect()])
    }

    #[test]
    fn test_accepts_marker_cell() {
        assert!(is_history_table(&table(&["", "SITUACIÓN/ES", "ALTA"])));
    }

    #[test]
    fn test_rejects_other_header() {
        assert!(!is_history_table(&table(&["FECHA", "ALTA"])));
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(!is_history_table(&RawTable::default()));
    }

    #[test]
    fn test_rejects_blank_first_row() {
        assert!(!is_history_table(&table(&["", "  "])));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_history_table(&table(&["situación/es de alta"])));
    }

    #[test]
    fn test_marker_inside_sentence() {
        assert!(is_history_table(&table(&["RELACIÓN DE", "SITUACIÓN/ES", "DEL TRABAJADOR"])));
    }

    #[test]
    fn test_requires_whole_word() {
        assert!(!is_history_table(&table(&["SITUACIÓN/ESTADO"])));
        assert!(!is_history_table(&table(&["XSITUACIÓN/ES"])));
    }

    #[test]
    fn test_only_first_row_is_inspected() {
        let rows = vec![
            vec!["FECHA".to_string()],
            vec!["SITUACIÓN/ES".to_string()],
        ];
        assert!(!is_history_table(&RawTable::new(2, rows)));
    }

    #[test]
    fn test_row_text_skips_blank_cells() {
        let row = vec![" A ".to_string(), "".to_string(), "B".to_string()];
        assert_eq!(row_text(&row), "A B");
    }

    #[test]
    fn test_custom_marker() {
        let re = marker_regex("FECHA ALTA").unwrap();
        assert!(matches_marker(&table(&["FECHA", "ALTA"]), &re));
        assert!(!matches_marker(&table(&["FECHAS ALTA"]), &re));
    }
}
