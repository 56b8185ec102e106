//! Reconstruction of logical records from line-wrapped table rows.
//!
//! The report prints one record over several physical lines whenever a
//! cell wraps (long employer names are the usual culprit). Only the first
//! line of a record carries the "days" value, so a non-blank days cell is
//! the one signal that a new record has started.
//!
//! The merge is an explicit two-state machine:
//!
//! | state                 | anchor row            | continuation row   |
//! |-----------------------|-----------------------|--------------------|
//! | `NoCurrentRecord`     | start record          | drop row           |
//! | `AccumulatingRecord`  | emit, start record    | merge into current |

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::record::{LogicalRecord, COLUMN_COUNT, DAYS_COLUMN};
use crate::table::{is_blank, RawTable, ReconstructedTable};

/// Kind of a raw body row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Days cell is filled: the row opens a new record
    Anchor,
    /// Days cell is blank: the row holds wrapped text of the current record
    Continuation,
}

impl RowKind {
    /// Classify a row by its days cell.
    pub fn of(cells: &[String; COLUMN_COUNT]) -> Self {
        if is_blank(&cells[DAYS_COLUMN]) {
            RowKind::Continuation
        } else {
            RowKind::Anchor
        }
    }
}

/// Reconstruction state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReconstructState {
    /// Start of table, or nothing anchored yet
    #[default]
    NoCurrentRecord,
    /// A record is open and still absorbing continuation rows
    AccumulatingRecord(LogicalRecord),
}

/// Streaming row reconstructor.
///
/// Feed rows with [`push_row`](Self::push_row); every completed record is
/// handed back as soon as the next anchor row closes it. Call
/// [`finish`](Self::finish) to flush the last open record.
#[derive(Debug, Default)]
pub struct RowReconstructor {
    state: ReconstructState,
}

impl RowReconstructor {
    /// Create a reconstructor in the `NoCurrentRecord` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &ReconstructState {
        &self.state
    }

    /// Apply one row and return the record it finalized, if any.
    pub fn push_row(&mut self, cells: [String; COLUMN_COUNT]) -> Option<LogicalRecord> {
        let kind = RowKind::of(&cells);
        let state = std::mem::take(&mut self.state);

        let (next, finished) = match (state, kind) {
            (ReconstructState::NoCurrentRecord, RowKind::Anchor) => (
                ReconstructState::AccumulatingRecord(LogicalRecord::from_cells(cells)),
                None,
            ),
            (ReconstructState::AccumulatingRecord(current), RowKind::Anchor) => (
                ReconstructState::AccumulatingRecord(LogicalRecord::from_cells(cells)),
                Some(current),
            ),
            (ReconstructState::NoCurrentRecord, RowKind::Continuation) => {
                trace!("Dropping continuation row with no open record");
                (ReconstructState::NoCurrentRecord, None)
            },
            (ReconstructState::AccumulatingRecord(mut current), RowKind::Continuation) => {
                for (column, text) in cells.iter().enumerate() {
                    current.append(column, text);
                }
                (ReconstructState::AccumulatingRecord(current), None)
            },
        };

        self.state = next;
        finished
    }

    /// Finalize the open record, if any, and reset to `NoCurrentRecord`.
    pub fn finish(&mut self) -> Option<LogicalRecord> {
        match std::mem::take(&mut self.state) {
            ReconstructState::AccumulatingRecord(record) => Some(record),
            ReconstructState::NoCurrentRecord => None,
        }
    }
}

/// Convert a row into exactly [`COLUMN_COUNT`] cells.
///
/// `page` and `row` only label the error.
pub fn row_cells(row: &[String], page: usize, index: usize) -> Result<[String; COLUMN_COUNT]> {
    <[String; COLUMN_COUNT]>::try_from(row.to_vec()).map_err(|found| Error::ColumnCount {
        page,
        row: index,
        expected: COLUMN_COUNT,
        found: found.len(),
    })
}

/// Reconstruct records from a sequence of body rows.
///
/// `first_index` is the index of the first body row within its table and
/// only serves error reporting.
pub fn reconstruct_rows(
    rows: &[Vec<String>],
    page: usize,
    first_index: usize,
) -> Result<Vec<LogicalRecord>> {
    let mut reconstructor = RowReconstructor::new();
    let mut records = Vec::new();

    for (offset, row) in rows.iter().enumerate() {
        let cells = row_cells(row, page, first_index + offset)?;
        if let Some(record) = reconstructor.push_row(cells) {
            records.push(record);
        }
    }

    records.extend(reconstructor.finish());
    Ok(records)
}

/// Reconstruct a raw table, skipping its first `skip_rows` boilerplate rows.
pub fn reconstruct_table(table: &RawTable, skip_rows: usize) -> Result<ReconstructedTable> {
    let body = table.body(skip_rows);
    let records = reconstruct_rows(body, table.page, skip_rows)?;
    debug!(
        "Page {}: {} body rows merged into {} records",
        table.page,
        body.len(),
        records.len()
    );
    Ok(ReconstructedTable {
        page: table.page,
        records,
    })
}
