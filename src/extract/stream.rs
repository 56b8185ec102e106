//! Stream-mode table detection from positioned text.
//!
//! Tables in the report have no ruling lines, so cells are recovered from
//! text alignment alone:
//!
//! 1. fragments are grouped into rows by vertical position,
//! 2. rows are split into table regions wherever a large vertical gap opens,
//! 3. column intervals are inferred from the most populated rows of a region,
//! 4. every fragment lands in the column containing its horizontal centre.
//!
//! Coordinates are PDF user space: y grows towards the top of the page.

use log::trace;

/// A piece of positioned text on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// Text content
    pub text: String,
    /// Left edge
    pub x0: f32,
    /// Right edge
    pub x1: f32,
    /// Vertical centre
    pub y: f32,
}

impl TextFragment {
    /// Create a fragment.
    pub fn new(text: impl Into<String>, x0: f32, x1: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            y,
        }
    }

    /// Horizontal centre.
    pub fn center_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }
}

/// Tuning for stream-mode detection. Distances are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamSettings {
    /// Fragments whose centres differ by at most this much share a row
    pub row_tolerance: f32,
    /// Horizontal extents closer than this are merged into one column
    pub column_gap: f32,
    /// A vertical gap between rows larger than this starts a new table
    pub table_gap: f32,
    /// Regions with fewer rows are not reported
    pub min_rows: usize,
    /// Regions with fewer columns are not reported
    pub min_columns: usize,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            row_tolerance: 2.0,
            column_gap: 3.0,
            table_gap: 24.0,
            min_rows: 2,
            min_columns: 2,
        }
    }
}

/// A detected grid of cell texts, rows top to bottom.
pub type Grid = Vec<Vec<String>>;

#[derive(Debug)]
struct Row<'a> {
    y: f32,
    fragments: Vec<&'a TextFragment>,
}

/// Detect tables on one page.
///
/// Tables are returned top to bottom. Every row of a grid has the same
/// number of cells.
pub fn detect_tables(fragments: &[TextFragment], settings: &StreamSettings) -> Vec<Grid> {
    let rows = group_rows(fragments, settings.row_tolerance);

    split_regions(rows, settings.table_gap)
        .into_iter()
        .filter(|region| region.len() >= settings.min_rows)
        .filter_map(|region| {
            let columns = infer_columns(&region, settings.column_gap);
            if columns.len() < settings.min_columns {
                trace!(
                    "Skipping region of {} rows with {} columns",
                    region.len(),
                    columns.len()
                );
                return None;
            }
            Some(build_grid(&region, &columns))
        })
        .collect()
}

/// Group fragments into rows, top to bottom, each row left to right.
fn group_rows(fragments: &[TextFragment], tolerance: f32) -> Vec<Row<'_>> {
    let mut sorted: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| !f.text.trim().is_empty())
        .collect();
    sorted.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x0.total_cmp(&b.x0)));

    let mut rows: Vec<Row<'_>> = Vec::new();
    for fragment in sorted {
        match rows.last_mut() {
            Some(row) if (row.y - fragment.y).abs() <= tolerance => row.fragments.push(fragment),
            _ => rows.push(Row {
                y: fragment.y,
                fragments: vec![fragment],
            }),
        }
    }

    for row in &mut rows {
        row.fragments.sort_by(|a, b| a.x0.total_cmp(&b.x0));
    }
    rows
}

/// Split rows wherever the distance to the previous row exceeds `gap`.
fn split_regions(rows: Vec<Row<'_>>, gap: f32) -> Vec<Vec<Row<'_>>> {
    let mut regions: Vec<Vec<Row<'_>>> = Vec::new();
    let mut previous_y: Option<f32> = None;

    for row in rows {
        let starts_region = previous_y.map_or(true, |y| y - row.y > gap);
        previous_y = Some(row.y);
        if starts_region {
            regions.push(vec![row]);
        } else if let Some(region) = regions.last_mut() {
            region.push(row);
        }
    }
    regions
}

/// Infer column intervals `(x0, x1)`, left to right.
///
/// Only rows with at least the most common fragment count take part, so
/// that titles and wrapped lines do not fuse neighbouring columns.
fn infer_columns(region: &[Row<'_>], gap: f32) -> Vec<(f32, f32)> {
    let reference = modal_width(region);

    let mut extents: Vec<(f32, f32)> = region
        .iter()
        .filter(|row| row.fragments.len() >= reference)
        .flat_map(|row| row.fragments.iter().map(|f| (f.x0, f.x1)))
        .collect();
    extents.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut columns: Vec<(f32, f32)> = Vec::new();
    for (x0, x1) in extents {
        match columns.last_mut() {
            Some(column) if x0 <= column.1 + gap => column.1 = column.1.max(x1),
            _ => columns.push((x0, x1)),
        }
    }
    columns
}

/// Most common fragment count among multi-fragment rows, larger on ties.
fn modal_width(region: &[Row<'_>]) -> usize {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for row in region.iter().filter(|row| row.fragments.len() > 1) {
        let width = row.fragments.len();
        match counts.iter_mut().find(|(w, _)| *w == width) {
            Some((_, count)) => *count += 1,
            None => counts.push((width, 1)),
        }
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(width, _)| width)
        .unwrap_or(1)
}

/// Place every fragment of a region into its column.
fn build_grid(region: &[Row<'_>], columns: &[(f32, f32)]) -> Grid {
    let boundaries: Vec<f32> = columns
        .windows(2)
        .map(|pair| (pair[0].1 + pair[1].0) / 2.0)
        .collect();

    region
        .iter()
        .map(|row| {
            let mut cells = vec![String::new(); columns.len()];
            for fragment in &row.fragments {
                let column = boundaries.partition_point(|&b| b <= fragment.center_x());
                let cell = &mut cells[column];
                if !cell.is_empty() {
                    cell.push(' ');
                }
                cell.push_str(fragment.text.trim());
            }
            cells
        })
        .collect()
}
