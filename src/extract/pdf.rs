//! PDF backend for table extraction.
//!
//! Word positions come from `pdf_oxide`; grids come from the stream
//! heuristic in [`super::stream`]. Words rather than spans feed the
//! heuristic: spans join every run of text sharing a baseline, which fuses
//! neighbouring columns into one fragment.

use std::path::Path;

use log::{debug, trace};
use pdf_oxide::geometry::Rect;
use pdf_oxide::PdfDocument;

use super::stream::{detect_tables, StreamSettings, TextFragment};
use super::{PageRange, TableExtractor};
use crate::error::Result;
use crate::table::RawTable;

/// Stream-mode table extractor over PDF documents.
#[derive(Debug, Clone, Default)]
pub struct PdfTableExtractor {
    settings: StreamSettings,
}

impl PdfTableExtractor {
    /// Create an extractor with default stream settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom stream settings.
    pub fn with_settings(settings: StreamSettings) -> Self {
        Self { settings }
    }

    /// Stream settings in use.
    pub fn settings(&self) -> &StreamSettings {
        &self.settings
    }
}

impl TableExtractor for PdfTableExtractor {
    fn extract(&mut self, path: &Path, pages: PageRange) -> Result<Vec<RawTable>> {
        let doc = PdfDocument::open(path)?;
        let page_count = doc.page_count()?;
        let indices = pages.resolve(page_count)?;
        debug!(
            "{}: {} pages, extracting pages {}",
            path.display(),
            page_count,
            pages
        );

        let mut tables = Vec::new();
        for index in indices {
            let words = doc.extract_words(index)?;
            let fragments: Vec<TextFragment> = words
                .iter()
                .map(|word| word_fragment(&word.text, word.bbox))
                .collect();
            let grids = detect_tables(&fragments, &self.settings);
            trace!(
                "Page {}: {} words, {} tables",
                index + 1,
                fragments.len(),
                grids.len()
            );
            tables.extend(grids.into_iter().map(|grid| RawTable::new(index + 1, grid)));
        }

        Ok(tables)
    }
}

/// Position of a word as seen by the stream heuristic.
fn word_fragment(text: &str, bbox: Rect) -> TextFragment {
    TextFragment::new(
        text,
        bbox.x,
        bbox.x + bbox.width,
        bbox.y + bbox.height / 2.0,
    )
}
