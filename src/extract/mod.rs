//! Table extraction.
//!
//! A [`TableExtractor`] turns a document into raw text grids. The pipeline
//! only sees this trait; the PDF backend lives in [`pdf`] and the
//! layout heuristic that turns positioned text into grids lives in
//! [`stream`].

pub mod pdf;
pub mod stream;

use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::table::RawTable;

pub use pdf::PdfTableExtractor;
pub use stream::{StreamSettings, TextFragment};

/// Source of raw tables.
pub trait TableExtractor {
    /// Extract every table found on `pages` of the document at `path`,
    /// in page order and top-to-bottom within a page.
    fn extract(&mut self, path: &Path, pages: PageRange) -> Result<Vec<RawTable>>;
}

/// Inclusive, 1-based page range. `last: None` means "through the end".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    /// First page, 1-based
    pub first: usize,
    /// Last page, 1-based and inclusive; `None` for the last page of the document
    pub last: Option<usize>,
}

impl PageRange {
    /// Every page from `first` to the end of the document.
    pub fn from_page(first: usize) -> Self {
        Self { first, last: None }
    }

    /// Pages `first..=last`.
    pub fn pages(first: usize, last: usize) -> Self {
        Self {
            first,
            last: Some(last),
        }
    }

    /// Resolve against a page count into 0-based page indices.
    ///
    /// A range starting past the end resolves to no pages. An explicit
    /// last page beyond the document is an error.
    pub fn resolve(&self, page_count: usize) -> Result<Range<usize>> {
        let last = match self.last {
            Some(last) if last > page_count => {
                return Err(Error::PageOutOfBounds {
                    page: last,
                    page_count,
                });
            },
            Some(last) => last,
            None => page_count,
        };
        let start = self.first.max(1) - 1;
        Ok(start..last.max(start))
    }
}

impl Default for PageRange {
    /// Page 2 through the end; page 1 of the report is a cover page.
    fn default() -> Self {
        Self::from_page(2)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last {
            Some(last) => write!(f, "{}-{}", self.first, last),
            None => write!(f, "{}-end", self.first),
        }
    }
}

impl FromStr for PageRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPageRange(s.to_string());
        let parse_page = |text: &str| -> Result<usize> {
            match text.trim().parse::<usize>() {
                Ok(page) if page >= 1 => Ok(page),
                _ => Err(invalid()),
            }
        };

        match s.split_once('-') {
            Some((first, last)) => {
                let first = parse_page(first)?;
                if last.trim().eq_ignore_ascii_case("end") {
                    Ok(Self::from_page(first))
                } else {
                    let last = parse_page(last)?;
                    if last < first {
                        return Err(invalid());
                    }
                    Ok(Self::pages(first, last))
                }
            },
            None => {
                let page = parse_page(s)?;
                Ok(Self::pages(page, page))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skips_cover_page() {
        let range = PageRange::default();
        assert_eq!(range.to_string(), "2-end");
        assert_eq!(range.resolve(5).unwrap(), 1..5);
    }

    #[test]
    fn test_single_page_document_has_no_pages() {
        let range = PageRange::default().resolve(1).unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn test_start_beyond_end_is_empty() {
        let range = PageRange::from_page(9).resolve(3).unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn test_explicit_last_beyond_end_is_error() {
        let err = PageRange::pages(1, 8).resolve(3).unwrap_err();
        assert!(matches!(
            err,
            Error::PageOutOfBounds {
                page: 8,
                page_count: 3
            }
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2-end".parse::<PageRange>().unwrap(), PageRange::from_page(2));
        assert_eq!("3-7".parse::<PageRange>().unwrap(), PageRange::pages(3, 7));
        assert_eq!("4".parse::<PageRange>().unwrap(), PageRange::pages(4, 4));
        assert_eq!(" 2 - END ".parse::<PageRange>().unwrap(), PageRange::from_page(2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "0", "a-b", "5-2", "2-", "-end"] {
            assert!(
                matches!(text.parse::<PageRange>(), Err(Error::InvalidPageRange(_))),
                "{:?} should not parse",
                text
            );
        }
    }
}
