//! # vida_laboral
//!
//! Extract the employment history from a Spanish Social Security
//! "informe de vida laboral" PDF and write it as CSV.
//!
//! ## Pipeline
//!
//! 1. **Extraction**: a [`TableExtractor`] returns the raw text grids found on
//!    pages 2 to the end (page 1 is the cover). [`PdfTableExtractor`] reads
//!    positioned text with `pdf_oxide` and detects tables in stream mode.
//! 2. **Validation**: only tables whose first row carries the
//!    `SITUACIÓN/ES` title are kept.
//! 3. **Reconstruction**: the six boilerplate rows are dropped and wrapped
//!    lines are merged back into one [`LogicalRecord`] per entry, using the
//!    "DÍAS" column as the record boundary.
//! 4. **Output**: records are concatenated in extraction order and written as
//!    UTF-8 CSV next to the input.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use vida_laboral::{output, ConverterConfig, Outcome, Pipeline};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = Path::new("vida_laboral.pdf");
//! let mut pipeline = Pipeline::for_pdf(ConverterConfig::default());
//!
//! match pipeline.run(input) {
//!     Outcome::Tables(tables) => {
//!         let records: Vec<_> = tables.into_iter().flat_map(|t| t.records).collect();
//!         output::write_csv_file(&output::output_path(input), &records)?;
//!     },
//!     Outcome::NoData(reason) => println!("{}", reason),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Table model
pub mod record;
pub mod table;

// Extraction
pub mod extract;

// Filtering and row reconstruction
pub mod reconstruct;
pub mod validate;

// Orchestration
pub mod pipeline;

// CSV output
pub mod output;

// Re-exports
pub use config::{ConverterConfig, NoDataPolicy};
pub use error::{Error, Result};
pub use extract::{PageRange, PdfTableExtractor, TableExtractor};
pub use pipeline::{NoDataReason, Outcome, Pipeline};
pub use record::{LogicalRecord, COLUMN_COUNT, COLUMN_HEADERS};
pub use table::{RawTable, ReconstructedTable};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
