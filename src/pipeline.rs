//! End-to-end conversion of one report.
//!
//! The pipeline asks its [`TableExtractor`] for every table on the
//! configured pages, keeps the employment-history tables, reconstructs
//! their records and concatenates them in extraction order.

use std::fmt;
use std::path::Path;

use log::{debug, error, info, warn};

use crate::config::ConverterConfig;
use crate::error::{Error, Result};
use crate::extract::{PdfTableExtractor, TableExtractor};
use crate::reconstruct::reconstruct_table;
use crate::record::LogicalRecord;
use crate::table::ReconstructedTable;
use crate::validate::is_history_table;

/// Why a run produced no records.
#[derive(Debug)]
pub enum NoDataReason {
    /// The extractor found no tables at all
    NoTables,
    /// None of the tables carried the history header
    NoValidTables,
    /// Every history table reconstructed to zero records
    EmptyTables,
    /// Extraction or reconstruction failed
    Failed(Error),
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDataReason::NoTables => write!(f, "No tables found"),
            NoDataReason::NoValidTables => write!(f, "No valid tables found"),
            NoDataReason::EmptyTables => write!(f, "Could not process valid tables"),
            NoDataReason::Failed(err) => write!(f, "Error: {}", err),
        }
    }
}

/// Result of converting one report.
#[derive(Debug)]
pub enum Outcome {
    /// Non-empty reconstructed tables, in extraction order
    Tables(Vec<ReconstructedTable>),
    /// Nothing to write
    NoData(NoDataReason),
}

impl Outcome {
    /// All records, table order first and row order within each table.
    pub fn into_records(self) -> Vec<LogicalRecord> {
        match self {
            Outcome::Tables(tables) => tables.into_iter().flat_map(|t| t.records).collect(),
            Outcome::NoData(_) => Vec::new(),
        }
    }

    /// Check whether the run produced no records.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Outcome::NoData(_))
    }
}

/// Conversion pipeline over a table extractor.
#[derive(Debug)]
pub struct Pipeline<E> {
    extractor: E,
    config: ConverterConfig,
}

impl Pipeline<PdfTableExtractor> {
    /// Pipeline over PDF documents, configured from `config`.
    pub fn for_pdf(config: ConverterConfig) -> Self {
        let extractor = PdfTableExtractor::with_settings(config.stream.clone());
        Self::new(extractor, config)
    }
}

impl<E: TableExtractor> Pipeline<E> {
    /// Create a pipeline.
    pub fn new(extractor: E, config: ConverterConfig) -> Self {
        Self { extractor, config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert one document.
    ///
    /// Failures are logged and reported as [`NoDataReason::Failed`].
    pub fn run(&mut self, path: &Path) -> Outcome {
        info!("Processing: {}", path.display());
        match self.process(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("Error: {}", err);
                Outcome::NoData(NoDataReason::Failed(err))
            },
        }
    }

    /// Convert one document, propagating extraction and layout errors.
    pub fn process(&mut self, path: &Path) -> Result<Outcome> {
        let tables = self.extractor.extract(path, self.config.pages)?;
        if tables.is_empty() {
            warn!("No tables found");
            return Ok(Outcome::NoData(NoDataReason::NoTables));
        }
        info!("Found {} tables in total", tables.len());

        let valid: Vec<_> = tables
            .into_iter()
            .filter(|table| {
                let valid = is_history_table(table);
                if valid {
                    info!("Valid table found on page {}", table.page);
                } else {
                    debug!("Skipping table on page {}", table.page);
                }
                valid
            })
            .collect();

        if valid.is_empty() {
            warn!("No valid tables found");
            return Ok(Outcome::NoData(NoDataReason::NoValidTables));
        }
        info!("Processing {} valid tables...", valid.len());

        let mut processed = Vec::with_capacity(valid.len());
        for table in &valid {
            let reconstructed = reconstruct_table(table, self.config.header_rows)?;
            if reconstructed.is_empty() {
                warn!("Page {}: no rows after reconstruction", table.page);
                continue;
            }
            info!(
                "Page {}: {} rows processed",
                reconstructed.page,
                reconstructed.len()
            );
            processed.push(reconstructed);
        }

        if processed.is_empty() {
            warn!("Could not process valid tables");
            return Ok(Outcome::NoData(NoDataReason::EmptyTables));
        }

        let total: usize = processed.iter().map(ReconstructedTable::len).sum();
        info!("Total: {} rows in {} tables", total, processed.len());
        Ok(Outcome::Tables(processed))
    }
}
