//! Configuration for the conversion pipeline.

use crate::extract::{PageRange, StreamSettings};

/// Number of boilerplate rows at the top of every history table.
pub const HEADER_ROWS: usize = 6;

/// What a run that produced no records should report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoDataPolicy {
    /// Print a message and exit successfully
    #[default]
    Succeed,
    /// Print a message and exit with a failure status
    Fail,
}

impl NoDataPolicy {
    /// Process exit code for a run that produced no records.
    pub fn exit_code(self) -> u8 {
        match self {
            NoDataPolicy::Succeed => 0,
            NoDataPolicy::Fail => 2,
        }
    }
}

/// Conversion configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Boilerplate rows dropped from the top of each table.
    pub header_rows: usize,

    /// Pages handed to the extractor.
    pub pages: PageRange,

    /// Stream-mode detection settings.
    pub stream: StreamSettings,

    /// Outcome when nothing was extracted.
    pub no_data: NoDataPolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            header_rows: HEADER_ROWS,
            pages: PageRange::default(),
            stream: StreamSettings::default(),
            no_data: NoDataPolicy::default(),
        }
    }

    /// Set the number of boilerplate rows per table.
    pub fn with_header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }

    /// Set the page range.
    pub fn with_pages(mut self, pages: PageRange) -> Self {
        self.pages = pages;
        self
    }

    /// Set the stream-mode detection settings.
    pub fn with_stream_settings(mut self, stream: StreamSettings) -> Self {
        self.stream = stream;
        self
    }

    /// Set the no-data policy.
    pub fn with_no_data_policy(mut self, policy: NoDataPolicy) -> Self {
        self.no_data = policy;
        self
    }
}
