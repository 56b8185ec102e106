//! CSV serialization of reconstructed records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::{LogicalRecord, COLUMN_HEADERS};

/// Check whether a path names a PDF document (case-insensitive extension).
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// CSV path written next to the input: same stem, `.csv` extension.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

/// Write the header row and one row per record.
pub fn write_csv<W: Write>(writer: W, records: &[LogicalRecord]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(COLUMN_HEADERS)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write records to a CSV file, replacing any existing file.
pub fn write_csv_file(path: &Path, records: &[LogicalRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, days: &str) -> LogicalRecord {
        LogicalRecord {
            regime: "GENERAL".to_string(),
            employer_name: name.to_string(),
            days: days.to_string(),
            ..Default::default()
        }
    }

    fn render(records: &[LogicalRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            output_path(Path::new("/tmp/informe.pdf")),
            PathBuf::from("/tmp/informe.csv")
        );
        assert_eq!(
            output_path(Path::new("vida.laboral.PDF")),
            PathBuf::from("vida.laboral.csv")
        );
    }

    #[test]
    fn test_is_pdf_path() {
        assert!(is_pdf_path(Path::new("informe.pdf")));
        assert!(is_pdf_path(Path::new("INFORME.PDF")));
        assert!(!is_pdf_path(Path::new("informe.csv")));
        assert!(!is_pdf_path(Path::new("informe")));
    }

    #[test]
    fn test_header_only_for_no_records() {
        assert_eq!(render(&[]), format!("{}\n", COLUMN_HEADERS.join(",")));
    }

    #[test]
    fn test_rows_in_order() {
        let text = render(&[record("ACME", "12"), record("GLOBEX", "3")]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "GENERAL,,ACME,,,,,,,12");
        assert_eq!(lines[2], "GENERAL,,GLOBEX,,,,,,,3");
    }

    #[test]
    fn test_embedded_delimiter_is_quoted() {
        let text = render(&[record("ACME, S.L.", "12")]);
        assert!(text.contains("\"ACME, S.L.\""));

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[2], "ACME, S.L.");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("informe.csv");
        write_csv_file(&path, &[record("ACME", "12")]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("RÉGIMEN,ID EMPRESA,NOMBRE EMPRESA"));
        assert!(text.contains("ACME"));
    }
}
