// src/storage/csv.rs

//! CSV persistence for filtered listings.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::error::Result;
use crate::models::OutputRow;

/// Appends matching listings to a CSV file, one page at a time.
///
/// The first page truncates the file and writes the header row, even when
/// the page has no matches; later pages append rows only. Quoting follows
/// RFC 4180, so embedded commas, quotes, and newlines in descriptions are
/// safe.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one page's worth of rows.
    pub fn write_page(&self, rows: &[OutputRow], first_page: bool) -> Result<()> {
        let file = if first_page {
            File::create(&self.path)?
        } else {
            OpenOptions::new().create(true).append(true).open(&self.path)?
        };

        // Header handling is explicit so an empty first page still gets one.
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if first_page {
            writer.write_record(OutputRow::HEADERS)?;
        }
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(id: &str, description: &str) -> OutputRow {
        OutputRow {
            id: id.to_string(),
            title: "Developer".to_string(),
            description: description.to_string(),
            employer: "Acme".to_string(),
            location: "Berlin,Munich".to_string(),
        }
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn empty_first_page_still_writes_header() {
        let tmp = TempDir::new().unwrap();
        let sink = CsvSink::new(tmp.path().join("out.csv"));

        sink.write_page(&[], true).unwrap();
        assert_eq!(read(sink.path()), "id,title,description,employer,location\n");
    }

    #[test]
    fn header_is_written_exactly_once() {
        let tmp = TempDir::new().unwrap();
        let sink = CsvSink::new(tmp.path().join("out.csv"));

        sink.write_page(&[row("1", "first page")], true).unwrap();
        sink.write_page(&[row("2", "second page")], false).unwrap();
        sink.write_page(&[], false).unwrap();

        let content = read(sink.path());
        assert_eq!(content.matches("id,title,description").count(), 1);
        assert_eq!(content.lines().count(), 3);
        assert!(content.lines().nth(2).unwrap().starts_with("2,"));
    }

    #[test]
    fn first_page_truncates_previous_run() {
        let tmp = TempDir::new().unwrap();
        let sink = CsvSink::new(tmp.path().join("out.csv"));

        sink.write_page(&[row("old", "stale")], true).unwrap();
        sink.write_page(&[row("new", "fresh")], true).unwrap();

        let content = read(sink.path());
        assert!(!content.contains("stale"));
        assert!(content.contains("fresh"));
    }

    #[test]
    fn quoted_fields_round_trip() {
        let tmp = TempDir::new().unwrap();
        let sink = CsvSink::new(tmp.path().join("out.csv"));
        let tricky = "Benefits: relocation, \"visa\" help\nand more";

        sink.write_page(&[row("1", tricky)], true).unwrap();

        let mut reader = csv::Reader::from_path(sink.path()).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], tricky);
    }
}
