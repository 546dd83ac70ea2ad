use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::constants::CSV_HEADERS;
use crate::error::{TriageError, TriageResult};
use crate::models::IssueRecord;

/// Read one CSV snapshot. Row-level failures are collected and the rest of
/// the file is still read; only failing to open or parse the file itself is
/// fatal.
pub fn read_snapshot(path: &Path) -> TriageResult<(Vec<IssueRecord>, Vec<TriageError>)> {
    let mut reader = ReaderBuilder::new().from_path(path)?;

    let mut records = Vec::new();
    let mut errors = Vec::new();
    for row in reader.deserialize() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => errors.push(TriageError::CsvError(e)),
        }
    }

    Ok((records, errors))
}

/// Write a snapshot with the shared column headers. Headers are written even
/// for an empty record set so the output stays mergeable.
pub fn write_snapshot(path: &Path, records: &[IssueRecord]) -> TriageResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
