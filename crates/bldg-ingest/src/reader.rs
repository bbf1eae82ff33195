//! Lazy, forward-only row stream over a delimited source.

use std::collections::BTreeMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecordsIntoIter};
use tracing::debug;

use crate::columns::ColumnMap;
use crate::error::IngestError;

/// One data row keyed by header text. A header missing from the file is
/// simply an absent key, indistinguishable from a blank cell downstream.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: BTreeMap<String, String>,
}

impl RawRow {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            cells: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Forward-only iterator over data rows. Not restartable; the file is
/// never materialized whole.
pub struct RowReader<R: Read> {
    headers: Vec<String>,
    records: StringRecordsIntoIter<R>,
}

impl<R: Read> RowReader<R> {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<RawRow, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(error) => return Some(Err(error)),
        };
        let mut cells = BTreeMap::new();
        for (idx, header) in self.headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or("");
            cells.insert(header.clone(), value.to_string());
        }
        Some(Ok(RawRow { cells }))
    }
}

/// Open a delimited source and enforce the batch precondition: the header
/// row must decode and recognize at least one mapped column. Anything else
/// fails the whole batch before a single row is touched.
pub fn open_rows<R: Read>(reader: R, map: &ColumnMap) -> Result<RowReader<R>, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader.headers()?.iter().map(normalize_header).collect();
    if !headers.iter().any(|header| map.recognizes(header)) {
        return Err(IngestError::UnrecognizedHeader);
    }
    debug!(columns = headers.len(), "decoded header row");
    Ok(RowReader {
        headers,
        records: csv_reader.into_records(),
    })
}
