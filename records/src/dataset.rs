use crate::errors::RecordError;
use log::warn;
use std::collections::HashSet;
use std::io::{Read, Write};

/// A record type with a fixed CSV column order and a unique id
pub trait TabularRecord: Sized {
    const HEADERS: &'static [&'static str];

    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, RecordError>;
    fn to_csv_record(&self) -> Vec<String>;
    fn record_id(&self) -> &str;

    /// Recompute the cached JSON rendering of the record's fields
    fn finalize(self) -> Self;
}

/// Ordered, id-deduplicated record collection backed by CSV
#[derive(Debug, Clone)]
pub struct Dataset<T> {
    records: Vec<T>,
}

impl<T: TabularRecord> Dataset<T> {
    /// Build a dataset from already-constructed records. Duplicate ids are
    /// dropped, first occurrence wins.
    pub fn new(records: Vec<T>) -> Self {
        let mut seen = HashSet::new();
        let mut deduped = Vec::with_capacity(records.len());
        for record in records {
            let record = record.finalize();
            if seen.insert(record.record_id().to_string()) {
                deduped.push(record);
            } else {
                warn!("Dropping duplicate record id: {}", record.record_id());
            }
        }
        Self { records: deduped }
    }

    pub fn new_from_file(path: &str) -> Result<Self, RecordError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn new_from_str(csv_data: &str) -> Result<Self, RecordError> {
        Self::from_reader(std::io::Cursor::new(csv_data.as_bytes()))
    }

    /// Parse CSV rows; invalid rows are skipped with a warning, not fatal
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RecordError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            match result {
                Ok(row) => match T::from_csv_record(&row) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        warn!("Skipping invalid record: {}", e);
                        continue;
                    }
                },
                Err(e) => {
                    warn!("Error reading CSV record: {}", e);
                    continue;
                }
            }
        }

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every record as CSV in the fixed header order
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), RecordError> {
        write_csv(self.records.iter(), writer).map(|_| ())
    }

    pub fn to_str(&self) -> Result<String, RecordError> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

/// Export a selection (typically a filtered subset) as CSV. Duplicate ids
/// are written once, preserving order. Returns the number of rows written.
pub fn write_csv<'a, T, I, W>(selection: I, writer: W) -> Result<usize, RecordError>
where
    T: TabularRecord + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(T::HEADERS)?;

    let mut seen = HashSet::new();
    let mut written = 0;
    for record in selection {
        if !seen.insert(record.record_id().to_string()) {
            continue;
        }
        csv_writer.write_record(&record.to_csv_record())?;
        written += 1;
    }

    csv_writer.flush().map_err(RecordError::IoError)?;
    Ok(written)
}
