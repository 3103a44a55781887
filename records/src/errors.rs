/// Error types for record parsing and dataset operations
#[derive(Debug)]
pub enum RecordError {
    ParseError(String),
    CsvError(csv::Error),
    IoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
}

impl From<csv::Error> for RecordError {
    fn from(err: csv::Error) -> Self {
        RecordError::CsvError(err)
    }
}

impl From<std::io::Error> for RecordError {
    fn from(err: std::io::Error) -> Self {
        RecordError::IoError(err)
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::SerdeJsonError(err)
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RecordError::CsvError(err) => write!(f, "CSV error: {}", err),
            RecordError::IoError(err) => write!(f, "IO error: {}", err),
            RecordError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
        }
    }
}

impl std::error::Error for RecordError {}
