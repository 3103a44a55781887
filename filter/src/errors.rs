/// Error types for schema construction and value validation
#[derive(Debug)]
pub enum SchemaError {
    DuplicateKey(String),
    UnknownField(String),
    KindMismatch { key: String, expected: &'static str },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::DuplicateKey(key) => {
                write!(f, "Duplicate field key in schema: {}", key)
            }
            SchemaError::UnknownField(key) => {
                write!(f, "No descriptor for field key: {}", key)
            }
            SchemaError::KindMismatch { key, expected } => {
                write!(f, "Value for field '{}' does not match kind {}", key, expected)
            }
        }
    }
}

impl std::error::Error for SchemaError {}
