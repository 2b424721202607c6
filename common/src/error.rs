use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Input the formatter refuses to render, e.g. a `"` delimiter.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown column type: {0}")]
    UnknownColumnType(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
