//! Errors reported by the components.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComponentError {
    #[error("'{text}' is not a valid time for format '{format}'")]
    InvalidTime { text: String, format: String },

    #[error("unsupported token '{token}' in time format '{format}'")]
    UnsupportedTimeFormat { token: String, format: String },

    #[error("invalid spacing '{0}': expected xs, sm, md, lg, xl or a cell count")]
    InvalidSpacing(String),

    #[error("invalid size '{0}': expected a number of cells or a pixel dimension like '20px'")]
    InvalidSize(String),
}

pub type Result<T> = std::result::Result<T, ComponentError>;
