use std::fmt;
use thiserror::Error;

/// File formats the readers and writers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdb,
    Xyz,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pdb => write!(f, "PDB"),
            Format::Xyz => write!(f, "XYZ"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {format} data: {details} (at line {line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error(
        "the number of symbols ({symbols}) and number of coordinates ({coordinates}) must be the same"
    )]
    Validation { symbols: usize, coordinates: usize },

    #[error("cannot write {field} {value:?}: tabs and line breaks would corrupt the layout")]
    InvalidText { field: &'static str, value: String },

    #[error("no reader or writer for '{0}'")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
