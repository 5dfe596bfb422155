use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The cookie log did not have the expected shape.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("'{source_name}': missing header line, expected: cookie,timestamp")]
    MissingHeader { source_name: String },

    #[error(
        "'{source_name}': header has {found} columns, expected 2. Header format should be: cookie,timestamp"
    )]
    HeaderColumnCount { source_name: String, found: usize },

    #[error(
        "'{source_name}': header column '{column}' not found. Header format should be: cookie,timestamp"
    )]
    HeaderColumn {
        source_name: String,
        column: &'static str,
    },

    #[error("'{source_name}' line {line}: expected 'cookie,timestamp' row, got '{row}'")]
    MalformedRow {
        source_name: String,
        line: usize,
        row: String,
    },

    #[error("no log sources given")]
    NoSources,

    #[error("'{source_name}': no entries found")]
    NoEntries { source_name: String },

    #[error("failed to fetch log file from '{url}': HTTP {status}")]
    Fetch { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to request '{url}'")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
