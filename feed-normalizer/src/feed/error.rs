//! Feed reading error types.

use std::path::PathBuf;

/// Errors that can occur when reading a GTFS directory.
#[derive(Debug, thiserror::Error)]
pub enum FeedReadError {
    /// A feed file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A feed file is not valid CSV or a row does not fit its record
    #[error("cannot parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
