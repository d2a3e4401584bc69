//! Feed processing error types.

use std::path::PathBuf;

use crate::feed::FeedReadError;
use crate::resolve::UnmappedStopCode;

/// Errors that end a feed processing run.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The feed could not be read
    #[error(transparent)]
    Read(#[from] FeedReadError),

    /// A stop code could not be mapped; no output is produced for the feed
    #[error("fatal: {0}")]
    UnmappedStop(#[from] UnmappedStopCode),

    /// A worker task panicked or was cancelled
    #[error("worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The output could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output could not be serialized
    #[error("cannot serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
