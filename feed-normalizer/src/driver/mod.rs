//! Feed processing driver.
//!
//! Ties the resolver and normalizer together over a whole feed. Records are
//! independent of each other, so they are processed in parallel batches and
//! reassembled in input order.

mod config;
mod error;
mod output;
mod processor;

pub use config::{BATCH_SIZE_VAR, NUMERIC_IDS_VAR, ProcessorConfig};
pub use error::FeedError;
pub use output::{NormalizedFeed, NormalizedRoute, NormalizedStop, NormalizedTrip, write_output};
pub use processor::FeedProcessor;
