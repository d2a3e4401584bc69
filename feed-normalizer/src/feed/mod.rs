//! GTFS feed input.
//!
//! Reads the three files the normalizer needs into plain records. No schema
//! validation happens here: rows are taken as they come.

mod error;
mod reader;
mod records;

pub use error::FeedReadError;
pub use reader::{ROUTES_FILE, STOPS_FILE, TRIPS_FILE, read_feed};
pub use records::{Feed, RouteRecord, StopRecord, TripRecord};
