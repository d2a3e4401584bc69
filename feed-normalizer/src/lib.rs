//! GO Transit feed normalizer.
//!
//! Reads a GTFS feed published by the operator and turns it into a cleaned
//! form: route and stop codes mapped onto stable numeric IDs, and headsigns,
//! stop names and route names stripped of operator noise.

pub mod branding;
pub mod domain;
pub mod driver;
pub mod feed;
pub mod normalize;
pub mod resolve;
