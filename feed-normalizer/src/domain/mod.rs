//! Domain types for transit feed normalization.
//!
//! Identifier newtypes and the kinds of free-text field the normalizer
//! cleans.

mod field;
mod ids;

pub use field::FieldKind;
pub use ids::{RouteId, StopId, parse_digits};
