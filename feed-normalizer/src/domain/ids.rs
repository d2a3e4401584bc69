//! Stable numeric identifier types.

use std::fmt;

use serde::Serialize;

/// A stable numeric route identifier.
///
/// Route IDs are small positive integers assigned from a curated table, or
/// synthesized by the fallback policy for codes the table does not know.
///
/// # Examples
///
/// ```
/// use feed_normalizer::domain::RouteId;
///
/// let lw = RouteId::new(1);
/// assert_eq!(lw.get(), 1);
/// assert_eq!(lw.to_string(), "1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RouteId(i64);

impl RouteId {
    /// Wrap a raw route ID.
    pub const fn new(id: i64) -> Self {
        RouteId(id)
    }

    /// Returns the raw integer.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stable numeric stop identifier.
///
/// Numeric stop codes from the feed pass through as their integer value;
/// alphanumeric codes are mapped through a curated table.
///
/// # Examples
///
/// ```
/// use feed_normalizer::domain::StopId;
///
/// let union = StopId::new(9021);
/// assert_eq!(union.get(), 9021);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StopId(i64);

impl StopId {
    /// Wrap a raw stop ID.
    pub const fn new(id: i64) -> Self {
        StopId(id)
    }

    /// Returns the raw integer.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a code made only of ASCII digits.
///
/// Returns `None` for the empty string, for anything containing a non-digit
/// (signs and whitespace included), and for values that overflow `i64`.
pub fn parse_digits(code: &str) -> Option<i64> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse().ok()
}
