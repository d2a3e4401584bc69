//! Kinds of free-text label carried by a feed.

use std::fmt;

/// The feed field a label came from.
///
/// Normalization rules are scoped per field kind: a headsign has its route
/// prefix stripped, a stop name has its "at" phrase rewritten, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `routes.txt` `route_long_name`
    RouteLongName,
    /// `trips.txt` `trip_headsign`
    TripHeadsign,
    /// `stops.txt` `stop_name`
    StopName,
}

impl FieldKind {
    /// Every field kind, in feed-file order.
    pub const ALL: [FieldKind; 3] = [
        FieldKind::RouteLongName,
        FieldKind::TripHeadsign,
        FieldKind::StopName,
    ];

    /// The GTFS column this kind is read from.
    pub fn column(&self) -> &'static str {
        match self {
            FieldKind::RouteLongName => "route_long_name",
            FieldKind::TripHeadsign => "trip_headsign",
            FieldKind::StopName => "stop_name",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
