//! Raw GTFS records, as read from the feed.

use serde::Deserialize;

/// A row of `routes.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub route_long_name: String,
    #[serde(default)]
    pub route_color: String,
}

impl RouteRecord {
    /// The operator code for this route.
    ///
    /// The short name when present, otherwise the route ID with its
    /// date-version prefix removed (`01260426-LW` → `LW`).
    pub fn code(&self) -> &str {
        let short_name = self.route_short_name.trim();
        if !short_name.is_empty() {
            return short_name;
        }
        strip_version_prefix(self.route_id.trim())
    }
}

/// Strip a leading `<digits>-` version prefix.
fn strip_version_prefix(route_id: &str) -> &str {
    match route_id.split_once('-') {
        Some((prefix, rest))
            if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            rest
        }
        _ => route_id,
    }
}

/// A row of `stops.txt`.
///
/// Coordinates are kept as text; they only feed error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    #[serde(default)]
    pub stop_name: String,
    #[serde(default)]
    pub stop_lat: String,
    #[serde(default)]
    pub stop_lon: String,
}

impl StopRecord {
    /// Short human description for error messages.
    pub fn describe(&self) -> String {
        let (lat, lon) = (self.stop_lat.trim(), self.stop_lon.trim());
        if lat.is_empty() || lon.is_empty() {
            format!("stop {:?}", self.stop_name)
        } else {
            format!("stop {:?} at {lat}, {lon}", self.stop_name)
        }
    }
}

/// A row of `trips.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TripRecord {
    pub trip_id: String,
    pub route_id: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub trip_headsign: String,
}

impl TripRecord {
    /// The operator code of the trip's route, derived the same way as
    /// [`RouteRecord::code`] when the route has no short name.
    pub fn route_code(&self) -> &str {
        strip_version_prefix(self.route_id.trim())
    }
}

/// All records of one feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub routes: Vec<RouteRecord>,
    pub stops: Vec<StopRecord>,
    pub trips: Vec<TripRecord>,
}
