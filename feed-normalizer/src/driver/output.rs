//! Normalized output records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::branding::AgencyInfo;
use crate::domain::{RouteId, StopId};

use super::error::FeedError;

/// A route with its resolved ID and cleaned long name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RouteId>,
    pub code: String,
    pub long_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A stop with its resolved ID and cleaned name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedStop {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StopId>,
    pub code: String,
    pub name: String,
}

/// A trip with its cleaned headsign.
///
/// `route_id` and `route_code` carry the same values as the `id` and `code`
/// of the trip's [`NormalizedRoute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTrip {
    pub trip_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<RouteId>,
    pub route_code: String,
    pub headsign: String,
}

/// Everything produced for one feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedFeed {
    pub agency: AgencyInfo,
    pub routes: Vec<NormalizedRoute>,
    pub stops: Vec<NormalizedStop>,
    pub trips: Vec<NormalizedTrip>,
}

/// Write the normalized feed as pretty-printed JSON.
pub fn write_output(path: &Path, feed: &NormalizedFeed) -> Result<(), FeedError> {
    let write_error = |source| FeedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, feed)?;
    writer.write_all(b"\n").map_err(write_error)?;
    writer.flush().map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NormalizedFeed {
        NormalizedFeed {
            agency: AgencyInfo::default(),
            routes: vec![NormalizedRoute {
                id: Some(RouteId::new(1)),
                code: "LW".into(),
                long_name: "Lakeshore West".into(),
                color: None,
            }],
            stops: vec![NormalizedStop {
                id: None,
                code: "UN".into(),
                name: "Union".into(),
            }],
            trips: vec![NormalizedTrip {
                trip_id: "T1".into(),
                route_id: Some(RouteId::new(1)),
                route_code: "LW".into(),
                headsign: "Hamilton".into(),
            }],
        }
    }

    #[test]
    fn optional_fields_are_omitted() {
        let value = serde_json::to_value(sample()).unwrap();
        let route = &value["routes"][0];
        assert_eq!(route["id"], 1);
        assert!(route.get("color").is_none());
        assert!(value["stops"][0].get("id").is_none());
        assert_eq!(value["agency"]["languages"][1], "fr");
        assert_eq!(value["trips"][0]["route_id"], route["id"]);
        assert_eq!(value["trips"][0]["route_code"], route["code"]);
    }

    #[test]
    fn writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normalized.json");

        write_output(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["routes"][0]["code"], "LW");
        assert_eq!(value["stops"][0]["name"], "Union");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("normalized.json");
        let err = write_output(&path, &sample()).unwrap_err();
        assert!(matches!(err, FeedError::Write { .. }));
    }
}
