//! GTFS directory reader.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::FeedReadError;
use super::records::{Feed, RouteRecord, StopRecord, TripRecord};

pub const ROUTES_FILE: &str = "routes.txt";
pub const STOPS_FILE: &str = "stops.txt";
pub const TRIPS_FILE: &str = "trips.txt";

/// Read `routes.txt`, `stops.txt` and `trips.txt` from a GTFS directory.
///
/// Columns are matched by header name; unknown columns are ignored and
/// optional ones default to empty.
pub fn read_feed(dir: &Path) -> Result<Feed, FeedReadError> {
    let routes: Vec<RouteRecord> = read_records(&dir.join(ROUTES_FILE))?;
    let stops: Vec<StopRecord> = read_records(&dir.join(STOPS_FILE))?;
    let trips: Vec<TripRecord> = read_records(&dir.join(TRIPS_FILE))?;

    debug!(
        dir = %dir.display(),
        routes = routes.len(),
        stops = stops.len(),
        trips = trips.len(),
        "Read feed"
    );

    Ok(Feed {
        routes,
        stops,
        trips,
    })
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FeedReadError> {
    let file = File::open(path).map_err(|source| FeedReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| FeedReadError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_feed(dir: &Path, routes: &str, stops: &str, trips: &str) {
        fs::write(dir.join(ROUTES_FILE), routes).unwrap();
        fs::write(dir.join(STOPS_FILE), stops).unwrap();
        fs::write(dir.join(TRIPS_FILE), trips).unwrap();
    }

    #[test]
    fn reads_all_files() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(
            dir.path(),
            "route_id,agency_id,route_short_name,route_long_name,route_type,route_color\n\
             01260426-LW,GO,LW,Lakeshore West,2,\n\
             01260426-KI,GO,KI,Kitchener,2,098137\n",
            "stop_id,stop_name,stop_lat,stop_lon\n\
             UN,Union Station GO,43.645195,-79.3806\n\
             02629,Some Stop,,\n",
            "route_id,service_id,trip_id,trip_headsign\n\
             01260426-LW,S1,T1,LW - Union Station 08:00 - Hamilton GO 09:15\n",
        );

        let feed = read_feed(dir.path()).unwrap();

        assert_eq!(feed.routes.len(), 2);
        assert_eq!(feed.routes[0].route_short_name, "LW");
        assert_eq!(feed.routes[0].route_color, "");
        assert_eq!(feed.routes[1].route_color, "098137");

        assert_eq!(feed.stops.len(), 2);
        assert_eq!(feed.stops[0].stop_id, "UN");
        assert_eq!(feed.stops[0].stop_lat, "43.645195");
        assert_eq!(feed.stops[1].stop_id, "02629");
        assert_eq!(feed.stops[1].stop_lat, "");

        assert_eq!(feed.trips.len(), 1);
        assert_eq!(feed.trips[0].trip_id, "T1");
        assert_eq!(
            feed.trips[0].trip_headsign,
            "LW - Union Station 08:00 - Hamilton GO 09:15"
        );
    }

    #[test]
    fn optional_columns_may_be_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(
            dir.path(),
            "route_id\n21\n",
            "stop_id\n12345\n",
            "trip_id,route_id\nT1,21\n",
        );

        let feed = read_feed(dir.path()).unwrap();
        assert_eq!(feed.routes[0].route_long_name, "");
        assert_eq!(feed.stops[0].stop_name, "");
        assert_eq!(feed.trips[0].trip_headsign, "");
    }

    #[test]
    fn bad_coordinates_do_not_fail_the_read() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(
            dir.path(),
            "route_id\nLW\n",
            "stop_id,stop_name,stop_lat,stop_lon\nUN,Union,n/a,-79.38\n",
            "trip_id,route_id\nT1,LW\n",
        );

        let feed = read_feed(dir.path()).unwrap();
        assert_eq!(feed.stops[0].stop_lat, "n/a");
        assert_eq!(feed.stops[0].stop_lon, "-79.38");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_feed(dir.path()).unwrap_err();
        assert!(matches!(err, FeedReadError::Io { .. }));
        assert!(err.to_string().contains(ROUTES_FILE));
    }

    #[test]
    fn missing_required_column_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(
            dir.path(),
            "route_id\nLW\n",
            "stop_name\nUnion\n",
            "trip_id,route_id\nT1,LW\n",
        );
        let err = read_feed(dir.path()).unwrap_err();
        assert!(matches!(err, FeedReadError::Csv { .. }));
        assert!(err.to_string().contains(STOPS_FILE));
    }
}
