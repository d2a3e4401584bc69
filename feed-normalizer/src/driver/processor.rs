//! Applies identifier resolution and label cleaning to a whole feed.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::branding::route_color;
use crate::domain::{FieldKind, RouteId};
use crate::feed::{Feed, RouteRecord, StopRecord, TripRecord};
use crate::normalize::Normalizer;
use crate::resolve::{IdResolver, RouteIdFallback, UnmappedStopCode};

use super::config::ProcessorConfig;
use super::error::FeedError;
use super::output::{NormalizedFeed, NormalizedRoute, NormalizedStop, NormalizedTrip};

/// Normalizes feeds with an injected resolver and rule list.
///
/// Every record is handled on its own, so records are split into batches and
/// the batches run on blocking worker threads in parallel. Routes and stops
/// run together; trips follow once their routes are resolved. The first
/// unmapped stop code ends the run with [`FeedError::UnmappedStop`]; batches
/// still in flight finish in the background and their results are dropped.
pub struct FeedProcessor<R> {
    resolver: Arc<R>,
    normalizer: Arc<Normalizer>,
    fallback: RouteIdFallback,
    config: Arc<ProcessorConfig>,
}

impl<R> Clone for FeedProcessor<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            normalizer: Arc::clone(&self.normalizer),
            fallback: self.fallback,
            config: Arc::clone(&self.config),
        }
    }
}

impl<R: IdResolver + 'static> FeedProcessor<R> {
    pub fn new(resolver: R, normalizer: Normalizer, config: ProcessorConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            normalizer: Arc::new(normalizer),
            fallback: RouteIdFallback,
            config: Arc::new(config),
        }
    }

    /// Normalize every route, stop and trip of a feed.
    pub async fn process(&self, feed: Feed) -> Result<NormalizedFeed, FeedError> {
        let Feed {
            routes,
            stops,
            trips,
        } = feed;

        let route_keys: Vec<String> = routes
            .iter()
            .map(|route| route.route_id.trim().to_string())
            .collect();

        let (routes, stops) = tokio::try_join!(
            self.run(routes, |this, route| Ok(this.normalize_route(route))),
            self.run(stops, |this, stop| Ok(this.normalize_stop(stop)?)),
        )?;

        let trips = self.pair_trip_routes(trips, &route_keys, &routes);
        let trips = self
            .run(trips, |this, (trip, route_id, route_code)| {
                Ok(this.normalize_trip(trip, route_id, route_code))
            })
            .await?;

        info!(
            routes = routes.len(),
            stops = stops.len(),
            trips = trips.len(),
            "Feed normalized"
        );

        Ok(NormalizedFeed {
            agency: self.config.agency.clone(),
            routes,
            stops,
            trips,
        })
    }

    /// Resolve and clean one route. Unmapped codes get a fallback ID.
    pub fn normalize_route(&self, route: RouteRecord) -> NormalizedRoute {
        let code = route.code().to_string();
        let id = self.config.numeric_ids.then(|| self.route_id(&code));

        NormalizedRoute {
            id,
            long_name: self
                .normalizer
                .clean(&route.route_long_name, FieldKind::RouteLongName),
            color: route_color(&code, &route.route_color),
            code,
        }
    }

    /// Resolve and clean one stop.
    pub fn normalize_stop(&self, stop: StopRecord) -> Result<NormalizedStop, UnmappedStopCode> {
        let id = if self.config.numeric_ids {
            let id = self
                .resolver
                .resolve_stop_id(&stop.stop_id)
                .map_err(|err| err.with_stop(stop.describe()))?;
            Some(id)
        } else {
            None
        };

        Ok(NormalizedStop {
            id,
            name: self.normalizer.clean(&stop.stop_name, FieldKind::StopName),
            code: stop.stop_id,
        })
    }

    /// Clean one trip's headsign and attach its route's ID and code.
    pub fn normalize_trip(
        &self,
        trip: TripRecord,
        route_id: Option<RouteId>,
        route_code: String,
    ) -> NormalizedTrip {
        NormalizedTrip {
            headsign: self
                .normalizer
                .clean(&trip.trip_headsign, FieldKind::TripHeadsign),
            trip_id: trip.trip_id,
            route_id,
            route_code,
        }
    }

    /// Pair each trip with the ID and code its route was normalized to.
    ///
    /// `route_keys[i]` is the feed `route_id` of `routes[i]`. A trip whose
    /// route is missing from the routes file resolves its own code.
    fn pair_trip_routes(
        &self,
        trips: Vec<TripRecord>,
        route_keys: &[String],
        routes: &[NormalizedRoute],
    ) -> Vec<(TripRecord, Option<RouteId>, String)> {
        let by_key: HashMap<&str, &NormalizedRoute> =
            route_keys.iter().map(String::as_str).zip(routes).collect();

        trips
            .into_iter()
            .map(|trip| match by_key.get(trip.route_id.trim()) {
                Some(route) => (trip, route.id, route.code.clone()),
                None => {
                    debug!(trip = %trip.trip_id, route = %trip.route_id, "Trip route not in feed");
                    let code = trip.route_code().to_string();
                    let id = self.config.numeric_ids.then(|| self.route_id(&code));
                    (trip, id, code)
                }
            })
            .collect()
    }

    fn route_id(&self, code: &str) -> RouteId {
        match self.resolver.resolve_route_id(code) {
            Ok(id) => id,
            Err(unmapped) => {
                let id = self.fallback.route_id(&unmapped.code);
                warn!(code = %unmapped.code, id = %id, "Unmapped route code, using fallback ID");
                id
            }
        }
    }

    /// Run `f` over `records` in batches on blocking worker threads.
    ///
    /// Output order matches input order. Returns the first error any batch
    /// reports.
    async fn run<T, U, F>(&self, records: Vec<T>, f: F) -> Result<Vec<U>, FeedError>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: Fn(&Self, T) -> Result<U, FeedError> + Copy + Send + 'static,
    {
        let batch_size = self.config.batch_size.max(1);
        let mut handles = Vec::with_capacity(records.len().div_ceil(batch_size));
        let mut records = records.into_iter();

        loop {
            let batch: Vec<T> = records.by_ref().take(batch_size).collect();
            if batch.is_empty() {
                break;
            }
            let this = self.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                batch
                    .into_iter()
                    .map(|record| f(&this, record))
                    .collect::<Result<Vec<U>, FeedError>>()
            }));
        }

        debug!(batches = handles.len(), batch_size, "Dispatched batches");

        let batches = try_join_all(handles.into_iter().map(|handle| async move {
            handle.await.map_err(FeedError::from).and_then(|batch| batch)
        }))
        .await?;

        Ok(batches.into_iter().flatten().collect())
    }
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod tests;
