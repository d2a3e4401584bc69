//! Identifier resolution.
//!
//! Maps operator route and stop codes onto stable numeric IDs. Route codes
//! that cannot be mapped are a recoverable fallback signal; stop codes that
//! cannot be mapped are fatal for the feed.

mod error;
mod fallback;
mod go_transit;
mod table;

pub use error::{TableError, UnmappedRouteCode, UnmappedStopCode};
pub use fallback::{FALLBACK_ROUTE_ID_BASE, RouteIdFallback};
pub use go_transit::GoTransitResolver;
pub use table::CodeTable;

use crate::domain::{RouteId, StopId};

/// Resolves operator codes to numeric IDs.
///
/// Implementations must be pure: the same code always yields the same
/// result, and lookups never block. The feed processor calls these from many
/// worker threads at once.
pub trait IdResolver: Send + Sync {
    /// Resolve a route short name.
    ///
    /// Returns [`UnmappedRouteCode`] when the code is neither known nor
    /// numeric; callers fall back to [`RouteIdFallback`].
    fn resolve_route_id(&self, code: &str) -> Result<RouteId, UnmappedRouteCode>;

    /// Resolve a stop code.
    ///
    /// Digit-only codes are their own ID. Returns [`UnmappedStopCode`] for
    /// anything else the implementation cannot map.
    fn resolve_stop_id(&self, code: &str) -> Result<StopId, UnmappedStopCode>;
}
