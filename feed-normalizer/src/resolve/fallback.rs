//! Deterministic IDs for route codes the tables do not know.

use sha2::{Digest, Sha256};

use crate::domain::RouteId;

/// First synthesized route ID. Curated route IDs stay well below this.
pub const FALLBACK_ROUTE_ID_BASE: i64 = 1_000_000;

/// Derives a stable route ID from an unmapped route code.
///
/// The ID is `FALLBACK_ROUTE_ID_BASE` plus the first four bytes of the
/// SHA-256 digest of the code, so the same code yields the same ID on every
/// run and every machine, and synthesized IDs never collide with curated
/// ones. Distinct unmapped codes can still collide with each other.
///
/// # Examples
///
/// ```
/// use feed_normalizer::resolve::{RouteIdFallback, FALLBACK_ROUTE_ID_BASE};
///
/// let id = RouteIdFallback.route_id("ZZ");
/// assert_eq!(id, RouteIdFallback.route_id("ZZ"));
/// assert!(id.get() >= FALLBACK_ROUTE_ID_BASE);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteIdFallback;

impl RouteIdFallback {
    pub fn route_id(&self, code: &str) -> RouteId {
        let digest = Sha256::digest(code.as_bytes());
        let offset = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        RouteId::new(FALLBACK_ROUTE_ID_BASE + i64::from(offset))
    }
}
