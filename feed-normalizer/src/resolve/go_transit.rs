//! GO Transit train code tables.

use crate::domain::{RouteId, StopId, parse_digits};

use super::IdResolver;
use super::error::{TableError, UnmappedRouteCode, UnmappedStopCode};
use super::table::CodeTable;

/// Route short name → route ID.
const ROUTE_CODES: &[(&str, i64)] = &[
    ("LW", 1), // Lakeshore West
    ("MI", 2), // Milton
    ("KI", 3), // Kitchener
    ("BR", 5), // Barrie
    ("RH", 6), // Richmond Hill
    ("ST", 7), // Stouffville
    ("LE", 9), // Lakeshore East
];

/// Second codes the operator publishes for an existing line.
const ROUTE_CODE_ALIASES: &[(&str, &str)] = &[
    ("GT", "KI"), // Kitchener (Georgetown)
];

/// Station code → stop ID.
const STOP_CODES: &[(&str, i64)] = &[
    ("UN", 9021),
    ("EX", 9022),
    ("BL", 9023),
    ("MI", 9031),
    ("KP", 9032),
    ("LO", 9033),
    ("WE", 9041),
    ("ET", 9042),
    ("OR", 9051),
    ("OL", 9052),
    ("DA", 9061),
    ("SC", 9062),
    ("EG", 9063),
    ("AG", 9071),
    ("GU", 9081),
    ("RO", 9091),
    ("PO", 9111),
    ("DI", 9113),
    ("CO", 9114),
    ("CL", 9121),
    ("ER", 9123),
    ("OA", 9131),
    ("BO", 9141),
    ("AP", 9151),
    ("BU", 9161),
    ("AL", 9171),
    ("HA", 9181),
    ("YO", 9191),
    ("SR", 9211),
    ("ME", 9221),
    ("LS", 9231),
    ("ML", 9241),
    ("KI", 9271),
    ("MA", 9311),
    ("BE", 9321),
    ("BR", 9331),
    ("MO", 9341),
    ("GE", 9351),
    ("GO", 2629),
    ("AC", 9371),
    ("GL", 9391),
    ("EA", 9441),
    ("LA", 9601),
    ("RI", 9612),
    ("MP", 9613),
    ("RU", 9614),
    ("KC", 9621),
    ("AU", 9631),
    ("NE", 9641),
    ("BD", 9651),
    ("BA", 9681),
    ("AD", 9691),
    ("MK", 9701),
    ("UI", 9712),
    ("MR", 9721),
    ("CE", 9722),
    ("MJ", 9731),
    ("ST", 9741),
    ("LI", 9742),
    ("KE", 9771),
    ("PIN", 9911),
    ("AJ", 9921),
    ("WH", 9939),
    ("OS", 9941),
    // Codes added after four-digit station numbering ran out
    ("WR", 100001),
    ("USBT", 100002),
    ("NI", 100003),
    ("PA", 100004),
    ("SCTH", 100005),
    ("DW", 100006),
    ("BM", 100007),
    ("LN", 100008),
    ("SM", 100009),
    ("SF", 100010),
];

/// Resolves GO Transit train route and stop codes.
///
/// Route codes fall back to a numeric parse and then report
/// [`UnmappedRouteCode`]; stop codes are numeric pass-through or table
/// lookups, and anything else is [`UnmappedStopCode`].
///
/// # Examples
///
/// ```
/// use feed_normalizer::resolve::{GoTransitResolver, IdResolver};
///
/// let resolver = GoTransitResolver::new().unwrap();
/// assert_eq!(resolver.resolve_route_id("LW").unwrap().get(), 1);
/// assert_eq!(resolver.resolve_stop_id("UN").unwrap().get(), 9021);
/// assert_eq!(resolver.resolve_stop_id("00123").unwrap().get(), 123);
/// assert!(resolver.resolve_stop_id("ZZZZZ").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GoTransitResolver {
    routes: CodeTable,
    stops: CodeTable,
}

impl GoTransitResolver {
    /// Build and validate both tables.
    pub fn new() -> Result<Self, TableError> {
        let routes = CodeTable::new("route", ROUTE_CODES)?.with_aliases(ROUTE_CODE_ALIASES)?;
        let stops = CodeTable::new("stop", STOP_CODES)?;
        Ok(Self { routes, stops })
    }

    /// The route code table.
    pub fn routes(&self) -> &CodeTable {
        &self.routes
    }

    /// The stop code table.
    pub fn stops(&self) -> &CodeTable {
        &self.stops
    }
}

impl IdResolver for GoTransitResolver {
    fn resolve_route_id(&self, code: &str) -> Result<RouteId, UnmappedRouteCode> {
        self.routes
            .get(code)
            .or_else(|| parse_digits(code))
            .map(RouteId::new)
            .ok_or_else(|| UnmappedRouteCode {
                code: code.to_string(),
            })
    }

    fn resolve_stop_id(&self, code: &str) -> Result<StopId, UnmappedStopCode> {
        parse_digits(code)
            .or_else(|| self.stops.get(code))
            .map(StopId::new)
            .ok_or_else(|| UnmappedStopCode::new(code))
    }
}
