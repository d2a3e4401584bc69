//! Agency display settings.

use serde::Serialize;

/// Agency name shown to riders.
pub const AGENCY_NAME: &str = "GO Transit";

/// Agency color (green, from the agency web site).
pub const AGENCY_COLOR: &str = "387C2B";

/// Display languages, in preference order.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "fr"];

/// Colors for routes whose feed record has none, by route code.
const ROUTE_COLORS: &[(&str, &str)] = &[
    ("LW", "96092B"), // Lakeshore West
    ("MI", "F46F1A"), // Milton
    ("KI", "098137"), // Kitchener
    ("BR", "0B335E"), // Barrie
    ("RH", "0098C9"), // Richmond Hill
    ("ST", "794500"), // Stouffville
    ("LE", "EE3124"), // Lakeshore East
];

/// Agency block of the normalized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgencyInfo {
    pub name: String,
    pub color: String,
    pub languages: Vec<String>,
}

impl Default for AgencyInfo {
    fn default() -> Self {
        Self {
            name: AGENCY_NAME.to_string(),
            color: AGENCY_COLOR.to_string(),
            languages: SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Color for a route: the feed's own color if it has one, otherwise the
/// known color for its code, otherwise `None`.
pub fn route_color(code: &str, feed_color: &str) -> Option<String> {
    let feed_color = feed_color.trim();
    if !feed_color.is_empty() {
        return Some(feed_color.to_uppercase());
    }
    ROUTE_COLORS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, color)| color.to_string())
}
