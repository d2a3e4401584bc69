//! Label normalization.
//!
//! A [`Normalizer`] owns an ordered list of [`Rule`]s and applies every rule
//! scoped to a label's [`FieldKind`], in order, to produce the cleaned label.

pub mod conventions;
mod go_transit;
mod rule;

pub use go_transit::{BRAND_TOKEN, rules as go_transit_rules};
pub use rule::{Replacement, Rule};

use tracing::warn;

use crate::domain::FieldKind;

/// Upper bound on full passes over the rule list for one label.
const MAX_PASSES: usize = 8;

/// Cleans free-text labels with an ordered rule list.
///
/// Cleaning is deterministic and idempotent. A rule can expose text an
/// earlier rule would have matched (dropping "GO" from "GO LW - Union" leaves
/// a route prefix at the front), so the full list is re-applied until the
/// label stops changing.
///
/// # Examples
///
/// ```
/// use feed_normalizer::domain::FieldKind;
/// use feed_normalizer::normalize::Normalizer;
///
/// let normalizer = Normalizer::go_transit().unwrap();
/// assert_eq!(
///     normalizer.clean("LW - Union Station 08:00 - Hamilton GO 09:15", FieldKind::TripHeadsign),
///     "Hamilton"
/// );
/// assert_eq!(normalizer.clean("Oakville GO Station", FieldKind::StopName), "Oakville");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<Rule>,
}

impl Normalizer {
    /// Create a normalizer from an ordered rule list.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The GO Transit train rule list.
    pub fn go_transit() -> Result<Self, regex::Error> {
        Ok(Self::new(go_transit_rules()?))
    }

    /// Clean a label of the given kind.
    pub fn clean(&self, label: &str, kind: FieldKind) -> String {
        let mut current = self.apply_once(label, kind);
        for _ in 1..MAX_PASSES {
            let next = self.apply_once(&current, kind);
            if next == current {
                return current;
            }
            current = next;
        }
        warn!(
            label,
            kind = %kind,
            passes = MAX_PASSES,
            "Label still changing after max passes"
        );
        current
    }

    /// One pass over every rule scoped to `kind`.
    fn apply_once(&self, label: &str, kind: FieldKind) -> String {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(kind))
            .fold(label.to_string(), |acc, rule| rule.apply(&acc).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::go_transit().unwrap()
    }

    fn headsign(s: &str) -> String {
        normalizer().clean(s, FieldKind::TripHeadsign)
    }

    fn stop(s: &str) -> String {
        normalizer().clean(s, FieldKind::StopName)
    }

    fn route(s: &str) -> String {
        normalizer().clean(s, FieldKind::RouteLongName)
    }

    #[test]
    fn headsign_collapses_time_range() {
        assert_eq!(
            headsign("LW - Union Station 08:00 - Hamilton GO 09:15"),
            "Hamilton"
        );
        assert_eq!(
            headsign("Union Station 17:05 - Oshawa GO 18:02"),
            "Oshawa"
        );
    }

    #[test]
    fn headsign_strips_route_prefix() {
        assert_eq!(headsign("LE - Oshawa GO"), "Oshawa");
        assert_eq!(headsign("ki - Kitchener GO"), "Kitchener");
        assert_eq!(headsign("  BR  - Allandale Waterfront GO"), "Allandale Waterfront");
    }

    #[test]
    fn headsign_without_noise_is_kept() {
        assert_eq!(headsign("Niagara Falls"), "Niagara Falls");
        assert_eq!(headsign("Union Station"), "Union");
    }

    #[test]
    fn headsign_drops_noise_words() {
        assert_eq!(headsign("Union Station via Rail"), "Union");
        assert_eq!(headsign("Union via Pearson"), "Union Pearson");
        assert_eq!(headsign("KI - Kitchener GO Rail"), "Kitchener");
        // Whole words only
        assert_eq!(headsign("Railside Viaduct"), "Railside Viaduct");
    }

    #[test]
    fn headsign_prefix_exposed_by_brand_removal() {
        assert_eq!(headsign("GO LW - Union Station"), "Union");
    }

    #[test]
    fn stop_drops_noise_words() {
        assert_eq!(stop("Oakville GO Station"), "Oakville");
        assert_eq!(stop("Union Station Rail"), "Union");
        assert_eq!(stop("Kipling GO via Dundas"), "Kipling Dundas");
        assert_eq!(stop("GOLF Road"), "Golf Rd");
    }

    #[test]
    fn stop_joins_at_phrase() {
        assert_eq!(stop("Bramalea GO at Steeles"), "Bramalea / Steeles");
        assert_eq!(stop("King St @ Yonge St"), "King St / Yonge St");
        assert_eq!(stop("Oakville at GO Station"), "Oakville");
    }

    #[test]
    fn stop_cleans_numbers() {
        assert_eq!(stop("First Avenue at 007"), "1st Ave / 7");
        assert_eq!(stop("HIGHWAY 407 TERMINAL"), "Hwy 407 Terminal");
        assert_eq!(stop("2ND LINE"), "2nd Line");
    }

    #[test]
    fn route_long_name() {
        assert_eq!(route("Lakeshore West"), "Lakeshore West");
        assert_eq!(route("  LAKESHORE   EAST "), "Lakeshore East");
        assert_eq!(route("Union Street Line"), "Union St Line");
        // Brand stays in route names
        assert_eq!(route("GO Express"), "GO Express");
    }

    #[test]
    fn empty_label() {
        for kind in FieldKind::ALL {
            assert_eq!(normalizer().clean("", kind), "");
            assert_eq!(normalizer().clean("   ", kind), "");
        }
    }

    #[test]
    fn only_scoped_rules_run() {
        // Stop-only rules leave headsigns alone
        assert_eq!(headsign("Bramalea at Steeles"), "Bramalea At Steeles");
        assert_eq!(headsign("First Street 007"), "First St 007");
        // Headsign-only rules leave stop names alone
        assert_eq!(stop("LW - Union"), "LW - Union");
    }

    #[test]
    fn custom_rule_list() {
        const STOPS: &[FieldKind] = &[FieldKind::StopName];
        let rules = vec![Rule::new("x", STOPS, "x", Replacement::Template("y")).unwrap()];
        let normalizer = Normalizer::new(rules);
        assert_eq!(normalizer.clean("xx", FieldKind::StopName), "yy");
        assert_eq!(normalizer.clean("xx", FieldKind::TripHeadsign), "xx");
    }

    #[test]
    fn clean_is_idempotent_on_samples() {
        let samples = [
            "LW - Union Station 08:00 - Hamilton GO 09:15",
            "GO LW - KI - Union",
            "Oakville GO Station",
            "First Street at 05 Third Avenue",
            "ß GO Station",
            "  - / Union / - ",
            "UNION STATION RAIL VIA GO",
            "Ab - 00:00 - Cd 99:99",
        ];
        let n = normalizer();
        for sample in samples {
            for kind in FieldKind::ALL {
                let once = n.clean(sample, kind);
                assert_eq!(n.clean(&once, kind), once, "{kind}: {sample:?}");
            }
        }
    }
}
