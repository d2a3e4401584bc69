//! GO Transit train label rules.

use crate::domain::FieldKind;

use super::conventions;
use super::rule::{Replacement, Rule};

/// The operator's own brand token, dropped from headsigns and stop names.
pub const BRAND_TOKEN: &str = "go";

const HEADSIGN: &[FieldKind] = &[FieldKind::TripHeadsign];
const STOP: &[FieldKind] = &[FieldKind::StopName];
const HEADSIGN_AND_STOP: &[FieldKind] = &[FieldKind::TripHeadsign, FieldKind::StopName];
const ALL: &[FieldKind] = &FieldKind::ALL;

/// Remove every free-standing, case-insensitive occurrence of `word`.
fn drop_word(
    name: &'static str,
    kinds: &'static [FieldKind],
    word: &str,
) -> Result<Rule, regex::Error> {
    Rule::new(
        name,
        kinds,
        &format!(r"(?i)\b{}\b", regex::escape(word)),
        Replacement::Template(" "),
    )
}

/// The full, ordered rule list.
///
/// Order matters: the route prefix must go before the time range is matched,
/// noise words before the "at" joiner is inserted, and the label pass last.
pub fn rules() -> Result<Vec<Rule>, regex::Error> {
    let mut rules = vec![
        // "LW - Union Station 08:00 - ..." repeats the route code
        Rule::new(
            "route-prefix",
            HEADSIGN,
            r"(?i)^\s*(?:[a-z]{2}\s+-\s+)+",
            Replacement::Template(""),
        )?,
        // "Union Station 08:00 - Hamilton GO 09:15" keeps the destination only
        Rule::new(
            "time-range",
            HEADSIGN,
            r"([\w\s]*)\s+(\d{2}:\d{2})\s+-\s+([\w\s]*)\s+(\d{2}:\d{2})",
            Replacement::Template("${3}"),
        )?,
        drop_word("via", HEADSIGN_AND_STOP, "via")?,
        drop_word("brand", HEADSIGN_AND_STOP, BRAND_TOKEN)?,
        drop_word("rail", HEADSIGN_AND_STOP, "rail")?,
        drop_word("station", HEADSIGN_AND_STOP, "station")?,
        conventions::at_phrase(STOP)?,
    ];
    rules.extend(conventions::numbers(STOP)?);
    rules.push(conventions::street_types(ALL)?);
    rules.extend(conventions::label(ALL)?);
    Ok(rules)
}
