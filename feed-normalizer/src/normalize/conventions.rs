//! Text-cleaning conventions shared by every agency.
//!
//! These are the house rules for how a cleaned label looks: the joiner used
//! for "X at Y" stop names, the short forms of street types, how numbers are
//! written, and the final whitespace/punctuation/capitalization pass.

use regex::Captures;

use crate::domain::FieldKind;

use super::rule::{Replacement, Rule};

/// Joins the two halves of an "X at Y" stop name.
pub const AT_JOINER: &str = " / ";

/// Long street types and their canonical short forms.
pub const STREET_TYPES: &[(&str, &str)] = &[
    ("avenue", "Ave"),
    ("boulevard", "Blvd"),
    ("centre", "Ctr"),
    ("center", "Ctr"),
    ("circle", "Cir"),
    ("court", "Ct"),
    ("crescent", "Cr"),
    ("drive", "Dr"),
    ("expressway", "Expwy"),
    ("highway", "Hwy"),
    ("lane", "Ln"),
    ("parkway", "Pkwy"),
    ("place", "Pl"),
    ("road", "Rd"),
    ("square", "Sq"),
    ("street", "St"),
    ("terrace", "Ter"),
];

/// Spelled-out ordinals and their numeric forms.
pub const ORDINAL_WORDS: &[(&str, &str)] = &[
    ("first", "1st"),
    ("second", "2nd"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
    ("eighth", "8th"),
    ("ninth", "9th"),
    ("tenth", "10th"),
    ("eleventh", "11th"),
    ("twelfth", "12th"),
];

/// Uppercase runs at least this long are treated as shouting, not acronyms.
const SHOUTED_RUN: usize = 4;

fn lookup(table: &[(&str, &'static str)], word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    table
        .iter()
        .find(|(long, _)| *long == lower)
        .map(|(_, short)| *short)
}

/// Alternation of the left-hand words of a table, for a `(?i)\b(...)\b` pattern.
fn alternation(table: &[(&str, &str)]) -> String {
    table
        .iter()
        .map(|(word, _)| *word)
        .collect::<Vec<_>>()
        .join("|")
}

fn street_type(caps: &Captures<'_>) -> String {
    let word = &caps[1];
    lookup(STREET_TYPES, word).map_or_else(|| word.to_string(), str::to_string)
}

fn ordinal_word(caps: &Captures<'_>) -> String {
    let word = &caps[1];
    lookup(ORDINAL_WORDS, word).map_or_else(|| word.to_string(), str::to_string)
}

fn ordinal_suffix(caps: &Captures<'_>) -> String {
    format!("{}{}", &caps[1], caps[2].to_lowercase())
}

fn title_case(caps: &Captures<'_>) -> String {
    let mut chars = caps[0].chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn capitalize_initial(caps: &Captures<'_>) -> String {
    format!("{}{}", &caps[1], caps[2].to_uppercase())
}

/// "X at Y" and "X @ Y" become "X / Y".
pub fn at_phrase(kinds: &'static [FieldKind]) -> Result<Rule, regex::Error> {
    Rule::new(
        "at-phrase",
        kinds,
        r"(?i)\s*(?:\bat\b|@)\s*",
        Replacement::Template(AT_JOINER),
    )
}

/// Ordinal words, ordinal suffix casing, and leading zeros.
pub fn numbers(kinds: &'static [FieldKind]) -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::new(
            "ordinal-words",
            kinds,
            &format!(r"(?i)\b({})\b", alternation(ORDINAL_WORDS)),
            Replacement::With(ordinal_word),
        )?,
        Rule::new(
            "ordinal-suffix",
            kinds,
            r"(?i)\b(\d+)(st|nd|rd|th)\b",
            Replacement::With(ordinal_suffix),
        )?,
        Rule::new(
            "leading-zeros",
            kinds,
            r"(^|\s)0+(\d)",
            Replacement::Template("${1}${2}"),
        )?,
    ])
}

/// Long street types become their short forms.
pub fn street_types(kinds: &'static [FieldKind]) -> Result<Rule, regex::Error> {
    Rule::new(
        "street-types",
        kinds,
        &format!(r"(?i)\b({})\b", alternation(STREET_TYPES)),
        Replacement::With(street_type),
    )
}

/// Final whitespace, punctuation and capitalization pass.
///
/// Runs in order: collapse whitespace, tighten brackets and separators,
/// strip dangling separators at either end (which also trims), title-case
/// shouted words, capitalize word initials.
pub fn label(kinds: &'static [FieldKind]) -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::new("collapse-spaces", kinds, r"\s+", Replacement::Template(" "))?,
        Rule::new("open-bracket", kinds, r"([(\[])\s+", Replacement::Template("$1"))?,
        Rule::new("close-bracket", kinds, r"\s+([)\]])", Replacement::Template("$1"))?,
        Rule::new("separator-space", kinds, r"\s+([,;])", Replacement::Template("$1"))?,
        Rule::new(
            "dangling-separators",
            kinds,
            r"^[\s\-/,&;:]+|[\s\-/,&;:]+$",
            Replacement::Template(""),
        )?,
        Rule::new(
            "shouted-words",
            kinds,
            &format!(r"\p{{Lu}}{{{SHOUTED_RUN},}}"),
            Replacement::With(title_case),
        )?,
        Rule::new(
            "word-initials",
            kinds,
            r"(^|[\s(\[/\-])(\p{Ll})",
            Replacement::With(capitalize_initial),
        )?,
    ])
}
