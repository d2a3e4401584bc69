//! A single pattern-substitution rule.

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, Regex};

use crate::domain::FieldKind;

/// What a rule substitutes for each match.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// A `regex` replacement template (`$1`, `${name}` expand).
    Template(&'static str),
    /// Computed from the captures.
    With(fn(&Captures<'_>) -> String),
}

/// A compiled `(pattern, replacement)` pair scoped to some field kinds.
///
/// Applying a rule replaces every non-overlapping match; a label with no
/// match comes back borrowed and unchanged.
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    kinds: &'static [FieldKind],
    regex: Regex,
    replacement: Replacement,
}

impl Rule {
    /// Compile a rule.
    pub fn new(
        name: &'static str,
        kinds: &'static [FieldKind],
        pattern: &str,
        replacement: Replacement,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            kinds,
            regex: Regex::new(pattern)?,
            replacement,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this rule runs for labels of `kind`.
    pub fn applies_to(&self, kind: FieldKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Apply the rule to a label.
    pub fn apply<'a>(&self, label: &'a str) -> Cow<'a, str> {
        match self.replacement {
            Replacement::Template(template) => self.regex.replace_all(label, template),
            Replacement::With(f) => self.regex.replace_all(label, |caps: &Captures<'_>| f(caps)),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("kinds", &self.kinds)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}
