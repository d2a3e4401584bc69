//! Identifier resolution error types.

use std::fmt;

/// A route code that is neither in the route table nor numeric.
///
/// This is a fallback signal, not a failure: the caller derives a default ID
/// and carries on with the rest of the feed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unmapped route code {code:?}")]
pub struct UnmappedRouteCode {
    pub code: String,
}

/// A stop code that is neither numeric nor in the stop table.
///
/// Fatal for the feed being processed: stop identity drives trip sequencing
/// downstream, so no ID is synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedStopCode {
    pub code: String,
    /// Description of the originating stop record, when the caller has one.
    pub stop: Option<String>,
}

impl UnmappedStopCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            stop: None,
        }
    }

    /// Attach a description of the stop record the code came from.
    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop = Some(stop.into());
        self
    }
}

impl fmt::Display for UnmappedStopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unmapped stop code {:?}", self.code)?;
        if let Some(stop) = &self.stop {
            write!(f, " ({stop})")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnmappedStopCode {}

/// Errors building a code table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The same code appears twice
    #[error("{table} table: duplicate code {code:?}")]
    DuplicateCode { table: &'static str, code: String },

    /// Two codes map to the same ID
    #[error("{table} table: codes {first:?} and {second:?} both map to {id}")]
    DuplicateId {
        table: &'static str,
        id: i64,
        first: String,
        second: String,
    },

    /// A digit-only code would be shadowed by numeric pass-through
    #[error("{table} table: code {code:?} is numeric")]
    NumericCode { table: &'static str, code: String },

    /// An alias points at a code the table does not contain
    #[error("{table} table: alias {alias:?} targets unknown code {target:?}")]
    UnknownAliasTarget {
        table: &'static str,
        alias: String,
        target: String,
    },

    /// An alias reuses a primary code
    #[error("{table} table: alias {alias:?} shadows a primary code")]
    AliasShadowsCode { table: &'static str, alias: String },
}
