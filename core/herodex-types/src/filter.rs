//! Query filters over hero records.
//!
//! Numeric filters arrive as strings such as `>=60`, `<80` or `100`: an
//! optional comparison prefix followed by a base-10 integer. No prefix means
//! exact equality.

use crate::Stat;
use thiserror::Error;

/// Error returned when a filter expression cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The part after the comparison prefix is not an integer.
    #[error("Invalid numeric value: {0}")]
    InvalidNumber(String),
}

/// How a stat is compared against a filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Exact,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    /// The SQL operator implementing this comparison.
    #[must_use]
    pub const fn sql_operator(self) -> &'static str {
        match self {
            Comparison::Exact => "=",
            Comparison::Gt => ">",
            Comparison::Gte => ">=",
            Comparison::Lt => "<",
            Comparison::Lte => "<=",
        }
    }

    /// Evaluates `lhs <op> rhs`.
    #[must_use]
    pub fn matches(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparison::Exact => lhs == rhs,
            Comparison::Gt => lhs > rhs,
            Comparison::Gte => lhs >= rhs,
            Comparison::Lt => lhs < rhs,
            Comparison::Lte => lhs <= rhs,
        }
    }
}

/// A parsed numeric filter: a comparison and the value to compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatFilter {
    pub comparison: Comparison,
    pub value: i64,
}

impl StatFilter {
    #[must_use]
    pub const fn new(comparison: Comparison, value: i64) -> Self {
        Self { comparison, value }
    }
}

// Two-character prefixes must be tried before their one-character heads.
const PREFIXES: [(&str, Comparison); 4] = [
    (">=", Comparison::Gte),
    ("<=", Comparison::Lte),
    (">", Comparison::Gt),
    ("<", Comparison::Lt),
];

/// Parses a filter expression such as `>=60` into a [`StatFilter`].
///
/// Surrounding whitespace is ignored, both around the whole expression and
/// around the number. The error names the trimmed input.
pub fn parse_filter(raw: &str) -> Result<StatFilter, FilterError> {
    let trimmed = raw.trim();
    let (comparison, number) = PREFIXES
        .iter()
        .find_map(|(prefix, comparison)| {
            trimmed
                .strip_prefix(prefix)
                .map(|rest| (*comparison, rest))
        })
        .unwrap_or((Comparison::Exact, trimmed));

    number
        .trim()
        .parse::<i64>()
        .map(|value| StatFilter::new(comparison, value))
        .map_err(|_| FilterError::InvalidNumber(trimmed.to_string()))
}

/// The set of predicates applied when listing heroes.
///
/// All supplied predicates are combined with logical AND. An empty query
/// matches every hero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroQuery {
    /// Case-insensitive exact match on the hero name.
    pub name: Option<String>,
    /// Numeric predicates, at most one per stat.
    pub stats: Vec<(Stat, StatFilter)>,
}

impl HeroQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to heroes with the given name, ignoring case.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a numeric predicate, replacing any earlier one on the same stat.
    #[must_use]
    pub fn with_stat(mut self, stat: Stat, filter: StatFilter) -> Self {
        self.stats.retain(|(existing, _)| *existing != stat);
        self.stats.push((stat, filter));
        self
    }

    /// Returns true if the query carries no predicates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.stats.is_empty()
    }
}
