//! Placeholder spelling for rendered clauses.

/// How bind placeholders are written into clause text.
///
/// Operator spellings are configured separately; a dialect only picks between
/// positional `?` markers and PostgreSQL's numbered `$n` markers.
///
/// ```
/// use inclause_types::Dialect;
///
/// let dialect: Dialect = "postgres".parse().unwrap();
/// assert!(dialect.uses_numbered_placeholders());
/// assert!(!Dialect::default().uses_numbered_placeholders());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// `?` placeholders
    #[default]
    SQLite,
    /// `$1, $2, ...` placeholders
    PostgreSQL,
    /// `?` placeholders
    MySQL,
}

impl Dialect {
    #[inline]
    #[must_use]
    pub const fn uses_numbered_placeholders(&self) -> bool {
        matches!(self, Dialect::PostgreSQL)
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    /// Accepts the dialect names case-insensitively, plus `postgres` and `pg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Dialect::SQLite),
            "postgresql" | "postgres" | "pg" => Ok(Dialect::PostgreSQL),
            "mysql" => Ok(Dialect::MySQL),
            _ => Err(DialectParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown dialect name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect `{0}`")]
pub struct DialectParseError(pub String);
