//! Operator spellings for the `IN` and `NOT IN` clause variants.

use core::fmt;

/// Always-true fragment emitted when there is nothing to filter on.
pub const CLAUSE_TRUISM: &str = "0 = 0";

pub const OPERATOR_IN: &str = "IN";
pub const OPERATOR_NOT_IN: &str = "NOT IN";
pub const OPERATOR_IS_NULL: &str = "IS NULL";
pub const OPERATOR_IS_NOT_NULL: &str = "IS NOT NULL";
pub const OPERATOR_OR: &str = "OR";
pub const OPERATOR_AND: &str = "AND";

/// The three operators a `(NOT) IN` clause is rendered with.
///
/// `NOT IN` has to pair `IS NOT NULL` with `AND`: a NULL member in the value
/// list must exclude NULL rows while still excluding the listed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InOperators {
    pub in_operator: &'static str,
    pub null_operator: &'static str,
    pub combinator: &'static str,
}

impl InOperators {
    pub const IN: Self = Self::new(OPERATOR_IN, OPERATOR_IS_NULL, OPERATOR_OR);
    pub const NOT_IN: Self = Self::new(OPERATOR_NOT_IN, OPERATOR_IS_NOT_NULL, OPERATOR_AND);

    pub const fn new(
        in_operator: &'static str,
        null_operator: &'static str,
        combinator: &'static str,
    ) -> Self {
        Self {
            in_operator,
            null_operator,
            combinator,
        }
    }
}

/// Clause variant, selecting its operators as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum InClauseKind {
    #[default]
    In,
    NotIn,
}

impl InClauseKind {
    #[inline]
    pub const fn operators(self) -> InOperators {
        match self {
            InClauseKind::In => InOperators::IN,
            InClauseKind::NotIn => InOperators::NOT_IN,
        }
    }

    /// The identifying token this variant is registered under.
    #[inline]
    pub const fn id(self) -> &'static str {
        match self {
            InClauseKind::In => "IN",
            InClauseKind::NotIn => "NOTIN",
        }
    }
}

impl fmt::Display for InClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<InClauseKind> for InOperators {
    fn from(kind: InClauseKind) -> Self {
        kind.operators()
    }
}
