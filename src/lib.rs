//! # inclause
//!
//! Renders parameterized `column (NOT) IN (?, ..)` predicates for report
//! queries from a runtime value list.
//!
//! ## Quick Start
//!
//! ```rust
//! use inclause::prelude::*;
//!
//! # fn main() -> inclause::Result<()> {
//! let mut query = QueryBuffer::new(Dialect::SQLite)
//!     .with_parameter("deptIds", ParameterValue::array([Some(10), None, Some(20)]));
//!
//! query.push_sql("SELECT * FROM emp WHERE ");
//! let functions = ClauseFunctions::default();
//! functions.apply(&ClauseTokens::new(["IN", "DEPT_ID", "deptIds"]), &mut query)?;
//!
//! let (sql, params) = query.finish();
//! assert_eq!(sql, "SELECT * FROM emp WHERE DEPT_ID IS NULL OR DEPT_ID IN (?, ?)");
//! assert_eq!(params, vec![Value::Integer(10), Value::Integer(20)]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Empty value lists
//!
//! An unset or empty parameter renders `0 = 0`, so the clause never filters
//! out every row and never produces an invalid `IN ()`.
//!
//! ## Features
//!
//! | Feature   | Description                                         |
//! |-----------|-----------------------------------------------------|
//! | `tracing` | Emit render/error events through `tracing`          |
//! | `serde`   | serde for `Dialect`/`InClauseKind`, JSON parameters |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for clause rendering
pub use inclause_core::error::Result;

/// Placeholder dialect enum
pub use inclause_types::Dialect;

/// Error types
pub mod error {
    pub use inclause_core::error::{ClauseError, ClauseToken};
}

/// Core rendering types.
pub use inclause_core as clause;

/// Value types bound into rendered clauses.
pub use inclause_types as types;

pub use inclause_core::{
    CLAUSE_TRUISM, ClauseFunction, ClauseFunctions, ClauseOutput, ClauseRequest, ClauseTokens,
    DialectExt, InClause, InClauseKind, InOperators, ParameterStore, QueryBuffer,
    QueryClauseContext,
};
pub use inclause_types::{ParameterValue, Value};

/// Commonly used types and traits.
pub mod prelude {
    pub use inclause_core::{
        ClauseError, ClauseFunction, ClauseFunctions, ClauseOutput, ClauseRequest, ClauseTokens,
        InClause, InClauseKind, InOperators, ParameterStore, QueryBuffer, QueryClauseContext,
    };
    pub use inclause_types::{Dialect, ParameterValue, Value};
}
