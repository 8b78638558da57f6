//! Clause functions for reporting SQL queries.
//!
//! The main entry point is [`InClause`], which renders `column (NOT) IN (?, ..)`
//! predicates from a report parameter holding a value list, keeping NULL
//! members out of the bind list.

pub mod clause;
pub mod context;
pub mod dialect;
pub mod error;
pub mod function;
pub mod operators;
pub mod tokens;
pub mod tracing;

pub use clause::{ClauseOutput, InClause};
pub use context::{ParameterStore, QueryBuffer, QueryClauseContext};
pub use dialect::{Dialect, DialectExt, DialectParseError};
pub use error::{ClauseError, ClauseToken, Result};
pub use function::{ClauseFunction, ClauseFunctions};
pub use operators::{CLAUSE_TRUISM, InClauseKind, InOperators};
pub use tokens::{ClauseRequest, ClauseTokens};
