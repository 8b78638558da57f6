//! Clause functions dispatched by their identifying token.

use core::fmt;

use hashbrown::HashMap;

use crate::clause::InClause;
use crate::context::QueryClauseContext;
use crate::dialect::{Dialect, DialectParseError};
use crate::error::{ClauseError, ClauseToken, Result};
use crate::operators::InClauseKind;
use crate::tokens::ClauseTokens;

/// A function that expands one clause directive into SQL.
pub trait ClauseFunction: Send + Sync {
    /// Appends the clause to `context`, returning the number of positional
    /// placeholders written.
    fn apply(
        &self,
        tokens: &ClauseTokens<'_>,
        context: &mut dyn QueryClauseContext,
    ) -> Result<usize>;
}

impl ClauseFunction for InClause {
    fn apply(
        &self,
        tokens: &ClauseTokens<'_>,
        context: &mut dyn QueryClauseContext,
    ) -> Result<usize> {
        InClause::apply(self, tokens, context)
    }
}

/// Registry of clause functions keyed by identifying token.
pub struct ClauseFunctions {
    functions: HashMap<String, Box<dyn ClauseFunction>>,
}

impl ClauseFunctions {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Creates a registry with `IN` and `NOTIN` using `dialect` placeholders.
    pub fn with_defaults(dialect: Dialect) -> Self {
        let mut functions = Self::new();
        for kind in [InClauseKind::In, InClauseKind::NotIn] {
            functions.register(kind.id(), InClause::new(kind).with_dialect(dialect));
        }
        functions
    }

    /// Like [`ClauseFunctions::with_defaults`], with the dialect given by name
    /// (`sqlite`, `postgresql`/`postgres`/`pg`, `mysql`).
    pub fn for_dialect(name: &str) -> std::result::Result<Self, DialectParseError> {
        Ok(Self::with_defaults(name.parse()?))
    }

    /// Registers `function` under `id`, returning any function it replaces.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        function: impl ClauseFunction + 'static,
    ) -> Option<Box<dyn ClauseFunction>> {
        self.functions.insert(id.into(), Box::new(function))
    }

    pub fn get(&self, id: &str) -> Option<&dyn ClauseFunction> {
        self.functions.get(id).map(|function| &**function)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.functions.contains_key(id)
    }

    /// Dispatches `tokens` to the function registered under its identifying token.
    pub fn apply(
        &self,
        tokens: &ClauseTokens<'_>,
        context: &mut dyn QueryClauseContext,
    ) -> Result<usize> {
        let id = tokens
            .id()
            .ok_or(ClauseError::MissingToken(ClauseToken::Id))?;
        let function = self
            .get(id)
            .ok_or_else(|| ClauseError::UnknownFunction(id.to_owned()))?;
        function.apply(tokens, context)
    }
}

impl Default for ClauseFunctions {
    fn default() -> Self {
        Self::with_defaults(Dialect::default())
    }
}

impl fmt::Debug for ClauseFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("ClauseFunctions")
            .field("functions", &ids)
            .finish()
    }
}
