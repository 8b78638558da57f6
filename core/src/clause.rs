//! `(NOT) IN` clause rendering.

use core::fmt::Write;

use inclause_types::{ParameterValue, Value};

use crate::context::QueryClauseContext;
use crate::dialect::{Dialect, DialectExt};
use crate::error::{ClauseError, Result};
use crate::operators::{CLAUSE_TRUISM, InClauseKind, InOperators};
use crate::tokens::{ClauseRequest, ClauseTokens};
use crate::{inclause_trace_error, inclause_trace_render};

/// Rendered SQL text together with the values for its placeholders.
///
/// `bound` holds exactly one value per placeholder in `text`, in the order the
/// placeholders appear.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClauseOutput {
    pub text: String,
    pub bound: Vec<Value>,
}

impl ClauseOutput {
    /// The always-true fragment with nothing bound.
    pub fn truism() -> Self {
        Self {
            text: CLAUSE_TRUISM.to_owned(),
            bound: Vec::new(),
        }
    }

    #[inline]
    pub fn is_truism(&self) -> bool {
        self.text == CLAUSE_TRUISM
    }

    /// Number of positional placeholders this output consumes.
    #[inline]
    pub fn placeholder_count(&self) -> usize {
        self.bound.len()
    }
}

/// Renders `column (NOT) IN (?, ..)` predicates from a report parameter value.
///
/// NULL members never become placeholders. They are expressed with the null
/// operator instead and combined with the list predicate:
///
/// ```
/// use inclause_core::{ClauseRequest, InClause};
/// use inclause_types::ParameterValue;
///
/// let request = ClauseRequest::new("DEPT_ID", "deptIds").unwrap();
/// let values = ParameterValue::array([Some(10), None, Some(20), Some(10)]);
///
/// let output = InClause::IN.render(&request, Some(&values)).unwrap();
/// assert_eq!(output.text, "DEPT_ID IS NULL OR DEPT_ID IN (?, ?, ?)");
/// assert_eq!(output.bound.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InClause {
    operators: InOperators,
    dialect: Dialect,
}

impl InClause {
    pub const IN: Self = Self::new(InClauseKind::In);
    pub const NOT_IN: Self = Self::new(InClauseKind::NotIn);

    pub const fn new(kind: InClauseKind) -> Self {
        Self::with_operators(kind.operators())
    }

    /// Creates a clause with custom operator spellings.
    pub const fn with_operators(operators: InOperators) -> Self {
        Self {
            operators,
            dialect: Dialect::SQLite,
        }
    }

    /// Sets the dialect used to spell placeholders.
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    #[inline]
    pub const fn operators(&self) -> InOperators {
        self.operators
    }

    #[inline]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Renders the clause with placeholders numbered from 1.
    pub fn render(
        &self,
        request: &ClauseRequest<'_>,
        source: Option<&ParameterValue>,
    ) -> Result<ClauseOutput> {
        self.render_at(request, source, 1)
    }

    /// Renders the clause with numbered placeholders starting at `first_index`.
    ///
    /// `first_index` only matters for dialects with numbered placeholders.
    /// Indices saturate at `usize::MAX`.
    pub fn render_at(
        &self,
        request: &ClauseRequest<'_>,
        source: Option<&ParameterValue>,
        first_index: usize,
    ) -> Result<ClauseOutput> {
        let Some(values) = list_values(request.parameter, source)? else {
            return Ok(ClauseOutput::truism());
        };
        if values.is_empty() {
            return Ok(ClauseOutput::truism());
        }

        let column = request.column;
        let mut null_found = false;
        let mut list = String::new();
        let mut bound = Vec::new();

        for value in values {
            if value.is_null() {
                null_found = true;
                continue;
            }
            if bound.is_empty() {
                let _ = write!(list, "{} {} (", column, self.operators.in_operator);
            } else {
                list.push_str(", ");
            }
            list.push_str(&self.dialect.render_placeholder(first_index.saturating_add(bound.len())));
            bound.push(value.clone());
        }

        let mut text = String::new();
        if null_found {
            let _ = write!(text, "{} {}", column, self.operators.null_operator);
        }
        if !bound.is_empty() {
            list.push(')');
            if null_found {
                text.push(' ');
                text.push_str(self.operators.combinator);
                text.push(' ');
            }
            text.push_str(&list);
        }
        if text.is_empty() {
            return Ok(ClauseOutput::truism());
        }

        inclause_trace_render!(column, self.operators.in_operator, bound.len());
        Ok(ClauseOutput { text, bound })
    }

    /// Resolves the clause tokens against `context`, appends the rendered
    /// fragment to its query buffer and registers the bound values.
    ///
    /// Returns the number of positional placeholders written. Nothing is
    /// written when rendering fails.
    pub fn apply<C>(&self, tokens: &ClauseTokens<'_>, context: &mut C) -> Result<usize>
    where
        C: QueryClauseContext + ?Sized,
    {
        let request = ClauseRequest::from_tokens(tokens)?;
        let source = context.parameter_value(request.parameter);
        let output = match self.render_at(&request, source, context.next_placeholder_index()) {
            Ok(output) => output,
            Err(err) => {
                inclause_trace_error!(request.parameter, err);
                return Err(err);
            }
        };

        let count = output.placeholder_count();
        context.query_buffer().push_str(&output.text);
        if count > 0 {
            context.add_query_multi_parameters(request.parameter, output.bound);
        }
        Ok(count)
    }
}

impl Default for InClause {
    fn default() -> Self {
        Self::IN
    }
}

impl From<InClauseKind> for InClause {
    fn from(kind: InClauseKind) -> Self {
        Self::new(kind)
    }
}

/// Elements of an array or collection parameter; `None` when the parameter is unset.
fn list_values<'v>(
    parameter: &str,
    source: Option<&'v ParameterValue>,
) -> Result<Option<&'v [Value]>> {
    match source {
        None => Ok(None),
        Some(value) if value.is_null() => Ok(None),
        Some(value) => value.as_values().map(Some).ok_or_else(|| {
            ClauseError::UnsupportedParameterType {
                parameter: parameter.to_owned(),
                type_name: value.type_name(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ClauseRequest<'static> {
        ClauseRequest::new("DEPT_ID", "deptIds").unwrap()
    }

    #[test]
    fn test_absent_source_is_truism() {
        let output = InClause::IN.render(&request(), None).unwrap();
        assert_eq!(output, ClauseOutput::truism());
        assert!(output.is_truism());

        let output = InClause::NOT_IN
            .render(&request(), Some(&ParameterValue::Null))
            .unwrap();
        assert_eq!(output.text, "0 = 0");
        assert!(output.bound.is_empty());
    }

    #[test]
    fn test_empty_source_is_truism() {
        let empty = ParameterValue::Array(Vec::new());
        let output = InClause::IN.render(&request(), Some(&empty)).unwrap();
        assert_eq!(output.text, "0 = 0");
        assert_eq!(output.placeholder_count(), 0);
    }

    #[test]
    fn test_mixed_values_in() {
        let values = ParameterValue::array([Some(10), None, Some(20), Some(10)]);
        let output = InClause::IN.render(&request(), Some(&values)).unwrap();
        assert_eq!(output.text, "DEPT_ID IS NULL OR DEPT_ID IN (?, ?, ?)");
        assert_eq!(
            output.bound,
            vec![Value::Integer(10), Value::Integer(20), Value::Integer(10)]
        );
    }

    #[test]
    fn test_mixed_values_not_in() {
        let values = ParameterValue::collection([Value::from("a"), Value::Null]);
        let output = InClause::NOT_IN.render(&request(), Some(&values)).unwrap();
        assert_eq!(output.text, "DEPT_ID IS NOT NULL AND DEPT_ID NOT IN (?)");
        assert_eq!(output.bound, vec![Value::from("a")]);
    }

    #[test]
    fn test_only_nulls() {
        let values = ParameterValue::Array(vec![Value::Null, Value::Null]);
        let output = InClause::IN.render(&request(), Some(&values)).unwrap();
        assert_eq!(output.text, "DEPT_ID IS NULL");
        assert!(output.bound.is_empty());
    }

    #[test]
    fn test_numbered_placeholders() {
        let clause = InClause::IN.with_dialect(Dialect::PostgreSQL);
        let values = ParameterValue::array([1, 2]);
        let output = clause.render_at(&request(), Some(&values), 3).unwrap();
        assert_eq!(output.text, "DEPT_ID IN ($3, $4)");
    }

    #[test]
    fn test_first_index_near_max() {
        let values = ParameterValue::array([1, 2]);
        let output = InClause::IN.render_at(&request(), Some(&values), usize::MAX).unwrap();
        assert_eq!(output.text, "DEPT_ID IN (?, ?)");

        let output = InClause::IN
            .with_dialect(Dialect::PostgreSQL)
            .render_at(&request(), Some(&values), usize::MAX)
            .unwrap();
        assert_eq!(output.text, format!("DEPT_ID IN (${0}, ${0})", usize::MAX));
        assert_eq!(output.placeholder_count(), 2);
    }

    #[test]
    fn test_scalar_is_unsupported() {
        let scalar = ParameterValue::from(Value::from("abc"));
        let err = InClause::IN.render(&request(), Some(&scalar)).unwrap_err();
        assert_eq!(
            err,
            ClauseError::UnsupportedParameterType {
                parameter: "deptIds".to_string(),
                type_name: "text",
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid type text for parameter deptIds used in an IN clause; \
             the value must be an array or a collection."
        );
    }

    #[test]
    fn test_custom_operators() {
        let clause = InClause::with_operators(InOperators::new("in", "is null", "or"));
        let values = ParameterValue::array([Some(1), None]);
        let output = clause.render(&request(), Some(&values)).unwrap();
        assert_eq!(output.text, "DEPT_ID is null or DEPT_ID in (?)");
    }
}
