//! Boundaries between clause functions and the query being assembled.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use inclause_types::{ParameterValue, Value};

use crate::dialect::{Dialect, DialectExt};

/// Resolves report parameters by name.
///
/// Unknown names resolve to `None`, which clause functions treat like an unset
/// parameter.
pub trait ParameterStore {
    fn parameter_value(&self, name: &str) -> Option<&ParameterValue>;
}

impl ParameterStore for HashMap<String, ParameterValue> {
    fn parameter_value(&self, name: &str) -> Option<&ParameterValue> {
        self.get(name)
    }
}

impl ParameterStore for BTreeMap<String, ParameterValue> {
    fn parameter_value(&self, name: &str) -> Option<&ParameterValue> {
        self.get(name)
    }
}

/// The query a clause function writes into.
pub trait QueryClauseContext: ParameterStore {
    /// Text of the statement assembled so far. Clause functions only append.
    fn query_buffer(&mut self) -> &mut String;

    /// Declares that `parameter` contributes `values.len()` positional values,
    /// in order, for the placeholders just written.
    fn add_query_multi_parameters(&mut self, parameter: &str, values: Vec<Value>);

    /// 1-based index of the next placeholder in the statement.
    fn next_placeholder_index(&self) -> usize {
        1
    }
}

/// A query under construction, with its report parameters and bind values.
#[derive(Debug, Clone, Default)]
pub struct QueryBuffer {
    dialect: Dialect,
    parameters: HashMap<String, ParameterValue>,
    sql: String,
    params: Vec<Value>,
    multi_parameters: Vec<(String, usize)>,
}

impl QueryBuffer {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Adds a report parameter, builder style.
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.set_parameter(name, value);
        self
    }

    /// Sets a report parameter, returning the previous value.
    pub fn set_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Option<ParameterValue> {
        self.parameters.insert(name.into(), value.into())
    }

    /// Appends raw SQL text.
    pub fn push_sql(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Appends a single placeholder bound to `value`.
    pub fn push_param(&mut self, value: impl Into<Value>) -> &mut Self {
        let placeholder = self.dialect.render_placeholder(self.params.len() + 1);
        self.sql.push_str(&placeholder);
        self.params.push(value.into());
        self
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[inline]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    #[inline]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// `(parameter, count)` declarations made by clause functions, in order.
    #[inline]
    pub fn multi_parameters(&self) -> &[(String, usize)] {
        &self.multi_parameters
    }

    /// Consumes the buffer, returning the SQL text and its bind values.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

impl ParameterStore for QueryBuffer {
    fn parameter_value(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.get(name)
    }
}

impl QueryClauseContext for QueryBuffer {
    fn query_buffer(&mut self) -> &mut String {
        &mut self.sql
    }

    fn add_query_multi_parameters(&mut self, parameter: &str, values: Vec<Value>) {
        self.multi_parameters
            .push((parameter.to_owned(), values.len()));
        self.params.extend(values);
    }

    fn next_placeholder_index(&self) -> usize {
        self.params.len() + 1
    }
}
