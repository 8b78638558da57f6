//! Runtime values bound into rendered clauses.
//!
//! [`Value`] is a single bindable element. [`ParameterValue`] is what a report
//! parameter resolves to at render time: absent, a sequence of values, or some
//! other shape that a clause may reject.

use std::collections::{BTreeSet, VecDeque};

//------------------------------------------------------------------------------
// Value Definition
//------------------------------------------------------------------------------

/// A single value that can be bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub enum Value {
    /// NULL value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value
    Text(String),
    /// Binary value
    Blob(Vec<u8>),
}

impl Value {
    /// Returns true if this value is NULL.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the runtime type, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }
}

//------------------------------------------------------------------------------
// From<T> implementations
//------------------------------------------------------------------------------

macro_rules! impl_from_int_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }

            impl From<&$ty> for Value {
                #[inline]
                fn from(value: &$ty) -> Self {
                    Value::Integer(i64::from(*value))
                }
            }
        )*
    };
}

macro_rules! impl_from_float_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Real(f64::from(value))
                }
            }

            impl From<&$ty> for Value {
                #[inline]
                fn from(value: &$ty) -> Self {
                    Value::Real(f64::from(*value))
                }
            }
        )*
    };
}

impl_from_int_for_value!(i8, i16, i32, i64, u8, u16, u32);
impl_from_float_for_value!(f32, f64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(value.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

//------------------------------------------------------------------------------
// ParameterValue Definition
//------------------------------------------------------------------------------

/// The resolved value of a named report parameter.
///
/// Only [`ParameterValue::Array`] and [`ParameterValue::Collection`] describe a
/// value list. `Null` (and a scalar NULL) mean the parameter is not set.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParameterValue {
    /// Parameter is set to NULL
    #[default]
    Null,
    /// A single value
    Scalar(Value),
    /// An ordered, array-like sequence
    Array(Vec<Value>),
    /// A collection; elements are kept in iteration order
    Collection(Vec<Value>),
    /// Key/value pairs
    Map(Vec<(String, Value)>),
}

impl ParameterValue {
    /// Builds an array-like parameter from anything iterable.
    pub fn array<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        ParameterValue::Array(values.into_iter().map(Into::into).collect())
    }

    /// Builds a collection-like parameter from anything iterable.
    pub fn collection<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        ParameterValue::Collection(values.into_iter().map(Into::into).collect())
    }

    /// Returns true when the parameter carries no value at all.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null | ParameterValue::Scalar(Value::Null))
    }

    /// Returns the elements if this is an array or a collection.
    #[inline]
    pub fn as_values(&self) -> Option<&[Value]> {
        match self {
            ParameterValue::Array(values) | ParameterValue::Collection(values) => {
                Some(values.as_slice())
            }
            _ => None,
        }
    }

    /// Name of the runtime type, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::Null => "null",
            ParameterValue::Scalar(value) => value.type_name(),
            ParameterValue::Array(_) => "array",
            ParameterValue::Collection(_) => "collection",
            ParameterValue::Map(_) => "map",
        }
    }
}

impl From<Value> for ParameterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ParameterValue::Null,
            other => ParameterValue::Scalar(other),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for ParameterValue {
    fn from(values: Vec<T>) -> Self {
        ParameterValue::array(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for ParameterValue {
    fn from(values: [T; N]) -> Self {
        ParameterValue::array(values)
    }
}

impl<T: Into<Value>> From<VecDeque<T>> for ParameterValue {
    fn from(values: VecDeque<T>) -> Self {
        ParameterValue::collection(values)
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for ParameterValue {
    fn from(values: BTreeSet<T>) -> Self {
        ParameterValue::collection(values)
    }
}

impl<T: Into<Value>> FromIterator<T> for ParameterValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ParameterValue::collection(iter)
    }
}

//------------------------------------------------------------------------------
// JSON conversions
//------------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Text(n.to_string()), Value::Real),
            },
            Json::String(s) => Value::Text(s),
            nested @ (Json::Array(_) | Json::Object(_)) => Value::Text(nested.to_string()),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for ParameterValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => ParameterValue::Null,
            Json::Array(items) => ParameterValue::array(items),
            Json::Object(fields) => ParameterValue::Map(
                fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
            scalar => ParameterValue::Scalar(Value::from(scalar)),
        }
    }
}
