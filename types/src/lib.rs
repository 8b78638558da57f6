//! Shared type definitions for inclause
//!
//! This crate provides the types used across the inclause crates:
//!
//! - [`Dialect`] - placeholder dialect (SQLite, PostgreSQL, MySQL)
//! - [`Value`] - a single bindable value
//! - [`ParameterValue`] - the resolved value of a report parameter
//!
//! # Features
//!
//! - `serde` - serde support for [`Dialect`] and JSON conversions into values

mod dialect;
mod value;

pub use dialect::{Dialect, DialectParseError};
pub use value::{ParameterValue, Value};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Dialect, ParameterValue, Value};
}
