use thiserror::Error;

/// Clause token positions that a clause function requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseToken {
    /// The identifying token selecting the clause function
    Id,
    /// The database column the predicate is built on
    Column,
    /// The name of the report parameter holding the value list
    Parameter,
}

impl ClauseToken {
    /// Message reported when this token is absent.
    pub const fn missing_message(self) -> &'static str {
        match self {
            ClauseToken::Id => "SQL clause missing function id token",
            ClauseToken::Column => "SQL IN clause missing DB column token",
            ClauseToken::Parameter => "SQL IN clause missing parameter token",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// A required clause token is absent or blank
    #[error("{}", .0.missing_message())]
    MissingToken(ClauseToken),

    /// The parameter resolved to something other than an array or a collection
    #[error(
        "Invalid type {type_name} for parameter {parameter} used in an IN clause; \
         the value must be an array or a collection."
    )]
    UnsupportedParameterType {
        parameter: String,
        type_name: &'static str,
    },

    /// No clause function is registered under the identifying token
    #[error("Unknown clause function: {0}")]
    UnknownFunction(String),
}

/// Result type for clause rendering
pub type Result<T> = std::result::Result<T, ClauseError>;
