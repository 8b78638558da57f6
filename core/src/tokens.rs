//! Clause tokens and the request extracted from them.
//!
//! A clause directive such as `$X{IN, DEPT_ID, deptIds}` is split by the
//! enclosing query tokenizer into an identifying token followed by the
//! function arguments. This module only consumes the split tokens.

use smallvec::SmallVec;
use std::borrow::Cow;

use crate::error::{ClauseError, ClauseToken, Result};

/// Tokens of a single clause directive, identifying token first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseTokens<'a> {
    tokens: SmallVec<[Cow<'a, str>; 4]>,
}

impl<'a> ClauseTokens<'a> {
    pub const POSITION_ID: usize = 0;
    pub const POSITION_DB_COLUMN: usize = 1;
    pub const POSITION_PARAMETER: usize = 2;

    /// Creates clause tokens from already split tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the token at `position`, trimmed. Blank tokens count as absent.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.tokens
            .get(position)
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
    }

    /// The identifying token.
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.get(Self::POSITION_ID)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a, S: Into<Cow<'a, str>>> FromIterator<S> for ClauseTokens<'a> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Column and parameter name of a `(NOT) IN` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClauseRequest<'a> {
    pub column: &'a str,
    pub parameter: &'a str,
}

impl<'a> ClauseRequest<'a> {
    /// Creates a request, rejecting blank column or parameter names.
    pub fn new(column: &'a str, parameter: &'a str) -> Result<Self> {
        let column = non_blank(column).ok_or(ClauseError::MissingToken(ClauseToken::Column))?;
        let parameter =
            non_blank(parameter).ok_or(ClauseError::MissingToken(ClauseToken::Parameter))?;
        Ok(Self { column, parameter })
    }

    /// Reads the column and parameter tokens that follow the identifying token.
    pub fn from_tokens(tokens: &'a ClauseTokens<'_>) -> Result<Self> {
        let column = tokens
            .get(ClauseTokens::POSITION_DB_COLUMN)
            .ok_or(ClauseError::MissingToken(ClauseToken::Column))?;
        let parameter = tokens
            .get(ClauseTokens::POSITION_PARAMETER)
            .ok_or(ClauseError::MissingToken(ClauseToken::Parameter))?;
        Ok(Self { column, parameter })
    }
}

fn non_blank(token: &str) -> Option<&str> {
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_positions() {
        let tokens = ClauseTokens::new(["IN", " DEPT_ID ", "deptIds"]);
        assert_eq!(tokens.id(), Some("IN"));
        assert_eq!(tokens.get(ClauseTokens::POSITION_DB_COLUMN), Some("DEPT_ID"));
        assert_eq!(tokens.get(ClauseTokens::POSITION_PARAMETER), Some("deptIds"));
        assert_eq!(tokens.get(3), None);
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_request_from_tokens() {
        let tokens: ClauseTokens<'_> = ["NOTIN", "status", "statuses"].into_iter().collect();
        let request = ClauseRequest::from_tokens(&tokens).unwrap();
        assert_eq!(request.column, "status");
        assert_eq!(request.parameter, "statuses");
    }

    #[test]
    fn test_request_missing_column() {
        let tokens = ClauseTokens::new(["IN"]);
        assert_eq!(
            ClauseRequest::from_tokens(&tokens),
            Err(ClauseError::MissingToken(ClauseToken::Column))
        );
    }

    #[test]
    fn test_request_missing_parameter() {
        let tokens = ClauseTokens::new(["IN", "DEPT_ID", "  "]);
        assert_eq!(
            ClauseRequest::from_tokens(&tokens),
            Err(ClauseError::MissingToken(ClauseToken::Parameter))
        );
        assert_eq!(
            ClauseRequest::new("DEPT_ID", ""),
            Err(ClauseError::MissingToken(ClauseToken::Parameter))
        );
    }

    #[test]
    fn test_missing_token_message() {
        let err = ClauseRequest::new("", "deptIds").unwrap_err();
        assert_eq!(err.to_string(), "SQL IN clause missing DB column token");
    }
}
