//! Placeholder rendering on top of the shared [`Dialect`].

use std::borrow::Cow;

pub use inclause_types::{Dialect, DialectParseError};

/// Writes bind placeholders for a dialect.
pub trait DialectExt {
    /// Placeholder for the 1-based position `index`: `$index` when the dialect
    /// numbers its placeholders, `?` otherwise.
    fn render_placeholder(&self, index: usize) -> Cow<'static, str>;
}

impl DialectExt for Dialect {
    #[inline]
    fn render_placeholder(&self, index: usize) -> Cow<'static, str> {
        if self.uses_numbered_placeholders() {
            Cow::Owned(format!("${index}"))
        } else {
            Cow::Borrowed("?")
        }
    }
}
