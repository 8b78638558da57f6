//! Tracing utilities for clause rendering.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event with the rendered column and bound value count.
///
/// ```ignore
/// inclause_trace_render!("DEPT_ID", "IN", bound.len());
/// ```
#[macro_export]
macro_rules! inclause_trace_render {
    ($column:expr, $operator:expr, $bound:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            column = %$column,
            operator = $operator,
            bound = $bound,
            "inclause.render"
        );
    };
}

/// Emit a warn-level event when a clause fails to render.
///
/// ```ignore
/// inclause_trace_error!("deptIds", err);
/// ```
#[macro_export]
macro_rules! inclause_trace_error {
    ($parameter:expr, $err:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(parameter = %$parameter, error = %$err, "inclause.error");
    };
}
