//! Error types for set cursors.
//!
//! Every operation on [`LinkedSet`](crate::set::LinkedSet) itself is total:
//! duplicates are rejected by returning `false`, and absent elements are a
//! defined no-op. The only failures are on the checked cursor API
//! ([`SetCursor`](crate::set::SetCursor)).

/// Represents an error raised by a [`SetCursor`](crate::set::SetCursor).
///
/// # Examples
///
/// ```rust
/// use linkset::error::IterationError;
///
/// let error = IterationError::UnsupportedOperation { operation: "remove" };
/// assert_eq!(
///     format!("{error}"),
///     "unsupported cursor operation: remove"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationError {
    /// The cursor was advanced past its last element.
    Exhausted,
    /// The cursor does not support the requested operation.
    UnsupportedOperation {
        /// The name of the rejected operation.
        operation: &'static str,
    },
}

impl std::fmt::Display for IterationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(formatter, "no such element: cursor is exhausted"),
            Self::UnsupportedOperation { operation } => {
                write!(formatter, "unsupported cursor operation: {operation}")
            }
        }
    }
}

impl std::error::Error for IterationError {}
