use thiserror::Error;

pub type Result<T> = std::result::Result<T, RankError>;

/// Errors from ranking and extremum selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// No dispatch rule accepts the value.
    #[error("Unsupported value kind: {type_name}")]
    UnsupportedValueKind { type_name: String },

    /// A repeating time-span sequence produced no instants.
    #[error("Time-span sequence is empty")]
    EmptySequence,

    /// `greatest`/`least` called with fewer than two values.
    #[error("Expected at least 2 values, got {got}")]
    Arity { got: usize },

    #[error("Time span overflows the reference instant")]
    SpanOutOfRange,
}

impl RankError {
    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        RankError::UnsupportedValueKind {
            type_name: type_name.into(),
        }
    }
}
