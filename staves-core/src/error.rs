use thiserror::Error;

/// Misuse of the score algebra or of an attribute accessor.
///
/// Reading an attribute that is not set is never an error; it resolves to
/// [`Value::Nil`](crate::types::Value::Nil).
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreError {
    /// Repetition count was not an integer
    #[error("repetition count must be an Integer, got {found}")]
    NonIntegerCount { found: String },

    /// Repetition count was a negative integer
    #[error("repetition count must be non-negative, got {0}")]
    NegativeCount(i64),

    /// Attribute accessor called with an arity/block combination it does not support
    #[error("unsupported access to attribute `{key}` with {args} argument(s), block given: {block}")]
    UnsupportedAccess { key: String, args: usize, block: bool },
}

pub type Result<T> = std::result::Result<T, ScoreError>;
