use thiserror::Error;

use crate::settings::Field;

/// All errors produced by the typography tuner.
#[derive(Debug, Error)]
pub enum TuneError {
    /// A raw control value failed to parse or named an unknown option.
    /// The previously committed value is kept.
    #[error("invalid {field} value {raw:?}: {reason}")]
    InvalidInput {
        field: Field,
        raw: String,
        reason: String,
    },
    /// The clipboard capability refused the write.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

pub type Result<T> = std::result::Result<T, TuneError>;

/// Shorthand constructors.
impl TuneError {
    pub fn invalid_input(field: Field, raw: &str, reason: &str) -> Self {
        Self::InvalidInput {
            field,
            raw: raw.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn clipboard(msg: impl ToString) -> Self {
        Self::ClipboardUnavailable(msg.to_string())
    }

    /// The control this error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidInput { field, .. } => Some(*field),
            Self::ClipboardUnavailable(_) => None,
        }
    }
}
