use thiserror::Error;

pub const TITLE_FIELD: &str = "title";
pub const MIN_TITLE_MESSAGE: &str = "Minimum 3 characters.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

pub type FormResult<T> = Result<T, FormError>;

impl FormError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn title_too_short() -> Self {
        Self::validation(TITLE_FIELD, MIN_TITLE_MESSAGE)
    }

    /// The field an inline error should be shown next to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FormError::Validation { field, .. } => Some(*field),
            FormError::AlreadySubmitting => None,
        }
    }
}
