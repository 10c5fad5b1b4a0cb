//! User-visible notices (rendered as toasts by the UI).

use crate::generate::GenerationError;

/// Shown when the user submits an empty or whitespace-only description.
pub const BLANK_PROMPT_MESSAGE: &str = "Please enter a prompt!";

/// What triggered a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Input rejected before any network call.
    Validation,
    /// The generation call failed.
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn blank_prompt() -> Self {
        Self { level: NoticeLevel::Validation, message: BLANK_PROMPT_MESSAGE.to_owned() }
    }

    #[must_use]
    pub fn generation_failed(error: &GenerationError) -> Self {
        Self { level: NoticeLevel::Failure, message: error.user_message() }
    }
}
