pub mod login;
pub mod register;

pub use self::login::submit_login;
pub use self::register::submit_register;

use crate::backend;

/// What a form submission ended in. The user has already been told by the
/// time one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Success path, the page moved to this location.
    Navigated(String),
    /// The backend refused; carries the alerted text.
    Rejected(String),
    /// Transport, decode or storage failure; the generic text was alerted.
    Failed,
    /// Client-side validation stopped the submission before any request.
    Invalid,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Navigated(_))
    }
}

/// Everything that collapses into the generic "please try again" alert.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Backend(#[from] backend::Error),
    #[error("could not write to storage: {0}")]
    Storage(#[from] std::io::Error),
}
