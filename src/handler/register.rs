use crate::backend::Backend;
use crate::form::user::RegisterFormData;
use crate::handler::{Outcome, SubmitError};
use crate::page::{Navigator, Notifier, Page, Storage};

pub const LOGIN_PAGE: &str = "login.html";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";
pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful!";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_ERROR: &str = "Error during registration. Please try again.";

/// Checks the confirmation, posts the new account, and sends the user to
/// [`LOGIN_PAGE`] once the backend accepts it.
pub async fn submit_register<S, N, V>(
    backend: &Backend,
    page: &mut Page<S, N, V>,
    form: &RegisterFormData,
) -> Outcome
where
    S: Storage,
    N: Notifier,
    V: Navigator,
{
    if !form.passwords_match() {
        page.notifier.alert(PASSWORD_MISMATCH);

        return Outcome::Invalid;
    }

    match try_register(backend, page, form).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("registration for {} failed: {e}", form.username);
            page.notifier.alert(REGISTRATION_ERROR);

            Outcome::Failed
        }
    }
}

async fn try_register<S, N, V>(
    backend: &Backend,
    page: &mut Page<S, N, V>,
    form: &RegisterFormData,
) -> Result<Outcome, SubmitError>
where
    S: Storage,
    N: Notifier,
    V: Navigator,
{
    let reply = backend.register(&form.to_request()).await?;

    if !reply.is_success() {
        let message = reply.message().unwrap_or(REGISTRATION_FAILED).to_string();
        log::info!(
            "registration for {} rejected with {}",
            form.username,
            reply.status
        );
        page.notifier.alert(&message);

        return Ok(Outcome::Rejected(message));
    }

    page.notifier.alert(REGISTRATION_SUCCESSFUL);
    page.navigator.navigate(LOGIN_PAGE);

    Ok(Outcome::Navigated(LOGIN_PAGE.to_string()))
}
