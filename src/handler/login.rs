use crate::backend::Backend;
use crate::form::user::LoginFormData;
use crate::handler::{Outcome, SubmitError};
use crate::page::{Navigator, Notifier, Page, Storage};

pub const USER_KEY: &str = "user";
pub const LANDING_PAGE: &str = "index.html";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_ERROR: &str = "Error during login. Please try again.";

/// Posts the credentials; on success stores the returned user under
/// [`USER_KEY`] and moves to [`LANDING_PAGE`].
pub async fn submit_login<S, N, V>(
    backend: &Backend,
    page: &mut Page<S, N, V>,
    form: &LoginFormData,
) -> Outcome
where
    S: Storage,
    N: Notifier,
    V: Navigator,
{
    match try_login(backend, page, form).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("login for {} failed: {e}", form.username);
            page.notifier.alert(LOGIN_ERROR);

            Outcome::Failed
        }
    }
}

async fn try_login<S, N, V>(
    backend: &Backend,
    page: &mut Page<S, N, V>,
    form: &LoginFormData,
) -> Result<Outcome, SubmitError>
where
    S: Storage,
    N: Notifier,
    V: Navigator,
{
    let reply = backend.login(&form.to_request()).await?;

    if !reply.is_success() {
        let message = reply.message().unwrap_or(LOGIN_FAILED).to_string();
        log::info!("login for {} rejected with {}", form.username, reply.status);
        page.notifier.alert(&message);

        return Ok(Outcome::Rejected(message));
    }

    page.storage.set(USER_KEY, &reply.user().to_string())?;
    page.navigator.navigate(LANDING_PAGE);

    Ok(Outcome::Navigated(LANDING_PAGE.to_string()))
}
