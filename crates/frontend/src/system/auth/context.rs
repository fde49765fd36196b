use contracts::session::Session;
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api::ApiError;

/// Session context provider component
///
/// Restores a persisted session from localStorage on mount. Every child
/// reads the session through [`use_session`] and passes it to resource
/// clients explicitly.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = RwSignal::new(None::<Session>);

    if let Some((token, user)) = storage::load_session() {
        session.set(Some(Session::new(user, token)));
    }

    provide_context(session);

    children()
}

/// Hook to access the session signal
pub fn use_session() -> RwSignal<Option<Session>> {
    use_context::<RwSignal<Option<Session>>>().expect("SessionProvider not found in component tree")
}

/// Perform login: authenticate, persist and publish the session
pub async fn do_login(
    session: RwSignal<Option<Session>>,
    gmail: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(gmail, password).await?;
    storage::save_session(&response.token, &response.user);
    session.set(Some(Session::new(response.user, response.token)));
    Ok(())
}

/// Perform logout: drop the persisted and published session
pub fn do_logout(session: RwSignal<Option<Session>>) {
    storage::clear_session();
    session.set(None);
}
