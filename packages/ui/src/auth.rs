//! # Session state
//!
//! [`AuthProvider`] derives the session once on mount — cached identity if
//! we have one, otherwise decoded from the stored token — and shares it
//! through context as a `Signal<AuthState>`. Pages read it with
//! [`use_auth`] to decide between rendering and redirecting.
//!
//! Login and registration go through [`apply_auth_success`]; the symmetric
//! teardown is [`sign_out`], which clears local state no matter what the
//! backend said.

use dioxus::prelude::*;

use api::{ApiClient, AuthResponse};
use store::UserIdentity;

use crate::queries::{use_queries, Queries};
use crate::storage::make_token_store;

/// What the UI knows about the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    /// True until the initial derivation has run. Pages hold off on
    /// redirecting while this is set, otherwise a page refresh would bounce
    /// a logged-in user to the login screen.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// The session signal provided by [`AuthProvider`].
pub fn use_auth() -> Signal<AuthState> {
    use_context()
}

/// The app-wide [`ApiClient`] provided at the root.
pub fn use_api() -> ApiClient {
    use_context()
}

/// Derives the session on mount and provides it to the tree below.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let queries = use_queries();

    use_hook(move || {
        let user = match queries.session() {
            Some(user) => Some(user),
            None => {
                let tokens = make_token_store();
                let user = store::derive_session(&tokens);
                if let Some(user) = &user {
                    let mut queries = queries;
                    queries.set_session(user);
                }
                user
            }
        };
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Record a successful login or registration: cache the identity and flip
/// the auth signal. The token itself was already persisted by the client.
pub fn apply_auth_success(
    mut auth: Signal<AuthState>,
    mut queries: Queries,
    response: &AuthResponse,
) {
    queries.set_session(&response.user);
    auth.set(AuthState {
        user: Some(response.user.clone()),
        loading: false,
    });
}

/// End the session. `ApiClient::end_session` does the best-effort backend
/// notification and the unconditional token and cache clear; this wrapper
/// additionally wakes query subscribers and resets the auth signal.
pub async fn sign_out(api: &ApiClient, mut auth: Signal<AuthState>, mut queries: Queries) {
    api.end_session(&queries.cache()).await;
    queries.clear();
    auth.set(AuthState {
        user: None,
        loading: false,
    });
}

/// Sign-out button used in page headers.
#[component]
pub fn LogoutButton(on_logged_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let queries = use_queries();
    let api = use_api();
    let mut pending = use_signal(|| false);

    rsx! {
        button {
            class: "btn btn-ghost",
            disabled: pending(),
            onclick: move |_| {
                let api = api.clone();
                async move {
                    pending.set(true);
                    sign_out(&api, auth, queries).await;
                    on_logged_out.call(());
                }
            },
            if pending() { "Signing out..." } else { "Logout" }
        }
    }
}
