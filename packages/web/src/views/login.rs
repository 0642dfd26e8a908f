//! Login page.

use dioxus::prelude::*;

use api::{ApiError, Credentials};
use ui::{apply_auth_success, use_api, use_auth, use_queries, valid_email, Input};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let queries = use_queries();
    let api = use_api();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut submit_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already logged in: straight to the task list.
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Tasks {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let email_value = email().trim().to_string();
        let password_value = password();

        let mut valid = true;
        if !valid_email(&email_value) {
            email_error.set(Some("Enter a valid email address".to_string()));
            valid = false;
        } else {
            email_error.set(None);
        }
        if password_value.is_empty() {
            password_error.set(Some("Password is required".to_string()));
            valid = false;
        } else {
            password_error.set(None);
        }
        if !valid {
            return;
        }

        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            submit_error.set(None);
            let credentials = Credentials {
                email: email_value,
                password: password_value,
            };
            match api.login(&credentials).await {
                Ok(response) => {
                    apply_auth_success(auth, queries, &response);
                    nav.push(Route::Tasks {});
                }
                Err(err) => {
                    let message = match &err {
                        ApiError::InvalidCredentials => err.to_string(),
                        _ => "Something went wrong. Please try again.".to_string(),
                    };
                    tracing::warn!(error = %err, "login failed");
                    submit_error.set(Some(message));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Sign In" }
                form { onsubmit: handle_submit,
                    Input {
                        label: "Email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        error: email_error(),
                        disabled: submitting(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Input {
                        label: "Password",
                        r#type: "password",
                        value: password(),
                        error: password_error(),
                        disabled: submitting(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    if let Some(message) = submit_error() {
                        p { class: "form-error", "{message}" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                }
                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
