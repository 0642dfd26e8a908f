//! Registration page.

use dioxus::prelude::*;

use api::{ApiError, Credentials};
use ui::{apply_auth_success, use_api, use_auth, use_queries, valid_email, Input};

use crate::Route;

const PASSWORD_MIN: usize = 8;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let queries = use_queries();
    let api = use_api();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut email_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut confirm_error = use_signal(|| None::<String>);
    let mut submit_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Tasks {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let email_value = email().trim().to_string();
        let password_value = password();
        let confirm_value = confirm();

        let mut valid = true;
        if !valid_email(&email_value) {
            email_error.set(Some("Enter a valid email address".to_string()));
            valid = false;
        } else {
            email_error.set(None);
        }
        if password_value.chars().count() < PASSWORD_MIN {
            password_error.set(Some(format!(
                "Password must be at least {PASSWORD_MIN} characters"
            )));
            valid = false;
        } else {
            password_error.set(None);
        }
        if confirm_value != password_value {
            confirm_error.set(Some("Passwords do not match".to_string()));
            valid = false;
        } else {
            confirm_error.set(None);
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
            match api.register(&credentials).await {
                Ok(response) => {
                    apply_auth_success(auth, queries, &response);
                    nav.push(Route::Tasks {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "registration failed");
                    match &err {
                        ApiError::EmailExists => email_error.set(Some(err.to_string())),
                        _ => submit_error
                            .set(Some("Something went wrong. Please try again.".to_string())),
                    }
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Create Account" }
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
                    Input {
                        label: "Confirm Password",
                        r#type: "password",
                        value: confirm(),
                        error: confirm_error(),
                        disabled: submitting(),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }
                    if let Some(message) = submit_error() {
                        p { class: "form-error", "{message}" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Sign Up" }
                    }
                }
                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
