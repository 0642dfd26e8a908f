//! Small shared form controls and validation helpers.

use dioxus::prelude::*;

/// Rough client-side email shape check, shared by the auth and student
/// forms; the backend remains the authority.
pub fn valid_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !text.contains(char::is_whitespace)
}

/// Labelled text input with an optional inline validation message.
#[component]
pub fn Input(
    #[props(default = String::new())] label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = None)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    let input_class = if error.is_some() {
        "input input-invalid"
    } else {
        "input"
    };

    rsx! {
        div { class: "field",
            if !label.is_empty() {
                label { class: "field-label", "{label}" }
            }
            input {
                class: "{input_class}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = &error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

/// Labelled multi-line input, used for task descriptions.
#[component]
pub fn Textarea(
    #[props(default = String::new())] label: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = false)] disabled: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "field",
            if !label.is_empty() {
                label { class: "field-label", "{label}" }
            }
            textarea {
                class: "input textarea",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::valid_email;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(valid_email("jane@example.com"));
        assert!(valid_email("j.doe+tag@sub.example.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!valid_email(""));
        assert!(!valid_email("no-at-sign"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email("jane@nodot"));
        assert!(!valid_email("jane@.com"));
        assert!(!valid_email("jane doe@example.com"));
    }
}
