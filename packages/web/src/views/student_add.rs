//! Add-student page.

use dioxus::prelude::*;

use ui::{use_auth, StudentForm};

use crate::Route;

#[component]
pub fn StudentAdd() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div { class: "page page-narrow",
            header { class: "page-header",
                h1 { "Add Student" }
            }
            StudentForm {
                on_saved: move |_| {
                    nav.push(Route::Students {});
                },
                on_cancel: move |_| {
                    nav.push(Route::Students {});
                },
            }
        }
    }
}
