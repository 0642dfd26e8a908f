use dioxus::prelude::*;

use api::{ApiClient, StudentSource};
use ui::{AuthProvider, QueryProvider};
use views::{Login, Register, StudentAdd, StudentEdit, Students, Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/tasks")]
    Tasks {},
    #[route("/students")]
    Students {},
    #[route("/students/add")]
    StudentAdd {},
    #[route("/students/edit/:id")]
    StudentEdit { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = ui::load_config();
        ApiClient::new(config.api.base_url, ui::make_token_store())
    });
    // Students still run on the seeded in-memory roster; swap this to
    // StudentSource::rest(use_api()) once the backend endpoints land.
    use_context_provider(StudentSource::mock);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        QueryProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/tasks`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Tasks {});
    rsx! {}
}
