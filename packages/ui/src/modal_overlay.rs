use dioxus::prelude::*;

/// Dimmed backdrop with a centered card. Clicking the backdrop closes the
/// modal; clicks inside the card stay inside.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
