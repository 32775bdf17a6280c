use dioxus::prelude::*;

use crate::session::use_session;

/// Full-screen overlay shown until the stored session has been read.
#[component]
pub fn Preloader() -> Element {
    let session = use_session();
    let ready = session.ready;

    rsx! {
        div {
            id: "preloader",
            class: if ready() { "preloader loaded" } else { "preloader" },
            div { class: "spinner" }
        }
    }
}
