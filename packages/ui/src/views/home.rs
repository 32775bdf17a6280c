//! Signed-in landing page.

use dioxus::prelude::*;

use crate::session::use_session;
use crate::ThemeToggle;

#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let name = session
        .state
        .read()
        .display_name()
        .unwrap_or_default()
        .to_string();

    rsx! {
        div {
            id: "homeContainer",
            class: "home-container",

            header {
                class: "home-header",
                span { class: "home-brand", "Portal" }
                div {
                    class: "home-actions",
                    span { id: "userName", class: "home-user", "{name}" }
                    ThemeToggle { id: "themeToggleHome", icon_id: "themeIconHome" }
                    button {
                        id: "logoutBtn",
                        class: "logout-btn",
                        r#type: "button",
                        onclick: move |_| session.logout(),
                        "Cerrar Sesión"
                    }
                }
            }

            main {
                class: "home-main",
                h1 {
                    class: "home-welcome",
                    "¡Bienvenido, "
                    span { id: "welcomeName", "{name}" }
                    "!"
                }
                p { class: "home-subtitle", "Has iniciado sesión correctamente." }
            }
        }
    }
}
