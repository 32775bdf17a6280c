//! Theme application and the toggle button.

use dioxus::prelude::*;
use store::Theme;

use crate::session::use_session;

/// Set `data-theme` on the document root element.
pub fn apply_theme(theme: Theme) {
    let _ = document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        theme.as_str()
    ));
}

/// Button that flips between light and dark.
///
/// The icon shows the theme a click switches to.
#[component]
pub fn ThemeToggle(
    /// DOM id of the button.
    id: String,
    /// DOM id of the icon inside it.
    icon_id: String,
) -> Element {
    let session = use_session();
    let icon = session.state.read().theme_icon();

    rsx! {
        button {
            id: "{id}",
            class: "theme-toggle",
            r#type: "button",
            title: "Cambiar tema",
            onclick: move |_| session.toggle_theme(),
            span {
                id: "{icon_id}",
                class: "theme-icon",
                "{icon}"
            }
        }
    }
}
