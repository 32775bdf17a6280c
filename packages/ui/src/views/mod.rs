use api::View;
use dioxus::prelude::*;

use crate::session::use_session;

mod auth;
pub use auth::AuthView;

mod home;
pub use home::HomeView;

/// Shows exactly one of the auth and home views.
#[component]
pub fn PortalView() -> Element {
    let session = use_session();
    let view = session.state.read().view;

    match view {
        View::Auth => rsx! { AuthView {} },
        View::Home => rsx! { HomeView {} },
    }
}
