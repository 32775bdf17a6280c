use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Portal" }
        document::Link { rel: "stylesheet", href: ui::PORTAL_CSS }

        ui::SessionProvider {
            ui::Preloader {}
            ui::PortalView {}
        }
    }
}
