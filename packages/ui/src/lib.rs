//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod repo;
pub use repo::{load_config, make_manager, make_repo};

pub mod views;
pub use views::{AuthView, HomeView, PortalView};

pub const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

mod session;
pub use session::{use_session, Session, SessionProvider};

mod theme;
pub use theme::{apply_theme, ThemeToggle};

mod preloader;
pub use preloader::Preloader;

mod timer;
