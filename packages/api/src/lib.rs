//! # API crate — the session and form manager
//!
//! Everything the auth screens do, minus the rendering. The `ui` crate keeps an
//! [`AppState`] in a signal and routes every user action through a
//! [`SessionManager`], which validates input and reads and writes the
//! [`store::AuthRepository`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`AuthError`], one variant per user-facing failure |
//! | [`form`] | Login/Register mode, its labels, the form inputs and the feedback message |
//! | [`manager`] | [`SessionManager`]: startup, submit, login, register, commit, logout, theme toggle |
//! | [`state`] | [`AppState`], the current view and the pending transition |
//! | [`validate`] | Email pattern and the ordered registration checks |
//!
//! ## Passwords
//!
//! Passwords are stored and compared as plain text, exactly as the browser page
//! that first wrote this data did. There is no hashing anywhere.

pub mod error;
pub mod form;
pub mod manager;
pub mod state;
pub mod validate;

pub use error::AuthError;
pub use form::{FormFields, FormLabels, FormMode, Message};
pub use manager::{PendingLogin, SessionManager, LOGIN_SUCCESS, REGISTER_SUCCESS};
pub use state::{AppState, Transition, View};
pub use validate::{is_valid_email, Registration};

pub use store::{Theme, UserRecord};
