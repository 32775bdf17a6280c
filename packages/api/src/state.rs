//! # Application state for the auth/home screens
//!
//! [`AppState`] is everything the view layer renders: which view is up, the
//! Login/Register mode, the form inputs, the feedback message, the theme, the
//! signed-in account and the pending view transition. The methods here are
//! the synchronous state changes; anything that touches storage goes through
//! [`crate::SessionManager`].
//!
//! ## Pending transition
//!
//! A successful submit does not switch to the home view right away. It moves
//! [`Transition`] to `Pending` with a fresh ticket, and the commit that fires
//! after the delay only applies while that ticket is still pending. Logging
//! out, switching modes or submitting again drops the ticket.

use store::{Theme, UserRecord};

use crate::form::{FormFields, FormMode, Message};

/// The two mutually exclusive top-level views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Auth,
    Home,
}

/// Pending -> Committed view transition after a successful submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    #[default]
    Idle,
    Pending { ticket: u64 },
    Committed { ticket: u64 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub view: View,
    pub mode: FormMode,
    pub fields: FormFields,
    pub message: Option<Message>,
    pub theme: Theme,
    pub session: Option<UserRecord>,
    pub transition: Transition,
    next_ticket: u64,
}

impl AppState {
    /// Initial state: home if a session exists, otherwise the login form.
    pub fn new(theme: Theme, session: Option<UserRecord>) -> Self {
        let mut state = Self {
            theme,
            ..Self::default()
        };
        if let Some(user) = session {
            state.show_home(user);
        }
        state
    }

    /// Switch the form to login mode. Returns `false` if already there.
    pub fn switch_to_login(&mut self) -> bool {
        if self.mode == FormMode::Login {
            return false;
        }
        self.enter_mode(FormMode::Login);
        true
    }

    /// Switch the form to registration mode. Returns `false` if already there.
    pub fn switch_to_register(&mut self) -> bool {
        if self.mode == FormMode::Register {
            return false;
        }
        self.enter_mode(FormMode::Register);
        true
    }

    fn enter_mode(&mut self, mode: FormMode) {
        tracing::debug!(?mode, "switching form mode");
        self.mode = mode;
        self.clear_messages();
        self.fields.reset();
        self.cancel_transition();
    }

    pub fn clear_messages(&mut self) {
        self.message = None;
    }

    /// Show an error, replacing any message currently shown.
    pub fn show_error(&mut self, text: impl Into<String>) {
        self.message = Some(Message::Error(text.into()));
    }

    /// Show a success notice, replacing any message currently shown.
    pub fn show_success(&mut self, text: impl Into<String>) {
        self.message = Some(Message::Success(text.into()));
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.message {
            Some(Message::Error(text)) => Some(text),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.message {
            Some(Message::Success(text)) => Some(text),
            _ => None,
        }
    }

    pub fn show_home(&mut self, user: UserRecord) {
        self.view = View::Home;
        self.session = Some(user);
    }

    /// Back to the auth view with an empty login form, whatever the current mode.
    pub fn show_auth(&mut self) {
        self.session = None;
        self.view = View::Auth;
        self.fields.reset();
        self.clear_messages();
        self.cancel_transition();
        self.mode = FormMode::Login;
    }

    /// Name shown in the home header and welcome line.
    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(|u| u.name.as_str())
    }

    /// Glyph for the theme toggles: the theme a click switches *to*.
    pub fn theme_icon(&self) -> &'static str {
        match self.theme {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn is_pending(&self, ticket: u64) -> bool {
        self.transition == Transition::Pending { ticket }
    }

    pub(crate) fn begin_transition(&mut self) -> u64 {
        self.next_ticket += 1;
        self.transition = Transition::Pending {
            ticket: self.next_ticket,
        };
        self.next_ticket
    }

    pub(crate) fn complete_transition(&mut self, ticket: u64) {
        self.transition = Transition::Committed { ticket };
    }

    pub(crate) fn cancel_transition(&mut self) {
        if matches!(self.transition, Transition::Pending { .. }) {
            self.transition = Transition::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> UserRecord {
        UserRecord {
            id: 1,
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            created_at: "2024-05-01T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_initial_view_follows_session() {
        let state = AppState::new(Theme::Dark, None);
        assert_eq!(state.view, View::Auth);
        assert_eq!(state.mode, FormMode::Login);
        assert_eq!(state.theme, Theme::Dark);

        let state = AppState::new(Theme::Light, Some(ana()));
        assert_eq!(state.view, View::Home);
        assert_eq!(state.display_name(), Some("Ana"));
    }

    #[test]
    fn test_switch_to_login_is_idempotent() {
        let mut state = AppState::default();
        state.fields.email = "typed@x.com".to_string();
        state.show_error("Credenciales incorrectas");
        let before = state.clone();

        assert!(!state.switch_to_login());
        assert_eq!(state, before);
    }

    #[test]
    fn test_switching_mode_resets_form() {
        let mut state = AppState::default();
        state.fields.email = "a@b.com".to_string();
        state.fields.password = "secret1".to_string();
        state.show_success("ok");

        assert!(state.switch_to_register());
        assert_eq!(state.mode, FormMode::Register);
        assert_eq!(state.fields, FormFields::default());
        assert!(state.message.is_none());

        assert!(!state.switch_to_register());
        assert!(state.switch_to_login());
        assert_eq!(state.mode, FormMode::Login);
    }

    #[test]
    fn test_messages_are_exclusive() {
        let mut state = AppState::default();
        state.show_error("bad");
        assert_eq!(state.error_message(), Some("bad"));
        assert_eq!(state.success_message(), None);

        state.show_success("good");
        assert_eq!(state.error_message(), None);
        assert_eq!(state.success_message(), Some("good"));

        state.clear_messages();
        assert!(state.error_message().is_none() && state.success_message().is_none());
    }

    #[test]
    fn test_show_auth_always_lands_on_login() {
        for mode in [FormMode::Login, FormMode::Register] {
            let mut state = AppState::new(Theme::Light, Some(ana()));
            state.mode = mode;
            state.fields.name = "left over".to_string();

            state.show_auth();
            assert_eq!(state.view, View::Auth);
            assert_eq!(state.mode, FormMode::Login);
            assert!(state.session.is_none());
            assert_eq!(state.fields, FormFields::default());
        }
    }

    #[test]
    fn test_active_tab_click_keeps_pending_transition() {
        let mut state = AppState::default();
        let ticket = state.begin_transition();

        assert!(!state.switch_to_login());
        assert!(state.is_pending(ticket));
        assert_eq!(state.transition, Transition::Pending { ticket });

        state.mode = FormMode::Register;
        let ticket = state.begin_transition();
        assert!(!state.switch_to_register());
        assert!(state.is_pending(ticket));
    }

    #[test]
    fn test_theme_icon_shows_target() {
        let mut state = AppState::default();
        assert_eq!(state.theme_icon(), "🌙");
        state.theme = state.theme.toggled();
        assert_eq!(state.theme_icon(), "☀️");
    }

    #[test]
    fn test_transition_tickets() {
        let mut state = AppState::default();
        let first = state.begin_transition();
        assert!(state.is_pending(first));

        let second = state.begin_transition();
        assert_ne!(first, second);
        assert!(!state.is_pending(first));
        assert!(state.is_pending(second));

        state.switch_to_register();
        assert_eq!(state.transition, Transition::Idle);
        assert!(!state.is_pending(second));
    }
}
