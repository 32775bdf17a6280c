//! # Session manager — the login, registration and logout flows
//!
//! [`SessionManager`] ties an [`AuthRepository`] to an [`AppState`]. The view
//! layer owns the state and hands it in; the manager reads and writes storage
//! and applies the resulting state change.
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`startup`](SessionManager::startup) | Builds the initial state from the stored theme and session. |
//! | [`submit`](SessionManager::submit) | Dispatches the form to login or registration; on success returns a [`PendingLogin`]. |
//! | [`commit`](SessionManager::commit) | Called after the transition delay; persists the session and shows home if still pending. |
//! | [`logout`](SessionManager::logout) | Clears the session and returns to the login form. |
//! | [`toggle_theme`](SessionManager::toggle_theme) | Flips and persists the theme. |

use chrono::{SecondsFormat, Utc};
use store::{AuthConfig, AuthRepository, KeyValueStore, UserRecord};

use crate::error::AuthError;
use crate::form::FormMode;
use crate::state::AppState;
use crate::validate::{validate_login, validate_registration, Registration};

pub const LOGIN_SUCCESS: &str = "¡Inicio de sesión exitoso!";
pub const REGISTER_SUCCESS: &str = "¡Cuenta creada exitosamente!";

/// A successful submit waiting for its delayed commit.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingLogin {
    pub ticket: u64,
    pub user: UserRecord,
}

pub struct SessionManager<S: KeyValueStore> {
    repo: AuthRepository<S>,
    config: AuthConfig,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(repo: AuthRepository<S>, config: AuthConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn repository(&self) -> &AuthRepository<S> {
        &self.repo
    }

    pub async fn startup(&self) -> AppState {
        let theme = self.repo.load_theme().await;
        let session = self.repo.load_session().await;
        if let Some(user) = &session {
            tracing::info!(user_id = user.id, "resuming stored session");
        }
        AppState::new(theme, session)
    }

    /// Handle a form submission in the current mode.
    ///
    /// Any earlier pending transition is dropped first. Errors are shown in the
    /// state's error slot; nothing is returned for them.
    pub async fn submit(&self, state: &mut AppState) -> Option<PendingLogin> {
        state.cancel_transition();
        state.clear_messages();

        let email = state.fields.email.trim().to_string();
        let password = state.fields.password.clone();

        let (result, success) = match state.mode {
            FormMode::Login => (self.login(&email, &password).await, LOGIN_SUCCESS),
            FormMode::Register => {
                let form = Registration {
                    name: state.fields.name.trim().to_string(),
                    email,
                    password,
                    confirm_password: state.fields.confirm_password.clone(),
                };
                (self.register(form).await, REGISTER_SUCCESS)
            }
        };

        match result {
            Ok(user) => {
                state.show_success(success);
                let ticket = state.begin_transition();
                Some(PendingLogin { ticket, user })
            }
            Err(e) => {
                if let AuthError::Storage(inner) = &e {
                    tracing::error!("user directory storage error: {inner}");
                }
                state.show_error(e.to_string());
                None
            }
        }
    }

    /// Find the account matching both credentials.
    ///
    /// A wrong password and an unknown email give the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        validate_login(email, password)?;

        let users = self.repo.load_directory().await;
        let user = users
            .into_iter()
            .find(|u| u.matches(email, password))
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(user_id = user.id, "login accepted");
        Ok(user)
    }

    /// Validate and append a new account to the directory.
    ///
    /// A stored directory that cannot be decoded is left untouched and
    /// reported as [`AuthError::Storage`].
    pub async fn register(&self, form: Registration) -> Result<UserRecord, AuthError> {
        validate_registration(&form, self.config.min_password_len)?;

        let mut users = self.repo.load_directory_strict().await?;
        if users.iter().any(|u| u.email == form.email) {
            return Err(AuthError::EmailTaken);
        }

        let now = Utc::now();
        // Ids stay increasing even when two accounts land in the same millisecond
        let id = users
            .iter()
            .map(|u| u.id.saturating_add(1))
            .fold(now.timestamp_millis(), i64::max);
        let user = UserRecord {
            id,
            name: form.name,
            email: form.email,
            password: form.password,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        users.push(user.clone());
        self.repo.save_directory(&users).await?;

        tracing::info!(user_id = user.id, total = users.len(), "account registered");
        Ok(user)
    }

    /// Finish a pending login: persist the session and show home.
    ///
    /// Returns `false` without touching anything when the ticket was
    /// superseded or cancelled in the meantime.
    pub async fn commit(&self, state: &mut AppState, pending: PendingLogin) -> bool {
        if !state.is_pending(pending.ticket) {
            tracing::debug!(ticket = pending.ticket, "dropping stale transition");
            return false;
        }
        if let Err(e) = self.repo.save_session(&pending.user).await {
            tracing::error!("failed to persist session: {e}");
        }
        state.complete_transition(pending.ticket);
        state.show_home(pending.user);
        true
    }

    pub async fn logout(&self, state: &mut AppState) {
        if let Err(e) = self.repo.clear_session().await {
            tracing::error!("failed to clear session: {e}");
        }
        if let Some(user) = &state.session {
            tracing::info!(user_id = user.id, "logged out");
        }
        state.show_auth();
    }

    pub async fn toggle_theme(&self, state: &mut AppState) {
        state.theme = state.theme.toggled();
        tracing::debug!(theme = %state.theme, "theme changed");
        if let Err(e) = self.repo.save_theme(state.theme).await {
            tracing::error!("failed to persist theme: {e}");
        }
    }
}
