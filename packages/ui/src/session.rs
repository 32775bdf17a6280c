//! Session context and actions for the UI.
//!
//! [`SessionProvider`] owns the [`AppState`] signal and loads it from storage on
//! mount. Components get a [`Session`] handle through [`use_session`] and call
//! its methods for every user action; each one runs the matching
//! [`api::SessionManager`] operation and writes the new state back.

use api::{AppState, FormMode};
use dioxus::prelude::*;
use store::AuthConfig;

use crate::make_manager;
use crate::theme::apply_theme;
use crate::timer::sleep;

/// Handle to the session signals, provided via context.
#[derive(Clone, Copy)]
pub struct Session {
    pub state: Signal<AppState>,
    /// Becomes `true` once the stored theme and session have been read.
    pub ready: Signal<bool>,
    /// Delayed Pending -> Committed transition, if one is running.
    pending: Signal<Option<Task>>,
    config: Signal<AuthConfig>,
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}

impl Session {
    fn cancel_pending(mut self) {
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }
    }

    /// Submit the auth form in its current mode.
    ///
    /// On success the home view appears after the configured delay, unless
    /// the user logs out, switches tabs or submits again first.
    pub fn submit(mut self) {
        self.cancel_pending();
        let mut state = self.state;
        let config = self.config.peek().clone();
        let task = spawn(async move {
            let manager = make_manager(config);

            let mut next = state();
            let pending = manager.submit(&mut next).await;
            state.set(next);

            let Some(pending) = pending else {
                return;
            };
            sleep(manager.config().transition_delay()).await;

            let mut next = state();
            if manager.commit(&mut next, pending).await {
                state.set(next);
            }
        });
        self.pending.set(Some(task));
    }

    /// Switch tabs. Clicking the active tab leaves a pending login running.
    pub fn switch_mode(mut self, mode: FormMode) {
        let changed = match mode {
            FormMode::Login => self.state.write().switch_to_login(),
            FormMode::Register => self.state.write().switch_to_register(),
        };
        if changed {
            self.cancel_pending();
        }
    }

    pub fn logout(self) {
        self.cancel_pending();
        let mut state = self.state;
        let config = self.config.peek().clone();
        spawn(async move {
            let mut next = state();
            make_manager(config).logout(&mut next).await;
            state.set(next);
        });
    }

    pub fn toggle_theme(self) {
        let mut state = self.state;
        let config = self.config.peek().clone();
        spawn(async move {
            let mut next = state();
            make_manager(config).toggle_theme(&mut next).await;
            state.set(next);
        });
    }
}

/// Provider component that loads and owns the session state.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(AppState::default);
    let mut ready = use_signal(|| false);
    let pending = use_signal(|| Option::<Task>::None);
    let config = use_signal(|| crate::load_config().auth);

    // Read theme and session once on mount
    let _ = use_resource(move || async move {
        let manager = make_manager(config.peek().clone());
        state.set(manager.startup().await);
        ready.set(true);
    });

    // Keep the document attribute in line with the theme
    let theme = use_memo(move || state.read().theme);
    use_effect(move || apply_theme(theme()));

    use_context_provider(|| Session {
        state,
        ready,
        pending,
        config,
    });

    rsx! {
        {children}
    }
}
