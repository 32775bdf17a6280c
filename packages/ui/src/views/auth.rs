//! Login / registration card.

use api::FormMode;
use dioxus::prelude::*;

use crate::session::use_session;
use crate::ThemeToggle;

#[component]
pub fn AuthView() -> Element {
    let session = use_session();
    let mut state = session.state;

    let current = state.read().clone();
    let labels = current.mode.labels();
    let registering = current.mode.shows_registration_fields();
    let fields = current.fields.clone();

    let tab_class = |mode: FormMode| {
        if current.mode == mode {
            "auth-tab active"
        } else {
            "auth-tab"
        }
    };

    rsx! {
        div {
            id: "authContainer",
            class: "auth-container",

            div {
                class: "auth-card",

                div {
                    class: "auth-toolbar",
                    ThemeToggle { id: "themeToggle", icon_id: "themeIcon" }
                }

                div {
                    class: "auth-tabs",
                    button {
                        id: "loginTab",
                        class: tab_class(FormMode::Login),
                        r#type: "button",
                        onclick: move |_| session.switch_mode(FormMode::Login),
                        "Iniciar Sesión"
                    }
                    button {
                        id: "registerTab",
                        class: tab_class(FormMode::Register),
                        r#type: "button",
                        onclick: move |_| session.switch_mode(FormMode::Register),
                        "Registrarse"
                    }
                }

                h1 { id: "authTitle", class: "auth-title", "{labels.title}" }
                p { id: "authSubtitle", class: "auth-subtitle", "{labels.subtitle}" }

                form {
                    id: "authForm",
                    class: "auth-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        session.submit();
                    },

                    if registering {
                        div {
                            id: "nameGroup",
                            class: "form-group",
                            label { r#for: "name", "Nombre completo" }
                            input {
                                id: "name",
                                r#type: "text",
                                placeholder: "Tu nombre",
                                value: "{fields.name}",
                                oninput: move |evt: FormEvent| {
                                    state.write().fields.name = evt.value();
                                },
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "email", "Correo electrónico" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "tu@correo.com",
                            value: "{fields.email}",
                            oninput: move |evt: FormEvent| {
                                state.write().fields.email = evt.value();
                            },
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Contraseña" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{fields.password}",
                            oninput: move |evt: FormEvent| {
                                state.write().fields.password = evt.value();
                            },
                        }
                    }

                    if registering {
                        div {
                            id: "confirmPasswordGroup",
                            class: "form-group",
                            label { r#for: "confirmPassword", "Confirmar contraseña" }
                            input {
                                id: "confirmPassword",
                                r#type: "password",
                                placeholder: "••••••••",
                                value: "{fields.confirm_password}",
                                oninput: move |evt: FormEvent| {
                                    state.write().fields.confirm_password = evt.value();
                                },
                            }
                        }
                    }

                    if let Some(err) = current.error_message() {
                        div { id: "errorMessage", class: "message error-message", "{err}" }
                    }
                    if let Some(ok) = current.success_message() {
                        div { id: "successMessage", class: "message success-message", "{ok}" }
                    }

                    button {
                        id: "submitBtn",
                        class: "submit-btn",
                        r#type: "submit",
                        "{labels.submit}"
                    }
                }
            }
        }
    }
}
