//! Login/Register sub-modes of the auth view and the form they drive.

/// Which half of the auth form is active. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

/// Texts shown around the form for a given mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit: &'static str,
}

impl FormMode {
    pub fn labels(self) -> FormLabels {
        match self {
            FormMode::Login => FormLabels {
                title: "Iniciar Sesión",
                subtitle: "Accede a tu cuenta para continuar",
                submit: "Iniciar Sesión",
            },
            FormMode::Register => FormLabels {
                title: "Crear Cuenta",
                subtitle: "Únete a nosotros y comienza tu viaje",
                submit: "Registrarse",
            },
        }
    }

    /// Name and confirm-password inputs are only shown when registering.
    pub fn shows_registration_fields(self) -> bool {
        self == FormMode::Register
    }
}

/// Current values of the four form inputs, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The single visible feedback message, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Error(String),
    Success(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let login = FormMode::Login.labels();
        assert_eq!(login.title, "Iniciar Sesión");
        assert_eq!(login.subtitle, "Accede a tu cuenta para continuar");

        let register = FormMode::Register.labels();
        assert_eq!(register.title, "Crear Cuenta");
        assert_eq!(register.subtitle, "Únete a nosotros y comienza tu viaje");
        assert_eq!(register.submit, "Registrarse");

        assert!(!FormMode::Login.shows_registration_fields());
        assert!(FormMode::Register.shows_registration_fields());
    }
}
