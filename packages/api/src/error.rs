//! User-facing failures of the login and registration forms.

use store::StoreError;

/// Every way a form submission can be rejected.
///
/// The `Display` text is what the error region shows, verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Por favor, completa todos los campos")]
    MissingFields,
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    #[error("La contraseña debe tener al menos {min} caracteres")]
    WeakPassword { min: usize },
    #[error("Por favor, ingresa un correo válido")]
    InvalidEmail,
    #[error("Este correo ya está registrado")]
    EmailTaken,
    /// Email and password did not jointly match any account.
    #[error("Credenciales incorrectas")]
    InvalidCredentials,
    #[error("No se pudo guardar la cuenta")]
    Storage(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::WeakPassword { min: 6 }.to_string(),
            "La contraseña debe tener al menos 6 caracteres"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Credenciales incorrectas"
        );
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(
            AuthError::from(StoreError::from(io)).to_string(),
            "No se pudo guardar la cuenta"
        );
    }
}
