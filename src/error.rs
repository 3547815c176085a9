//! Errores de la capa de servicios.
//!
//! Las vistas nunca muestran estos mensajes tal cual: cada vista traduce el
//! error a su texto fijo para el usuario.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// La petición no llegó al servidor.
    #[error("Network error: {0}")]
    Network(String),

    /// El servidor respondió con un estado distinto de 2xx.
    #[error("HTTP error {status}: {message}")]
    Http {
        status: u16,
        message: String,
    },

    /// No se pudo construir el cuerpo o leer el JSON de respuesta.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Credenciales rechazadas o respuesta de login sin token.
    #[error("{0}")]
    Auth(String),

    /// La operación necesita una sesión iniciada.
    #[error("Debes iniciar sesión")]
    Unauthenticated,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Mensaje del backend cuando lo hay, o el texto por defecto de la vista
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message, .. } | ApiError::Auth(message) if !message.is_empty() => {
                message.clone()
            }
            ApiError::Unauthenticated => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Http { status: 400, message: "Título duplicado".to_string() };
        assert_eq!(err.user_message("No se pudo actualizar la receta."), "Título duplicado");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.user_message("No se pudo cargar la receta."), "No se pudo cargar la receta.");
        assert_eq!(err.status(), None);

        let empty = ApiError::Http { status: 500, message: String::new() };
        assert_eq!(empty.user_message("fallo"), "fallo");
    }

    #[test]
    fn test_unauthenticated_message() {
        assert_eq!(ApiError::Unauthenticated.user_message("x"), "Debes iniciar sesión");
    }
}
