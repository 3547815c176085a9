use serde::{Deserialize, Serialize};
use crate::models::wire::opt_string_or_number;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de `/api/auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Sesión guardada en localStorage tras un login correcto
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub user_id: Option<String>,
    pub nombre: String,
}

impl LoginResponse {
    /// Convierte la respuesta en sesión; sin token no hay sesión
    pub fn into_session(self) -> Option<Session> {
        let token = self.token.filter(|t| !t.trim().is_empty())?;
        let nombre = self
            .nombre
            .filter(|n| !n.is_empty())
            .or(self.email)
            .unwrap_or_default();
        Some(Session {
            token,
            user_id: self.id,
            nombre,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_into_session() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"id": 99, "nombre": "Test", "email": "user@test.com", "token": "fake-token-123"}"#,
        )
        .unwrap();
        let session = response.into_session().unwrap();
        assert_eq!(session.token, "fake-token-123");
        assert_eq!(session.user_id.as_deref(), Some("99"));
        assert_eq!(session.nombre, "Test");
    }

    #[test]
    fn test_missing_token_is_not_a_session() {
        let response: LoginResponse = serde_json::from_str(r#"{"id": 1, "token": ""}"#).unwrap();
        assert!(response.into_session().is_none());
        assert!(LoginResponse::default().into_session().is_none());
    }

    #[test]
    fn test_name_falls_back_to_email() {
        let response = LoginResponse {
            id: None,
            nombre: None,
            email: Some("ana@recetas.es".to_string()),
            token: Some("t".to_string()),
        };
        assert_eq!(response.into_session().unwrap().nombre, "ana@recetas.es");
    }
}
