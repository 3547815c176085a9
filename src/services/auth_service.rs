use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, Session};
use crate::services::ApiClient;
use crate::utils::MSG_REGISTER_FAILED;

/// Login con email y contraseña. Cualquier respuesta no-2xx es `Login failed`.
pub async fn login(email: &str, password: &str) -> Result<Session, ApiError> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Login para {}", request.email);
    let response = ApiClient::new()
        .post("/auth/login", &request)
        .await
        .map_err(|e| match e {
            ApiError::Http { status, .. } => {
                log::warn!("⚠️ Login rechazado ({})", status);
                ApiError::Auth("Login failed".to_string())
            }
            other => other,
        })?;

    let data = response.json::<LoginResponse>().await?;
    session_from_response(data)
}

pub fn session_from_response(data: LoginResponse) -> Result<Session, ApiError> {
    data.into_session()
        .ok_or_else(|| ApiError::Auth("Login failed".to_string()))
}

/// Alta de usuario. El mensaje de error viene en `message` si el backend lo da.
pub async fn register(nombre: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let request = RegisterRequest {
        nombre: nombre.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    log::info!("📝 Registro de {}", request.email);
    match ApiClient::new().post("/auth/register", &request).await {
        Ok(_) => {
            log::info!("✅ Usuario registrado: {}", request.nombre);
            Ok(())
        }
        Err(ApiError::Http { status, message }) => Err(ApiError::Http {
            status,
            message: if message.trim().is_empty() {
                MSG_REGISTER_FAILED.to_string()
            } else {
                message
            },
        }),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_requires_token() {
        let data: LoginResponse =
            serde_json::from_str(r#"{"id": 3, "nombre": "Ana", "email": "ana@x.es"}"#).unwrap();
        assert_eq!(
            session_from_response(data).unwrap_err(),
            ApiError::Auth("Login failed".to_string())
        );

        let data: LoginResponse =
            serde_json::from_str(r#"{"id": 3, "nombre": "Ana", "token": "t"}"#).unwrap();
        let session = session_from_response(data).unwrap();
        assert_eq!(session.user_id.as_deref(), Some("3"));
        assert_eq!(session.nombre, "Ana");
    }
}
