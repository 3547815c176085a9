use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Tiempo que se muestra el aviso de registro correcto antes de abrir el login
    pub success_banner_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            success_banner_ms: 2000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("SUCCESS_BANNER_MS"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        success_banner_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            success_banner_ms: success_banner_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.success_banner_ms),
        }
    }

    /// URL completa de un endpoint de la API
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.api_base_url, path)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Error
        } else if self.is_production() {
            log::Level::Warn
        } else {
            log::Level::Debug
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.success_banner_ms, 2000);
        assert!(config.enable_logging);
        assert!(!config.is_production());
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let config = AppConfig::from_values(Some("https://recetas.example.com/"), None, None, None);
        assert_eq!(config.api_url("/recetas/7"), "https://recetas.example.com/api/recetas/7");
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, Some("production"), Some("nope"), Some("-1"));
        assert!(config.enable_logging);
        assert_eq!(config.success_banner_ms, 2000);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_logging_disabled_only_errors() {
        let config = AppConfig::from_values(None, None, Some("false"), None);
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
