//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PULSE_CHECK` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use pulse_check::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod forms;
mod server;

pub use ai::{AiConfig, CredentialState, PLACEHOLDER_API_KEY};
pub use error::{ConfigError, ValidationError};
pub use forms::FormsConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Plain variable honoured when the prefixed key is not set.
const LEGACY_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads and runs in
/// fallback mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion gateway configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Form-collection endpoint configuration
    #[serde(default)]
    pub forms: FormsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds `ai.openai_api_key` from `OPENAI_API_KEY` if that is set
    /// 3. Reads variables with the `PULSE_CHECK` prefix, which win
    ///
    /// # Environment Variable Format
    ///
    /// - `PULSE_CHECK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PULSE_CHECK__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key`
    /// - `PULSE_CHECK__FORMS__ENDPOINT=...` -> `forms.endpoint`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(LEGACY_API_KEY_VAR) {
            builder = builder.set_default("ai.openai_api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("PULSE_CHECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.forms.validate()?;

        // Outbound calls must give up before the router answers 408.
        let request_secs = self.server.request_timeout_secs;
        for (field, upstream_secs) in [
            ("ai.timeout_secs", self.ai.timeout_secs),
            ("forms.timeout_secs", self.forms.timeout_secs),
        ] {
            if upstream_secs >= request_secs {
                return Err(ValidationError::UpstreamTimeoutTooLong {
                    field,
                    upstream_secs,
                    request_secs,
                });
            }
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PULSE_CHECK__SERVER__PORT",
        "PULSE_CHECK__SERVER__ENVIRONMENT",
        "PULSE_CHECK__AI__OPENAI_API_KEY",
        "PULSE_CHECK__AI__MODEL",
        "PULSE_CHECK__FORMS__ENDPOINT",
        "OPENAI_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_empty_environment_loads_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_values_are_read() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("PULSE_CHECK__SERVER__PORT", "3000"),
            ("PULSE_CHECK__SERVER__ENVIRONMENT", "production"),
            ("PULSE_CHECK__AI__MODEL", "gpt-4o"),
            ("PULSE_CHECK__FORMS__ENDPOINT", "http://localhost:9999/form"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.ai.model, "gpt-4o");
        assert_eq!(config.forms.endpoint, "http://localhost:9999/form");
    }

    #[test]
    fn test_prefixed_key_configures_live_mode() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("PULSE_CHECK__AI__OPENAI_API_KEY", "sk-test")]).unwrap();

        assert_eq!(config.ai.credential(), CredentialState::Configured);
    }

    #[test]
    fn test_plain_openai_key_is_honoured() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("OPENAI_API_KEY", "sk-plain")]).unwrap();

        let key = config.ai.api_key().map(|k| k.expose_secret().clone());
        assert_eq!(key.as_deref(), Some("sk-plain"));
    }

    #[test]
    fn test_prefixed_key_wins_over_plain() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("OPENAI_API_KEY", "sk-plain"),
            ("PULSE_CHECK__AI__OPENAI_API_KEY", "sk-prefixed"),
        ])
        .unwrap();

        let key = config.ai.api_key().map(|k| k.expose_secret().clone());
        assert_eq!(key.as_deref(), Some("sk-prefixed"));
    }

    #[test]
    fn test_placeholder_key_means_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("OPENAI_API_KEY", PLACEHOLDER_API_KEY)]).unwrap();

        assert_eq!(config.ai.credential(), CredentialState::Placeholder);
    }

    #[test]
    fn test_ai_timeout_must_undercut_request_timeout() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 30;
        config.ai.timeout_secs = 30;

        assert_eq!(
            config.validate(),
            Err(ValidationError::UpstreamTimeoutTooLong {
                field: "ai.timeout_secs",
                upstream_secs: 30,
                request_secs: 30,
            })
        );

        config.ai.timeout_secs = 29;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_forms_timeout_must_undercut_request_timeout() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 5;
        config.ai.timeout_secs = 4;
        config.forms.timeout_secs = 10;

        assert!(matches!(
            config.validate(),
            Err(ValidationError::UpstreamTimeoutTooLong {
                field: "forms.timeout_secs",
                ..
            })
        ));
    }

    #[test]
    fn test_unparseable_port_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = load_with(&[("PULSE_CHECK__SERVER__PORT", "eighty")]);

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
