use crate::app_config::{
    AppConfig, Environment, WhatsAppSettings, DEFAULT_API_VERSION, DEFAULT_GRAPH_BASE_URL,
    DEFAULT_RECIPIENT_PHONE, PLACEHOLDER_ACCESS_TOKEN, PLACEHOLDER_PHONE_NUMBER_ID,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid, or if production
/// credentials are missing.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default; outside production the WhatsApp credentials
/// fall back to placeholders so a fresh checkout still starts.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    // Set-but-blank counts as unset.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"))?;
    let bind_addr = parse_addr("STOREFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("STOREFRONT_HTTP_TIMEOUT_SECS", "30")?;
    if http_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_HTTP_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let graph_base_url = or_default("WHATSAPP_GRAPH_BASE_URL", DEFAULT_GRAPH_BASE_URL);
    if !graph_base_url.starts_with("http://") && !graph_base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "WHATSAPP_GRAPH_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{graph_base_url}'"),
        });
    }

    // Production must not fall back to placeholder credentials.
    let credential = |var: &str, placeholder: &str| -> Result<String, ConfigError> {
        match optional(var) {
            Some(value) => Ok(value),
            None if env == Environment::Production => {
                Err(ConfigError::MissingEnvVar(var.to_string()))
            }
            None => Ok(placeholder.to_string()),
        }
    };

    let whatsapp = WhatsAppSettings {
        access_token: credential("WHATSAPP_ACCESS_TOKEN", PLACEHOLDER_ACCESS_TOKEN)?,
        phone_number_id: credential("WHATSAPP_PHONE_NUMBER_ID", PLACEHOLDER_PHONE_NUMBER_ID)?,
        api_version: or_default("WHATSAPP_API_VERSION", DEFAULT_API_VERSION),
        graph_base_url,
        recipient_phone: or_default("RECIPIENT_PHONE_NUMBER", DEFAULT_RECIPIENT_PHONE),
        qr_code: optional("WHATSAPP_QR_CODE"),
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        whatsapp,
        http_timeout_secs,
        relay_url: optional("STOREFRONT_RELAY_URL"),
        site_url: or_default("STOREFRONT_SITE_URL", "http://localhost:3000/"),
        portfolio_dir: PathBuf::from(or_default("STOREFRONT_PORTFOLIO_DIR", "./images & logo")),
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ENV".to_string(),
            reason: format!("expected development, test, or production, got '{other}'"),
        }),
    }
}
