use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Every variable has a default, so an empty environment yields a usable
/// development config that points at a placeholder CMS project. Fetches
/// against it fail and the site renders its empty state.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(invalid(var, format!("expected a boolean, got \"{raw}\""))),
        }
    };

    let env = parse_environment(&or_default("DOBRA_ENV", "development"))?;
    let bind_addr = parse_addr("DOBRA_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("DOBRA_LOG_LEVEL", "info");

    let site_url = or_default("DOBRA_SITE_URL", "https://dobra.vercel.app");
    if !(site_url.starts_with("https://") || site_url.starts_with("http://")) {
        return Err(invalid(
            "DOBRA_SITE_URL",
            format!("expected an http(s) URL, got \"{site_url}\""),
        ));
    }

    let sanity_project_id = or_default("SANITY_PROJECT_ID", "placeholder");
    let sanity_dataset = or_default("SANITY_DATASET", "production");
    let sanity_api_version = or_default("SANITY_API_VERSION", "2024-01-01")
        .trim_start_matches('v')
        .to_string();
    let sanity_use_cdn = parse_bool("SANITY_USE_CDN", "true")?;
    let sanity_api_token = lookup("SANITY_API_TOKEN")
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let revalidate_secs = parse_u64("DOBRA_REVALIDATE_SECS", "60")?;
    let settings_revalidate_secs = parse_u64("DOBRA_SETTINGS_REVALIDATE_SECS", "300")?;
    let cms_request_timeout_secs = parse_u64("DOBRA_CMS_REQUEST_TIMEOUT_SECS", "10")?;
    if cms_request_timeout_secs == 0 {
        return Err(invalid(
            "DOBRA_CMS_REQUEST_TIMEOUT_SECS",
            "timeout must be greater than zero".to_string(),
        ));
    }
    let cms_user_agent = or_default("DOBRA_CMS_USER_AGENT", "dobra/0.1 (catalog)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        site_url,
        sanity_project_id,
        sanity_dataset,
        sanity_api_version,
        sanity_use_cdn,
        sanity_api_token,
        revalidate_secs,
        settings_revalidate_secs,
        cms_request_timeout_secs,
        cms_user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DOBRA_ENV".to_string(),
            reason: format!("expected development, test or production, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
