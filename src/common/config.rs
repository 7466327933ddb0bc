use std::time::Duration;

use super::ConfigError;

pub const DEFAULT_BACKEND_DOMAIN: &str = "http://localhost:5000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend_domain: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub backend_timeout: Duration,
    pub page_size: usize,
    pub contact_rate_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_domain: DEFAULT_BACKEND_DOMAIN.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: "./static".to_string(),
            backend_timeout: Duration::from_secs(10),
            page_size: 9,
            contact_rate_limit: 5,
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend_domain = match var("BACKEND_DOMAIN").or_else(|| var("NEXT_PUBLIC_BACKEND_DOMAIN")) {
            Some(domain) => normalize_backend_domain(&domain)?,
            None => {
                log::warn!("BACKEND_DOMAIN not set, using {DEFAULT_BACKEND_DOMAIN}");
                defaults.backend_domain
            }
        };

        let timeout_secs = parse_or(var("BACKEND_TIMEOUT_SECS"), "BACKEND_TIMEOUT_SECS", 10u64);

        Ok(Self {
            backend_domain,
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: var("STATIC_DIR").unwrap_or(defaults.static_dir),
            backend_timeout: Duration::from_secs(timeout_secs.max(1)),
            page_size: parse_or(var("PAGE_SIZE"), "PAGE_SIZE", defaults.page_size).max(1),
            contact_rate_limit: parse_or(
                var("CONTACT_RATE_LIMIT"),
                "CONTACT_RATE_LIMIT",
                defaults.contact_rate_limit,
            ),
        })
    }
}

pub fn normalize_backend_domain(domain: &str) -> Result<String, ConfigError> {
    let domain = domain.trim().trim_end_matches('/');
    let has_scheme = domain.starts_with("http://") || domain.starts_with("https://");
    let has_host = domain
        .split_once("://")
        .is_some_and(|(_, host)| !host.is_empty());

    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidBackendUrl(domain.to_string()));
    }

    Ok(domain.to_string())
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("{key}={raw:?} is not a valid number, using default");
            default
        }),
        None => default,
    }
}
