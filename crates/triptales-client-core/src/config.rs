pub const DEFAULT_API_BASE_URL: &str = "https://triptales-rvym.onrender.com";
pub const ENV_API_BASE_URL: &str = "TRIPTALES_API_BASE_URL";
pub const API_BASE_SOURCE_DEFAULT: &str = "default_production";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base url must not be empty")]
    EmptyBaseUrl,
    #[error("base url must use http:// or https:// and include a host")]
    InvalidBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Resolves the API base URL baked in at compile time.
    ///
    /// `TRIPTALES_API_BASE_URL` set while building wins over the production
    /// default. The second tuple element names the source for diagnostics.
    pub fn from_build_env() -> Result<(Self, &'static str), ConfigError> {
        resolve_base_url(option_env!("TRIPTALES_API_BASE_URL"))
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed.starts_with('/') {
            format!("{}{}", self.base_url, trimmed)
        } else {
            format!("{}/{}", self.base_url, trimmed)
        }
    }
}

pub fn resolve_base_url(
    build_value: Option<&str>,
) -> Result<(ClientConfig, &'static str), ConfigError> {
    let configured = build_value
        .map(str::trim)
        .filter(|value| !value.is_empty());
    match configured {
        Some(raw) => ClientConfig::new(raw).map(|config| (config, ENV_API_BASE_URL)),
        None => ClientConfig::new(DEFAULT_API_BASE_URL)
            .map(|config| (config, API_BASE_SOURCE_DEFAULT)),
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl);
    }
    let Some((_, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl);
    };
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl);
    }
    Ok(trimmed.to_string())
}
