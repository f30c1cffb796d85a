//! Client configuration resolved from build-time environment variables.
//!
//! The WASM bundle has no process environment at runtime, so values are baked
//! in with `option_env!` when the crate is compiled:
//!
//! - `TIMOS_API_BASE_URL`: origin of the auth backend (default: same origin)
//! - `TIMOS_SIGN_UP_PATH`: sign-up endpoint path (default `/api/auth/signup`)
//! - `TIMOS_SIGN_IN_HREF`: target of the "Entre agora" link (default `/`)
//! - `TIMOS_AFTER_SIGN_UP_HREF`: redirect after account creation (default `/dashboard`)

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_SIGN_UP_PATH: &str = "/api/auth/signup";
pub const DEFAULT_SIGN_IN_HREF: &str = "/";
pub const DEFAULT_AFTER_SIGN_UP_HREF: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must start with '/': {value}")]
    RelativePath { key: &'static str, value: String },

    #[error("{key} must be an http(s) URL: {value}")]
    InvalidBaseUrl { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without trailing slash; empty means same origin.
    pub api_base_url: String,
    pub sign_up_path: String,
    pub sign_in_href: String,
    pub after_sign_up_href: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            sign_up_path: DEFAULT_SIGN_UP_PATH.to_owned(),
            sign_in_href: DEFAULT_SIGN_IN_HREF.to_owned(),
            after_sign_up_href: DEFAULT_AFTER_SIGN_UP_HREF.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from the values captured at compile time.
    ///
    /// Falls back to [`ClientConfig::default`] and logs a warning when a
    /// captured value is malformed.
    pub fn from_build_env() -> Self {
        let raw = RawClientConfig {
            api_base_url: option_env!("TIMOS_API_BASE_URL"),
            sign_up_path: option_env!("TIMOS_SIGN_UP_PATH"),
            sign_in_href: option_env!("TIMOS_SIGN_IN_HREF"),
            after_sign_up_href: option_env!("TIMOS_AFTER_SIGN_UP_HREF"),
        };
        match Self::from_raw(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid build-time client config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Parse raw optional values; absent or blank values take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a path does not start with `/` or the base
    /// URL is not an http(s) URL.
    pub fn from_raw(raw: &RawClientConfig<'_>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url("TIMOS_API_BASE_URL", raw.api_base_url)?;
        let sign_up_path = parse_path("TIMOS_SIGN_UP_PATH", raw.sign_up_path, DEFAULT_SIGN_UP_PATH)?;
        let sign_in_href = parse_path("TIMOS_SIGN_IN_HREF", raw.sign_in_href, DEFAULT_SIGN_IN_HREF)?;
        let after_sign_up_href =
            parse_path("TIMOS_AFTER_SIGN_UP_HREF", raw.after_sign_up_href, DEFAULT_AFTER_SIGN_UP_HREF)?;
        Ok(Self { api_base_url, sign_up_path, sign_in_href, after_sign_up_href })
    }

    /// Full URL of the sign-up endpoint.
    pub fn sign_up_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.sign_up_path)
    }
}

/// Unparsed config values, one per recognised variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawClientConfig<'a> {
    pub api_base_url: Option<&'a str>,
    pub sign_up_path: Option<&'a str>,
    pub sign_in_href: Option<&'a str>,
    pub after_sign_up_href: Option<&'a str>,
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(key: &'static str, raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(String::new());
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl { key, value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_path(key: &'static str, raw: Option<&str>, default: &str) -> Result<String, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(default.to_owned());
    };
    if !value.starts_with('/') {
        return Err(ConfigError::RelativePath { key, value: value.to_owned() });
    }
    Ok(value.to_owned())
}
