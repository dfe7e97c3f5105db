//! Backend location for the product browser.

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Environment variable read by [`BrowserConfig::from_env`] on native targets.
pub const API_BASE_ENV_VAR: &str = "PRODUCT_BROWSER_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    api_base_url: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl BrowserConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uses `base_url` when given and non-blank, the default otherwise.
    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::with_base_url(url),
            _ => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let from_env = std::env::var(API_BASE_ENV_VAR).ok();
        Self::from_override(from_env.as_deref())
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
