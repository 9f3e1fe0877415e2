//! Endpoint configuration and URL construction for the catalog API.
//!
//! All endpoints are joined onto the injected base URL, so the client can be
//! pointed at any deployment (or a sub-path of one) without code changes.

use std::time::Duration;

use storefront_core::CategoryId;
use url::Url;

use crate::config::ClientConfig;
use crate::error::HttpResult;

/// Path of the category collection, relative to the base URL.
const CATEGORIES_PATH: &str = "api/categories";
/// Path of the navbar entry collection, relative to the base URL.
const NAVHEADERS_PATH: &str = "api/admin/navheaders";

/// Internal configuration derived from [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Base URL, always ending in `/` so relative joins append.
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient read errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

impl EndpointConfig {
    /// Derive the internal config, rejecting an unparsable base URL.
    pub fn from_client_config(config: &ClientConfig) -> HttpResult<Self> {
        Ok(Self {
            base_url: normalize_base(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        })
    }
}

#[cfg(test)]
impl Default for EndpointConfig {
    fn default() -> Self {
        Self::from_client_config(&ClientConfig::default()).expect("default base URL is valid")
    }
}

/// Parse a base URL and make sure its path ends with a slash.
fn normalize_base(raw: &str) -> HttpResult<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// URL of the category collection.
pub fn categories_url(config: &EndpointConfig) -> HttpResult<Url> {
    Ok(config.base_url.join(CATEGORIES_PATH)?)
}

/// URL of a single category.
pub fn category_url(config: &EndpointConfig, id: &CategoryId) -> HttpResult<Url> {
    let path = format!("{CATEGORIES_PATH}/{}", urlencoding::encode(id.as_str()));
    Ok(config.base_url.join(&path)?)
}

/// URL of the navbar entry collection.
pub fn navheaders_url(config: &EndpointConfig) -> HttpResult<Url> {
    Ok(config.base_url.join(NAVHEADERS_PATH)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(base: &str) -> EndpointConfig {
        EndpointConfig::from_client_config(&ClientConfig::new().with_base_url(base)).unwrap()
    }

    #[test]
    fn test_categories_url_default() {
        let config = EndpointConfig::default();
        assert_eq!(
            categories_url(&config).unwrap().as_str(),
            "http://localhost:5000/api/categories"
        );
    }

    #[test]
    fn test_base_without_trailing_slash_keeps_sub_path() {
        let config = config_for("https://shop.example.com/backend");
        assert_eq!(
            categories_url(&config).unwrap().as_str(),
            "https://shop.example.com/backend/api/categories"
        );
    }

    #[test]
    fn test_category_url_encodes_id() {
        let config = config_for("http://localhost:5000/");
        let url = category_url(&config, &CategoryId::new("64f0a1")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/categories/64f0a1");

        let url = category_url(&config, &CategoryId::new("a/b c")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/categories/a%2Fb%20c");
    }

    #[test]
    fn test_navheaders_url() {
        let config = config_for("http://localhost:5000/");
        assert_eq!(
            navheaders_url(&config).unwrap().as_str(),
            "http://localhost:5000/api/admin/navheaders"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = EndpointConfig::from_client_config(&ClientConfig::new().with_base_url("not a url"));
        assert!(result.is_err());
    }
}
