//! Runtime configuration of the storefront
//!
//! Resolved once per page load. The API base URL comes from, in order:
//! the `storefront_api_base` localStorage key, the compile-time
//! `STOREFRONT_API_BASE` variable, or the page host on port 3000.

use std::str::FromStr;

const API_BASE_KEY: &str = "storefront_api_base";
const LOG_LEVEL_KEY: &str = "storefront_log_level";
const API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    /// Page size of storefront product and blog grids
    pub storefront_page_size: usize,
    /// Page size of admin tables
    pub admin_page_size: usize,
    pub toast_timeout_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            storefront_page_size: 12,
            admin_page_size: 10,
            toast_timeout_ms: 3500,
            log_level: log::Level::Debug,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        let stored = |key: &str| {
            storage
                .as_ref()
                .and_then(|s| s.get_item(key).ok().flatten())
                .filter(|v| !v.trim().is_empty())
        };

        let api_base = stored(API_BASE_KEY)
            .or_else(|| option_env!("STOREFRONT_API_BASE").map(str::to_string))
            .unwrap_or_else(location_api_base);
        let log_level = stored(LOG_LEVEL_KEY)
            .and_then(|v| parse_log_level(&v))
            .unwrap_or(log::Level::Debug);

        Self {
            api_base: normalize_base(&api_base),
            log_level,
            ..Self::default()
        }
    }
}

/// `<protocol>//<hostname>:3000` of the current page, empty outside a browser
fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn parse_log_level(raw: &str) -> Option<log::Level> {
    log::Level::from_str(raw.trim()).ok()
}

thread_local! {
    static CONFIG: AppConfig = AppConfig::load();
}

pub fn app_config() -> AppConfig {
    CONFIG.with(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" https://shop.example.com/ "), "https://shop.example.com");
        assert_eq!(normalize_base("http://localhost:3000//"), "http://localhost:3000");
        assert_eq!(normalize_base(""), "");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("warn"), Some(log::Level::Warn));
        assert_eq!(parse_log_level(" INFO "), Some(log::Level::Info));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storefront_page_size, 12);
        assert_eq!(config.admin_page_size, 10);
    }
}
