//! Application Configuration
//!
//! Resolved once at startup and provided through context.

use log::LevelFilter;

use crate::items::DEFAULT_CAPACITY;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// `<meta name="knapsack-api-url" content="...">` overrides the build-time URL
const API_URL_META: &str = "knapsack-api-url";

/// How long a toast stays up, then how long it takes to fade out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Solver service base URL, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
    pub toast: ToastTiming,
    /// Capacity of the instance shown at startup
    pub default_capacity: f64,
}

impl AppConfig {
    /// Host page meta tag, then `KNAPSACK_API_URL` / `KNAPSACK_LOG` at build time
    pub fn load() -> Self {
        let meta_url = read_meta(API_URL_META);
        Self::resolve(
            meta_url.as_deref(),
            option_env!("KNAPSACK_API_URL"),
            option_env!("KNAPSACK_LOG"),
        )
    }

    pub fn resolve(meta_url: Option<&str>, env_url: Option<&str>, env_log: Option<&str>) -> Self {
        let url = [meta_url, env_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        let log_level = env_log
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
            log_level,
            toast: ToastTiming::default(),
            default_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document.query_selector(&selector).ok()??.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.toast, ToastTiming { display_ms: 3000, exit_ms: 300 });
        assert_eq!(config.default_capacity, 50.0);
    }

    #[test]
    fn test_meta_wins_over_build_env() {
        let config = AppConfig::resolve(
            Some("https://solver.example/api/"),
            Some("http://build-time/api"),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "https://solver.example/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_meta_is_ignored() {
        let config = AppConfig::resolve(Some("  "), Some("http://build-time/api"), Some("loud"));
        assert_eq!(config.api_base_url, "http://build-time/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
