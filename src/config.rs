//! Runtime configuration.
//!
//! Values come from the process environment, which a local `.env` feeds on
//! native targets. Anything unset falls back to the bundled
//! `assets/config.env`.

use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Bundled config for builds without a `.env` (web, mobile)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
pub const DEFAULT_AUTH_DELAY_MS: u64 = 1000;
pub const DEFAULT_SIGNUP_DELAY_MS: u64 = 1500;
pub const DEFAULT_SAVE_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOG_FILTER: &str = "info";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Delay before the chat widget answers.
    pub reply_delay: Duration,
    /// Simulated latency of the login round trip.
    pub auth_delay: Duration,
    pub signup_delay: Duration,
    /// Simulated latency of profile saves.
    pub save_delay: Duration,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            signup_delay: Duration::from_millis(DEFAULT_SIGNUP_DELAY_MS),
            save_delay: Duration::from_millis(DEFAULT_SAVE_DELAY_MS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Build a config from the process environment, falling back to the
    /// bundled `config.env` for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(env_or_bundled)
    }

    /// Build a config from an arbitrary key lookup. Unset or unparsable
    /// values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            reply_delay: millis(&lookup, "INSUREAI_REPLY_DELAY_MS", defaults.reply_delay),
            auth_delay: millis(&lookup, "INSUREAI_AUTH_DELAY_MS", defaults.auth_delay),
            signup_delay: millis(&lookup, "INSUREAI_SIGNUP_DELAY_MS", defaults.signup_delay),
            save_delay: millis(&lookup, "INSUREAI_SAVE_DELAY_MS", defaults.save_delay),
            log_filter: log_filter_from(&lookup),
        }
    }
}

/// `INSUREAI_LOG` alone. Does not build the global config, so it is safe to
/// call before the subscriber is installed.
pub fn startup_log_filter() -> String {
    log_filter_from(&env_or_bundled)
}

fn log_filter_from<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("INSUREAI_LOG")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn env_or_bundled(key: &str) -> Option<String> {
    env::var(key).ok().or_else(|| bundled_value(key))
}

fn millis<F>(lookup: &F, key: &str, fallback: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(err) => {
                tracing::warn!(key, value = %raw, error = %err, "ignoring invalid delay");
                fallback
            }
        },
        None => fallback,
    }
}

/// Global config, read from the environment on first access.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

/// Load a local `.env` into the process environment. Returns its path when
/// one was found.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// The browser has no process environment; `config()` reads the bundled
/// values directly.
#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() -> Option<PathBuf> {
    None
}

fn bundled_value(key: &str) -> Option<String> {
    parse_env_lines(BUNDLED_CONFIG)
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_string())
}

/// Parse `KEY=VALUE` lines, skipping comments and blanks.
pub fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some((key.trim(), value.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.reply_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_overrides_delays() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("INSUREAI_REPLY_DELAY_MS", "10"),
            ("INSUREAI_AUTH_DELAY_MS", " 20 "),
            ("INSUREAI_LOG", "debug"),
        ]));
        assert_eq!(config.reply_delay, Duration::from_millis(10));
        assert_eq!(config.auth_delay, Duration::from_millis(20));
        assert_eq!(config.signup_delay, Duration::from_millis(1500));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_delay_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("INSUREAI_SAVE_DELAY_MS", "soon")]));
        assert_eq!(config.save_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_log_filter_lookup() {
        assert_eq!(log_filter_from(&|_: &str| None), "info");
        assert_eq!(log_filter_from(&lookup_from(&[("INSUREAI_LOG", " debug ")])), "debug");
        assert_eq!(log_filter_from(&lookup_from(&[("INSUREAI_LOG", "  ")])), "info");
    }

    #[test]
    fn test_startup_filter_leaves_config_unbuilt() {
        let filter = startup_log_filter();
        assert!(!filter.is_empty());
        assert!(CONFIG.get().is_none());
    }

    #[test]
    fn test_bundled_values() {
        assert_eq!(bundled_value("INSUREAI_REPLY_DELAY_MS").as_deref(), Some("1500"));
        assert_eq!(bundled_value("INSUREAI_LOG").as_deref(), Some("info"));
        assert_eq!(bundled_value("MISSING"), None);
    }

    #[test]
    fn test_parse_env_lines() {
        let source = "# comment\n\nA=1\n B = two \nnot a pair\n";
        let pairs: Vec<_> = parse_env_lines(source).collect();
        assert_eq!(pairs, vec![("A", "1"), ("B", "two")]);
    }
}
