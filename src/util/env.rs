//! Environment helpers: centralized dotenv loading and typed getters.
//! Call sites can rely on the lazy `Once`; no explicit bootstrap needed.

use std::str::FromStr;
use std::sync::Once;

static INIT: Once = Once::new();

/// Load `.env` exactly once. Safe to call many times from any entry point.
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Optional env var (None when unset or blank).
pub fn env_opt(key: &str) -> Option<String> {
    init_env();
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Parsed value with a default fallback.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    init_env();
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Catalog backend base URL (`SHOP_API_BASE_URL`).
pub fn shop_api_base_url() -> String {
    env_opt("SHOP_API_BASE_URL").unwrap_or_else(|| "http://localhost:5000".to_string())
}

/// Catalog backend request timeout in seconds (`SHOP_API_TIMEOUT_SECS`).
pub fn shop_api_timeout_secs() -> u64 {
    env_parse("SHOP_API_TIMEOUT_SECS", 15)
}
