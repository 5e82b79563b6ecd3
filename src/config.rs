use std::env;
use std::path::PathBuf;

/// Service configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct ChartHubConfig {
    pub bind: String,
    pub port: u16,
    /// SQLite database holding candle rows and label/value chart series.
    pub db_path: PathBuf,
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_path(name: &str, default: &str) -> PathBuf {
    PathBuf::from(env_str(name, default))
}

impl ChartHubConfig {
    pub fn from_env() -> Self {
        Self {
            bind: env_str("CHARTHUB_BIND", "127.0.0.1"),
            port: env_u16("CHARTHUB_PORT", 8000),
            db_path: env_path("CHARTHUB_DB", "charts.db"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_str_trims_and_falls_back_on_empty() {
        env::set_var("CHARTHUB_TEST_STR", "  padded  ");
        assert_eq!(env_str("CHARTHUB_TEST_STR", "dflt"), "padded");
        env::set_var("CHARTHUB_TEST_STR", "   ");
        assert_eq!(env_str("CHARTHUB_TEST_STR", "dflt"), "dflt");
        env::remove_var("CHARTHUB_TEST_STR");
        assert_eq!(env_str("CHARTHUB_TEST_STR", "dflt"), "dflt");
    }

    #[test]
    fn env_u16_rejects_garbage() {
        env::set_var("CHARTHUB_TEST_PORT", "not-a-port");
        assert_eq!(env_u16("CHARTHUB_TEST_PORT", 8000), 8000);
        env::set_var("CHARTHUB_TEST_PORT", "61010");
        assert_eq!(env_u16("CHARTHUB_TEST_PORT", 8000), 61010);
        env::remove_var("CHARTHUB_TEST_PORT");
    }
}
