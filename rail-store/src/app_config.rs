use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub dispatcher: DispatcherConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DispatcherConfig {
    #[serde(default = "default_delay_ms")]
    pub default_delay_ms: u64,
    #[serde(default = "default_pnr_delay_ms")]
    pub pnr_delay_ms: u64,
}

fn default_delay_ms() -> u64 { 1000 }
fn default_pnr_delay_ms() -> u64 { 1500 }

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: default_delay_ms(),
            pnr_delay_ms: default_pnr_delay_ms(),
        }
    }
}

impl DispatcherConfig {
    pub fn default_delay(&self) -> Duration {
        Duration::from_millis(self.default_delay_ms)
    }

    pub fn pnr_delay(&self) -> Duration {
        Duration::from_millis(self.pnr_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration_seconds: u64,
}

fn default_jwt_secret() -> String { "rail_mock_demo_secret".to_string() }
fn default_jwt_expiration() -> u64 { 3600 }

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_expiration_seconds: default_jwt_expiration(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    /// JSON file replacing the built-in dataset
    pub seed_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default = "default_visited_flag_path")]
    pub visited_flag_path: String,
    #[serde(default = "default_captcha_length")]
    pub captcha_length: usize,
}

fn default_visited_flag_path() -> String { ".rail_visited".to_string() }
fn default_captcha_length() -> usize { 6 }

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            visited_flag_path: default_visited_flag_path(),
            captcha_length: default_captcha_length(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Shipped defaults; every key also has a serde default so the file may be absent
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `RAIL__DISPATCHER__DEFAULT_DELAY_MS=0` would disable the simulated latency
            .add_source(
                config::Environment::with_prefix("RAIL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dispatcher.default_delay(), Duration::from_millis(1000));
        assert_eq!(config.dispatcher.pnr_delay(), Duration::from_millis(1500));
        assert_eq!(config.client.captcha_length, 6);
        assert!(config.store.seed_file.is_none());
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn test_load_applies_environment_overrides() {
        env::set_var("RAIL__DISPATCHER__DEFAULT_DELAY_MS", "250");
        env::set_var("RAIL__CLIENT__VISITED_FLAG_PATH", "/tmp/rail_visited_test");
        let loaded = Config::load();
        env::remove_var("RAIL__DISPATCHER__DEFAULT_DELAY_MS");
        env::remove_var("RAIL__CLIENT__VISITED_FLAG_PATH");

        let config = loaded.unwrap();
        assert_eq!(config.dispatcher.default_delay(), Duration::from_millis(250));
        assert_eq!(config.dispatcher.pnr_delay_ms, 1500);
        assert_eq!(config.client.visited_flag_path, "/tmp/rail_visited_test");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let s = config::Config::builder()
            .add_source(config::File::from_str(
                "[dispatcher]\ndefault_delay_ms = 250\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: Config = s.try_deserialize().unwrap();

        assert_eq!(config.dispatcher.default_delay_ms, 250);
        assert_eq!(config.dispatcher.pnr_delay_ms, 1500);
        assert_eq!(config.auth.jwt_expiration_seconds, 3600);
    }
}
