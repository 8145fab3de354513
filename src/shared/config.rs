//! Application configuration. Region override, data file, feed and UI settings.

use serde::Deserialize;

/// Feed messages shown at once. Older posts stay in the session store, just not on screen.
pub const DEFAULT_FEED_LIMIT: usize = 20;

/// Pre-filled name on the post form.
pub const DEFAULT_USER_NAME: &str = "You";

/// Env prefix: `NABORLY_FEED_LIMIT`, `NABORLY_DATA_FILE`, ...
const ENV_PREFIX: &str = "NABORLY";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Overrides the region name from the data set. Read from NABORLY_REGION_NAME.
    #[serde(default)]
    pub region_name: Option<String>,

    /// JSON data file replacing the built-in tables. Read from NABORLY_DATA_FILE.
    #[serde(default)]
    pub data_file: Option<String>,

    /// Number of feed messages displayed (default 20). Read from NABORLY_FEED_LIMIT.
    #[serde(default)]
    pub feed_limit: Option<usize>,

    /// Default poster name (default "You"). Read from NABORLY_DEFAULT_USER.
    #[serde(default)]
    pub default_user: Option<String>,

    /// tracing filter used when RUST_LOG is unset. Read from NABORLY_LOG_LEVEL.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Print the figlet banner at startup (default true). Read from NABORLY_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,
}

impl AppConfig {
    /// Environment (after `.env`) plus the optional file named by NABORLY_CONFIG.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::build(
            config::Environment::with_prefix(ENV_PREFIX).try_parsing(true),
            std::env::var("NABORLY_CONFIG").ok().as_deref(),
        )
    }

    fn build(
        env: config::Environment,
        file: Option<&str>,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        // Env wins over the file.
        c = c.add_source(env);
        c.build()?.try_deserialize()
    }

    /// Returns the feed view length. Zero is treated as unset.
    pub fn feed_limit_or_default(&self) -> usize {
        self.feed_limit
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_FEED_LIMIT)
    }

    pub fn default_user_or_default(&self) -> String {
        self.default_user
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_USER_NAME)
            .to_string()
    }

    /// Quiet by default so log lines don't interleave with prompts.
    pub fn log_level_or_default(&self) -> String {
        self.log_level.clone().unwrap_or_else(|| "warn".to_string())
    }

    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::build(env(&[]), None).unwrap();
        assert_eq!(cfg.feed_limit_or_default(), DEFAULT_FEED_LIMIT);
        assert_eq!(cfg.default_user_or_default(), "You");
        assert_eq!(cfg.log_level_or_default(), "warn");
        assert!(cfg.show_banner_or_default());
        assert!(cfg.data_file.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let cfg = AppConfig::build(
            env(&[
                ("NABORLY_FEED_LIMIT", "5"),
                ("NABORLY_DEFAULT_USER", "Amit"),
                ("NABORLY_SHOW_BANNER", "false"),
                ("NABORLY_DATA_FILE", "ward3.json"),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(cfg.feed_limit_or_default(), 5);
        assert_eq!(cfg.default_user_or_default(), "Amit");
        assert!(!cfg.show_banner_or_default());
        assert_eq!(cfg.data_file.as_deref(), Some("ward3.json"));
    }

    #[test]
    fn test_file_then_env() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "feed_limit = 7\nregion_name = \"Ward 3\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cfg = AppConfig::build(env(&[("NABORLY_FEED_LIMIT", "9")]), Some(&path)).unwrap();
        assert_eq!(cfg.feed_limit_or_default(), 9);
        assert_eq!(cfg.region_name.as_deref(), Some("Ward 3"));
    }

    #[test]
    fn test_zero_limit_and_blank_user_fall_back() {
        let cfg = AppConfig {
            feed_limit: Some(0),
            default_user: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(cfg.feed_limit_or_default(), DEFAULT_FEED_LIMIT);
        assert_eq!(cfg.default_user_or_default(), "You");
    }
}
