//! Application configuration management.

use serde::Deserialize;

/// Core configuration for the garrison records engines.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Login-failure limiter tunables.
    #[serde(default)]
    pub limiter: LimiterConfig,
    /// Visibility scoping tunables.
    #[serde(default)]
    pub scope: ScopeConfig,
}

/// Login-failure limiter tunables.
///
/// Both values are externally supplied; the limiter never hardcodes them.
#[derive(Debug, Clone, Deserialize)]
pub struct LimiterConfig {
    /// Failure count admitted before the cooldown engages.
    #[serde(default = "default_failure_limit")]
    pub failure_limit: u32,
    /// Base cooldown window in seconds; the window scales with the number
    /// of failures past the limit.
    #[serde(default = "default_cooldown_base")]
    pub cooldown_base_secs: u64,
}

fn default_failure_limit() -> u32 {
    5
}

fn default_cooldown_base() -> u64 {
    60
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            failure_limit: default_failure_limit(),
            cooldown_base_secs: default_cooldown_base(),
        }
    }
}

/// Visibility scoping tunables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeConfig {
    /// Call sites that still depend on the legacy unscoped fallback must
    /// opt in here; the resolver itself always defaults to scoped results.
    #[serde(default)]
    pub allow_empty_scope_fallback: bool,
}

impl CoreConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Pick up a local .env file if present.
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GARRISON").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
