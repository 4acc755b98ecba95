//! Run configuration: base profile location and fetch policy.

use std::time::Duration;

/// Published location of the Taverna base component profile.
pub const DEFAULT_BASE_PROFILE: &str = "http://build.mygrid.org.uk/taverna/BaseProfile.xml";

/// Environment variable overriding [`ValidatorConfig::base_profile`].
pub const BASE_PROFILE_ENV: &str = "COMPONENT_VALIDATOR_BASE_PROFILE";

/// Environment variable overriding the fetch timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "COMPONENT_VALIDATOR_TIMEOUT_SECS";

/// Environment variable overriding the number of fetch retries.
pub const RETRIES_ENV: &str = "COMPONENT_VALIDATOR_RETRIES";

/// Settings for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Location of the base profile appended to every profile chain.
    /// Relative paths are resolved against the working directory.
    pub base_profile: String,
    /// Timeout applied to each network fetch.
    pub fetch_timeout: Duration,
    /// How many times a transiently failing fetch is retried.
    pub retries: u32,
    /// Delay before the first retry; doubled for each subsequent one.
    pub retry_backoff: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            base_profile: DEFAULT_BASE_PROFILE.to_string(),
            fetch_timeout: Duration::from_secs(30),
            retries: 2,
            retry_backoff: Duration::from_millis(250),
        }
    }
}

impl ValidatorConfig {
    /// Builds a configuration from the defaults, overridden by any of
    /// [`BASE_PROFILE_ENV`], [`TIMEOUT_ENV`] and [`RETRIES_ENV`] that are set.
    ///
    /// Unparseable numeric values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var(BASE_PROFILE_ENV) {
            if !base.trim().is_empty() {
                config.base_profile = base;
            }
        }
        if let Some(secs) = numeric_env(TIMEOUT_ENV) {
            config.fetch_timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = numeric_env(RETRIES_ENV) {
            config.retries = u32::try_from(retries).unwrap_or(u32::MAX);
        }
        config
    }

    /// Replaces the base profile location.
    #[must_use]
    pub fn with_base_profile(mut self, location: impl Into<String>) -> Self {
        self.base_profile = location.into();
        self
    }

    /// Replaces the fetch timeout.
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Replaces the retry count and initial backoff.
    #[must_use]
    pub fn with_retries(mut self, retries: u32, backoff: Duration) -> Self {
        self.retries = retries;
        self.retry_backoff = backoff;
        self
    }
}

fn numeric_env(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "ignoring non-numeric setting");
            None
        }
    }
}
