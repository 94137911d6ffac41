//! Application configuration.
//!
//! The persistence backend needs two values supplied through the
//! environment: the project endpoint and its public key. Their absence is
//! not fatal; it is reported as a startup warning and the gateway runs
//! unconfigured (requests execute, nothing persists).

use log::warn;

/// Environment variable naming the persistence endpoint.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";

/// Environment variable holding the public (anon) key for the endpoint.
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

/// Configuration values read from the environment at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the persistence backend.
    pub supabase_url: Option<String>,

    /// Public key sent with every persistence call.
    pub supabase_anon_key: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Unset and blank values are both treated as missing.
    pub fn from_env() -> Self {
        Self {
            supabase_url: read_var(ENV_SUPABASE_URL),
            supabase_anon_key: read_var(ENV_SUPABASE_ANON_KEY),
        }
    }

    /// Names of the required variables that are not set.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.supabase_url.is_none() {
            missing.push(ENV_SUPABASE_URL);
        }
        if self.supabase_anon_key.is_none() {
            missing.push(ENV_SUPABASE_ANON_KEY);
        }
        missing
    }

    /// Whether both required values are present.
    pub fn is_complete(&self) -> bool {
        self.missing_vars().is_empty()
    }
}

fn read_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// Logs a startup warning naming every missing configuration variable.
///
/// Called once at startup so a half-configured environment is never
/// silently ignored.
pub fn warn_if_incomplete(config: &AppConfig) {
    for var in config.missing_vars() {
        warn!("{} is not set; request history will not be persisted", var);
    }
}
