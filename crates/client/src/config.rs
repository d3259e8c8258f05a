//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use runtime::RuntimeConfig;

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Layout file; the built-in classic board when unset.
    pub level: Option<PathBuf>,
    /// TOML scoring rules; defaults when unset.
    pub rules: Option<PathBuf>,
    pub session_id: Option<String>,
    /// Seed for monster movement policies.
    pub seed: u64,
    pub runtime: RuntimeConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PACMAN_LEVEL` - Path to a layout file
    /// - `PACMAN_CONFIG` - Path to a TOML rules file
    /// - `PACMAN_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `PACMAN_SEED` - Monster policy seed (default: derived from the clock)
    /// - plus everything read by [`RuntimeConfig::from_env`]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("PACMAN_SEED")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            level: lookup("PACMAN_LEVEL").map(PathBuf::from),
            rules: lookup("PACMAN_CONFIG").map(PathBuf::from),
            session_id: lookup("PACMAN_SESSION_ID"),
            seed,
            runtime: RuntimeConfig::from_lookup(&lookup),
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_paths_and_seed() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("PACMAN_LEVEL", "maze.txt"),
            ("PACMAN_SEED", " 42 "),
            ("PACMAN_COMMAND_BUFFER", "8"),
        ]));

        assert_eq!(config.level, Some(PathBuf::from("maze.txt")));
        assert_eq!(config.rules, None);
        assert_eq!(config.seed, 42);
        assert_eq!(config.runtime.command_buffer_size, 8);
    }
}
