//! Session configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable holding the RNG seed.
pub const SEED_VAR: &str = "TETRIS_SPRINT_SEED";
/// Environment variable naming the log file.
pub const LOG_VAR: &str = "TETRIS_SPRINT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the bag randomizer
    pub seed: u32,
    /// Where to write logs; `None` disables logging
    pub log_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = parse_seed(lookup(SEED_VAR)).unwrap_or_else(clock_seed);

        let log_path = lookup(LOG_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        Self { seed, log_path }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            log_path: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::with_seed(clock_seed())
    }
}

/// A seed value, if present and a valid u32.
fn parse_seed(value: Option<String>) -> Option<u32> {
    value.and_then(|s| s.trim().parse().ok())
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so consecutive runs differ in the low bits too.
    (nanos ^ (nanos >> 32)) as u32
}
