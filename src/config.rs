//! Start-up configuration from environment variables.
//!
//! | variable                | meaning                         |
//! |-------------------------|---------------------------------|
//! | `FRUITRIS_SEED`         | RNG seed (u32)                  |
//! | `FRUITRIS_DROP_MS`      | gravity interval in ms, > 0     |
//! | `FRUITRIS_CLEAR_POLICY` | `single` or `cascade`           |
//! | `FRUITRIS_LOG_PATH`     | append lock events to this file |
//!
//! Empty values count as unset.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::GameConfig;
use crate::types::ClearPolicy;

pub const ENV_SEED: &str = "FRUITRIS_SEED";
pub const ENV_DROP_MS: &str = "FRUITRIS_DROP_MS";
pub const ENV_CLEAR_POLICY: &str = "FRUITRIS_CLEAR_POLICY";
pub const ENV_LOG_PATH: &str = "FRUITRIS_LOG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log_path: Option<String>,
}

impl AppConfig {
    /// Read the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; a missing seed is derived from the clock
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get(ENV_SEED) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| anyhow!("config: invalid {} value: {:?}", ENV_SEED, raw))?,
            None => clock_seed(),
        };

        let drop_interval_ms = match get(ENV_DROP_MS) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => return Err(anyhow!("config: invalid {} value: {:?}", ENV_DROP_MS, raw)),
            },
            None => GameConfig::default().drop_interval_ms,
        };

        let clear_policy = match get(ENV_CLEAR_POLICY) {
            Some(raw) => ClearPolicy::from_str(&raw).ok_or_else(|| {
                anyhow!("config: invalid {} value: {:?}", ENV_CLEAR_POLICY, raw)
            })?,
            None => ClearPolicy::default(),
        };

        Ok(Self {
            game: GameConfig {
                seed,
                drop_interval_ms,
                clear_policy,
            },
            log_path: get(ENV_LOG_PATH),
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
