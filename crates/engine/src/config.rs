//! Game configuration read from the environment.
//!
//! - `CONCENTRATION_PAIRS`: pair count, 1..=8 (default 8)
//! - `CONCENTRATION_COLUMNS`: cards per row in the grid (default 4)
//! - `CONCENTRATION_SEED`: RNG seed (default: derived from the clock)
//! - `CONCENTRATION_LOG_PATH`: write logs to this file (default: no logging)

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::types::{DEFAULT_COLUMNS, DEFAULT_PAIRS, MAX_PAIRS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub pairs: usize,
    pub columns: u16,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_PAIRS,
            columns: DEFAULT_COLUMNS,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Invalid values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pairs = parse_var(&lookup, "CONCENTRATION_PAIRS", DEFAULT_PAIRS);
        let pairs = if (1..=MAX_PAIRS).contains(&pairs) {
            pairs
        } else {
            warn!(pairs, max = MAX_PAIRS, "pair count out of range, using default");
            DEFAULT_PAIRS
        };

        let columns = parse_var(&lookup, "CONCENTRATION_COLUMNS", DEFAULT_COLUMNS);
        let columns = if columns == 0 {
            warn!("column count must be positive, using default");
            DEFAULT_COLUMNS
        } else {
            columns
        };

        let seed = parse_var(&lookup, "CONCENTRATION_SEED", clock_seed());

        Self {
            pairs,
            columns,
            seed,
        }
    }
}

/// `CONCENTRATION_LOG_PATH`, kept out of [`GameConfig`] so logging can be
/// installed before the rest of the configuration is parsed and warned about.
pub fn log_path_from_env() -> Option<String> {
    log_path_from(&|name: &str| std::env::var(name).ok())
}

fn log_path_from(lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup("CONCENTRATION_LOG_PATH")
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T {
    match lookup(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(var = name, value = %raw, "unparsable value, using default");
                default
            }
        },
        None => default,
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("CONCENTRATION_PAIRS", "6"),
            ("CONCENTRATION_COLUMNS", "3"),
            ("CONCENTRATION_SEED", "42"),
        ]));

        assert_eq!(
            cfg,
            GameConfig {
                pairs: 6,
                columns: 3,
                seed: 42,
            }
        );
    }

    #[test]
    fn missing_variables_use_defaults() {
        let cfg = GameConfig::from_lookup(|_| None);
        assert_eq!(cfg.pairs, DEFAULT_PAIRS);
        assert_eq!(cfg.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("CONCENTRATION_PAIRS", "9"),
            ("CONCENTRATION_COLUMNS", "0"),
        ]));
        assert_eq!(cfg.pairs, DEFAULT_PAIRS);
        assert_eq!(cfg.columns, DEFAULT_COLUMNS);

        let cfg = GameConfig::from_lookup(lookup_from(&[("CONCENTRATION_PAIRS", "lots")]));
        assert_eq!(cfg.pairs, DEFAULT_PAIRS);
    }

    #[test]
    fn log_path_is_trimmed_and_blank_means_none() {
        let path = log_path_from(&lookup_from(&[(
            "CONCENTRATION_LOG_PATH",
            " /tmp/concentration.log ",
        )]));
        assert_eq!(path.as_deref(), Some("/tmp/concentration.log"));

        assert_eq!(log_path_from(&lookup_from(&[("CONCENTRATION_LOG_PATH", "   ")])), None);
        assert_eq!(log_path_from(&|_: &str| None), None);
    }
}
