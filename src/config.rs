use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::terminal::stdout_is_terminal;
use crate::util::parse_bool_flag;

pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;
pub const MAX_NESTING_DEPTH_LIMIT: usize = 1024;
const MAX_NESTING_ENV: &str = "NESTCALC_MAX_NESTING";
const COLOR_ENV: &str = "NESTCALC_COLOR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub max_nesting_depth: usize,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            color: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let max_nesting_depth = match std::env::var(MAX_NESTING_ENV) {
            Ok(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("Invalid {MAX_NESTING_ENV} '{raw}': expected a positive integer")
            })?,
            Err(_) => DEFAULT_MAX_NESTING_DEPTH,
        };
        let color = std::env::var(COLOR_ENV)
            .ok()
            .and_then(parse_bool_flag)
            .unwrap_or_else(stdout_is_terminal);

        Ok(Self {
            max_nesting_depth,
            color,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_nesting_depth == 0 {
            bail!("{MAX_NESTING_ENV} must be at least 1 to allow nested operations");
        }

        if self.max_nesting_depth > MAX_NESTING_DEPTH_LIMIT {
            bail!(
                "{MAX_NESTING_ENV} is {}, above the supported maximum of {MAX_NESTING_DEPTH_LIMIT}",
                self.max_nesting_depth
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reads_env_overrides() {
        let _env_lock = crate::test_support::ENV_LOCK.blocking_lock();
        std::env::set_var(MAX_NESTING_ENV, " 8 ");
        std::env::set_var(COLOR_ENV, "off");

        let config = Config::load().expect("config loads");
        assert_eq!(config.max_nesting_depth, 8);
        assert!(!config.color);

        std::env::remove_var(MAX_NESTING_ENV);
        std::env::remove_var(COLOR_ENV);
    }

    #[test]
    fn test_load_defaults_nesting_depth() {
        let _env_lock = crate::test_support::ENV_LOCK.blocking_lock();
        std::env::remove_var(MAX_NESTING_ENV);

        let config = Config::load().expect("config loads");
        assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_load_rejects_non_numeric_depth() {
        let _env_lock = crate::test_support::ENV_LOCK.blocking_lock();
        std::env::set_var(MAX_NESTING_ENV, "deep");
        let err = Config::load().expect_err("non-numeric depth must fail");
        assert!(err.to_string().contains(MAX_NESTING_ENV));
        std::env::remove_var(MAX_NESTING_ENV);
    }
}
