//! Runtime configuration from the environment (and an optional `.env`).

use crate::processing::{Ipv6Mode, SubnetPlanner};
use std::path::PathBuf;

pub const ENV_MAX_SUBNETS: &str = "SUBNET_SPLIT_MAX_SUBNETS";
pub const ENV_IPV6_MODE: &str = "SUBNET_SPLIT_IPV6_MODE";
pub const ENV_LOG_CONFIG: &str = "SUBNET_SPLIT_LOG_CONFIG";

/// Largest split calculated unless configured otherwise.
pub const DEFAULT_MAX_SUBNETS: u64 = 65_536;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Size guard for a single split, `None` when disabled.
    pub max_subnets: Option<u64>,
    pub ipv6_mode: Ipv6Mode,
    /// log4rs YAML file used by the binary.
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_subnets: Some(DEFAULT_MAX_SUBNETS),
            ipv6_mode: Ipv6Mode::default(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup. Bad values fall back to defaults.
    pub fn from_vars<F>(get: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, warnings) = Config::load_vars(get);
        for warning in warnings {
            log::warn!("{warning}");
        }
        config
    }

    /// Like [`Config::from_env`], but hands back the warnings for bad values
    /// instead of logging them, for callers that set up logging afterwards.
    pub fn load_env() -> (Config, Vec<String>) {
        dotenv::dotenv().ok();
        Config::load_vars(|key| std::env::var(key).ok())
    }

    pub fn load_vars<F>(get: F) -> (Config, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        if let Some(value) = get(ENV_MAX_SUBNETS) {
            match value.trim().parse::<u64>() {
                Ok(0) => config.max_subnets = None,
                Ok(n) => config.max_subnets = Some(n),
                Err(_) => warnings.push(format!(
                    "Ignoring {ENV_MAX_SUBNETS}={value}, using {DEFAULT_MAX_SUBNETS}"
                )),
            }
        }

        if let Some(value) = get(ENV_IPV6_MODE) {
            match value.parse() {
                Ok(mode) => config.ipv6_mode = mode,
                Err(e) => warnings.push(format!("Ignoring {ENV_IPV6_MODE}: {e}")),
            }
        }

        if let Some(value) = get(ENV_LOG_CONFIG) {
            if !value.trim().is_empty() {
                config.log_config = PathBuf::from(value.trim());
            }
        }

        (config, warnings)
    }

    pub fn planner(&self) -> SubnetPlanner {
        SubnetPlanner::new(self.ipv6_mode, self.max_subnets)
    }
}
