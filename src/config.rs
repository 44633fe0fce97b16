use crate::model::DEFAULT_SLOT_DURATION;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "docket.toml";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub ranker: RankerConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    pub slot_duration: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            slot_duration: DEFAULT_SLOT_DURATION,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    pub algorithm: String,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            algorithm: "counting".to_owned(),
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = std::fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot read configuration file {}", file_name.display())
        })?;
        Config::parse(&content).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        toml::from_str(content).wrap_err("invalid configuration")
    }

    /// Load `file_name` if given, otherwise the default file if it exists,
    /// otherwise use defaults.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Config, Error> {
        match file_name {
            Some(file_name) => Config::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.schedule.slot_duration, 30);
        assert_eq!(config.ranker.algorithm, "counting");
    }

    #[test]
    fn test_parse() {
        let config = Config::parse(
            r#"
            [schedule]
            slot_duration = 45

            [ranker]
            algorithm = "sorting"
            "#,
        )
        .unwrap();
        assert_eq!(config.schedule.slot_duration, 45);
        assert_eq!(config.ranker.algorithm, "sorting");
    }

    #[test]
    fn test_partial_section() {
        let config = Config::parse("[ranker]\nalgorithm = \"scanning\"\n").unwrap();
        assert_eq!(config.schedule.slot_duration, 30);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(Config::parse("[schedule]\njudges = 3\n").is_err());
        assert!(Config::parse("[schedule]\nslot_duration = -1\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let missing = Path::new("/nonexistent/docket.toml");
        assert!(Config::load_or_default(Some(missing)).is_err());
    }
}
